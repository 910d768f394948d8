//! Catalog state store.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `mvi.rs` - The `UiState` / `Intent` / `Reducer` traits
//! - `state.rs` - The snapshot the UI renders
//! - `intent.rs` - Request lifecycle events and synchronous user intents
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `handle.rs` - Shared store: locking, generations, fetches, persistence

mod handle;
mod intent;
pub mod mvi;
mod reducer;
mod state;

pub use handle::{CatalogStore, RequestKind};
pub use intent::{CatalogIntent, SnapshotPatch};
pub use reducer::CatalogReducer;
pub use state::CatalogSnapshot;
