//! Terminal front-end.
//!
//! Renders the catalog snapshot and turns key presses into store intents.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::{App, InputMode, Route};
pub use runtime::run;
