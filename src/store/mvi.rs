//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ Snapshot ──→ View
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```

/// State a reducer owns. Taken by value while a transition runs, so the
/// in-place helper needs `Default` to leave something behind.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or a resolved request outcome.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State`. Network calls and persistence happen
/// around the dispatch, never inside it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over a state held behind a lock guard or `&mut`.
pub fn reduce_in_place<R: Reducer>(state: &mut R::State, intent: R::Intent) {
    *state = R::reduce(std::mem::take(state), intent);
}
