//! Unidirectional state primitives shared by the card's UI pieces.
//!
//! ```text
//! input ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are the only place state changes. Side effects (clipboard, sound,
//! network) happen in `App` before or after dispatch, never inside a reducer.

/// Snapshot of one piece of UI state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a key press, a finished request, a timer tick.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
