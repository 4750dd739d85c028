//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// A pure state transition: `(State, Intent) -> State`.
///
/// Reducers are the only place state changes. No I/O, no clocks; the
/// caller performs side effects around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
