//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition for one piece of page state.
///
/// Reducers never touch surfaces, channels or the clock; the page renders
/// and schedules work after comparing the old state with the new one.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`. Intents that do not apply return the
    /// state unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
