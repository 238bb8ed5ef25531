use crate::config::{OverlapPolicy, SaveFailurePolicy};
use crate::mvi::Reducer;

use super::intent::GuardIntent;
use super::state::GuardState;

pub struct GuardReducer;

impl Reducer for GuardReducer {
    type State = GuardState;
    type Intent = GuardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GuardIntent::LinkClicked { intent, overlap } => match state {
                GuardState::Confirming { .. } if overlap == OverlapPolicy::Reject => state,
                // A click while waiting on save-before-leave starts a new
                // confirmation; the earlier target is dropped.
                _ => GuardState::Confirming { intent },
            },

            GuardIntent::SaveChosen { policy } => match state {
                GuardState::Confirming { intent } => match policy {
                    SaveFailurePolicy::NavigateAnyway => GuardState::Idle,
                    SaveFailurePolicy::StayOnFailure => GuardState::SavingBeforeLeave { intent },
                },
                other => other,
            },

            GuardIntent::DiscardChosen | GuardIntent::Cancelled => match state {
                GuardState::Confirming { .. } => GuardState::Idle,
                other => other,
            },

            GuardIntent::SaveSettled => match state {
                GuardState::SavingBeforeLeave { .. } => GuardState::Idle,
                other => other,
            },

            GuardIntent::Left => GuardState::Idle,
        }
    }
}
