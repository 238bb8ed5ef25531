use crate::config::{OverlapPolicy, SaveFailurePolicy};
use crate::mvi::Intent;

use super::state::NavigationIntent;

#[derive(Debug, Clone)]
pub enum GuardIntent {
    /// A link was clicked while the avatar edit is dirty.
    LinkClicked {
        intent: NavigationIntent,
        overlap: OverlapPolicy,
    },
    /// "Save and continue".
    SaveChosen { policy: SaveFailurePolicy },
    /// "Discard and continue".
    DiscardChosen,
    /// Dialog closed without a decision.
    Cancelled,
    /// The save awaited by `SavingBeforeLeave` finished, either way.
    SaveSettled,
    /// The page navigated through an unguarded path; nothing stays pending.
    Left,
}

impl Intent for GuardIntent {}
