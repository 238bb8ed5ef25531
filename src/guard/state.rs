use crate::mvi::UiState;

/// Where a guarded link click wanted to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_url: String,
}

impl NavigationIntent {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
        }
    }
}

/// Navigation guard dialog state.
///
/// Whether links are guarded at all depends on the avatar edit being dirty;
/// this only tracks the confirmation round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    /// No confirmation pending.
    #[default]
    Idle,
    /// Dialog open, holding the one live navigation intent.
    Confirming { intent: NavigationIntent },
    /// "Save and continue" chosen; navigation waits for the save.
    SavingBeforeLeave { intent: NavigationIntent },
}

impl UiState for GuardState {}

impl GuardState {
    pub fn is_dialog_open(&self) -> bool {
        matches!(self, Self::Confirming { .. })
    }

    pub fn pending(&self) -> Option<&NavigationIntent> {
        match self {
            Self::Confirming { intent } | Self::SavingBeforeLeave { intent } => Some(intent),
            Self::Idle => None,
        }
    }
}
