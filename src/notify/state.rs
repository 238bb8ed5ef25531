use std::fmt;

use crate::mvi::UiState;

/// Style of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    /// Any other kind a caller names; shown with the neutral style.
    Other(String),
}

impl NotificationKind {
    /// Parse a kind name. Unknown names are kept, never rejected.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Other(_) => "toast-info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// A banner currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: NotificationKind,
    /// Identifies which dismiss timer belongs to this banner.
    pub generation: u64,
    /// Pointer is over the banner; auto-dismiss is held.
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible(Toast),
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn toast(&self) -> Option<&Toast> {
        match self {
            Self::Visible(toast) => Some(toast),
            Self::Hidden => None,
        }
    }
}
