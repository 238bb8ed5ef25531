//! Transient success/error banners.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Toast state and notification kinds
//! - `intent.rs` - Show, hover and timer events
//! - `reducer.rs` - State transitions
//! - `notifier.rs` - Rendering, alert fallback and dismiss scheduling

mod intent;
mod notifier;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use notifier::Notifier;
pub use reducer::ToastReducer;
pub use state::{NotificationKind, Toast, ToastState};
