//! Navigation guard: keeps unsaved avatar edits from being lost to a
//! link click or page unload.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Confirmation state and the pending navigation intent
//! - `intent.rs` - Clicks and dialog decisions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::GuardIntent;
pub use reducer::GuardReducer;
pub use state::{GuardState, NavigationIntent};
