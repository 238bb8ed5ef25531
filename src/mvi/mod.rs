//! Model-View-Intent (MVI) primitives.
//!
//! Every stateful piece of the profile page (avatar edit, toast, navigation
//! guard) is a value object transformed by a pure reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Surface
//!    ↑                                │
//!    └────────── PageEvent ───────────┘
//! ```
//!
//! - **State**: plain value describing what the page shows
//! - **Intent**: user action or completed asynchronous work
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
