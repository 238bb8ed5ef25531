//! Client-side state synchronization for the profile page.
//!
//! Tracks an unsaved avatar edit, guards in-page navigation while it is
//! unsaved, persists it to the server, and reflects assignment status
//! toggles back into their rows.

pub mod avatar;
pub mod config;
pub mod guard;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod page;
pub mod remote;
pub mod runtime;
pub mod surface;
pub mod toggle;

pub use config::PageConfig;
pub use page::ProfilePage;
pub use runtime::PageDriver;
