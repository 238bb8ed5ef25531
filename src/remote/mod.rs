//! Client side of the profile endpoints.

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::HttpProfileApi;
pub use error::RemoteError;
pub use types::{
    PendingSave, SaveResponse, ToggleResponse, FIELD_AVATAR_IMAGE, FIELD_CSRF, FIELD_PRESET,
    HEADER_CSRF, HEADER_REQUESTED_WITH, XML_HTTP_REQUEST,
};

/// The two state-changing requests the profile page makes.
///
/// Implementations resolve every call exactly once, with either a parsed
/// response or a `RemoteError`.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// POST the current avatar edit to the save endpoint.
    async fn save_avatar(&self, save: PendingSave) -> Result<SaveResponse, RemoteError>;

    /// POST to a row's server-assigned toggle URL.
    async fn toggle_status(&self, url: &str, csrf_token: &str)
        -> Result<ToggleResponse, RemoteError>;
}
