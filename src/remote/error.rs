use thiserror::Error;

/// Failures talking to the profile endpoints.
///
/// All of these are transport-class: the server never produced a usable
/// answer. Application-level refusals arrive as `success: false` inside
/// an `Ok` response.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to encode request: {reason}")]
    Encoding { reason: String },

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unreadable response from '{url}' (HTTP {status}): {source}")]
    InvalidResponse {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Client(_) => "client",
            RemoteError::InvalidUrl { .. } => "invalid_url",
            RemoteError::Encoding { .. } => "encoding",
            RemoteError::Transport { .. } => "transport",
            RemoteError::InvalidResponse { .. } => "invalid_response",
        }
    }
}
