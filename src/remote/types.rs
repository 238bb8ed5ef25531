use serde::{Deserialize, Serialize};

use crate::avatar::AvatarSelection;

/// Multipart field carrying an uploaded file.
pub const FIELD_AVATAR_IMAGE: &str = "avatar_image";
/// Multipart field carrying the chosen preset name.
pub const FIELD_PRESET: &str = "default_avatar_select";
/// Multipart field carrying the anti-forgery token.
pub const FIELD_CSRF: &str = "csrf_token";

pub const HEADER_CSRF: &str = "X-CSRFToken";
pub const HEADER_REQUESTED_WITH: &str = "X-Requested-With";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Payload of one save attempt. Built fresh each time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub selection: Option<AvatarSelection>,
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub message: String,
}
