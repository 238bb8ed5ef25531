use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub messages: Messages,
}

/// Where the page talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Origin that relative URLs are resolved against (e.g., "http://127.0.0.1:8000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the avatar save endpoint (the avatar form's action).
    #[serde(default = "default_save_path")]
    pub save_path: String,
    /// Prefix preset avatars are served from.
    #[serde(default = "default_media_prefix")]
    pub media_prefix: String,
}

/// Toast behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds (default: 3000).
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

/// Navigation guard behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GuardConfig {
    /// What "save and continue" does when the save fails.
    #[serde(default)]
    pub on_save_failure: SaveFailurePolicy,
    /// What a second guarded click does while the dialog is open.
    #[serde(default)]
    pub overlapping_links: OverlapPolicy,
}

/// Behaviour of "save and continue" when the save does not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaveFailurePolicy {
    /// Navigate right after issuing the save. A failed save loses the edit.
    #[default]
    NavigateAnyway,
    /// Wait for the save; navigate only if it succeeded.
    StayOnFailure,
}

/// Behaviour of a guarded link click while the confirmation dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// The newest click replaces the pending target.
    #[default]
    Replace,
    /// The dialog is exclusive; later clicks are ignored until it resolves.
    Reject,
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_save_success")]
    pub save_success: String,
    /// Prefix for server-supplied save errors.
    #[serde(default = "default_save_failed_prefix")]
    pub save_failed_prefix: String,
    /// Used when the server rejects the save without a reason.
    #[serde(default = "default_save_failed")]
    pub save_failed: String,
    #[serde(default = "default_save_transport_error")]
    pub save_transport_error: String,
    #[serde(default = "default_decode_failed")]
    pub decode_failed: String,
    #[serde(default = "default_toggle_failed")]
    pub toggle_failed: String,
    #[serde(default = "default_toggle_transport_error")]
    pub toggle_transport_error: String,
    #[serde(default = "default_missing_token")]
    pub missing_token: String,
    #[serde(default = "default_unload_warning")]
    pub unload_warning: String,
    /// Button label on a completed row (the action undoes completion).
    #[serde(default = "default_mark_not_completed")]
    pub mark_not_completed: String,
    /// Button label on an open row.
    #[serde(default = "default_mark_completed")]
    pub mark_completed: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_save_path() -> String {
    "/profile/".to_string()
}

fn default_media_prefix() -> String {
    "/media/".to_string()
}

fn default_dismiss_after_ms() -> u64 {
    3000
}

fn default_save_success() -> String {
    "Аватарка успешно обновлена!".to_string()
}

fn default_save_failed_prefix() -> String {
    "Ошибка при сохранении аватарки: ".to_string()
}

fn default_save_failed() -> String {
    "Ошибка при сохранении аватарки.".to_string()
}

fn default_save_transport_error() -> String {
    "Произошла ошибка при сохранении аватарки.".to_string()
}

fn default_decode_failed() -> String {
    "Не удалось прочитать изображение.".to_string()
}

fn default_toggle_failed() -> String {
    "Ошибка при обновлении статуса.".to_string()
}

fn default_toggle_transport_error() -> String {
    "Произошла ошибка при обновлении статуса.".to_string()
}

fn default_missing_token() -> String {
    "Не найден токен безопасности. Обновите страницу.".to_string()
}

fn default_unload_warning() -> String {
    "У вас есть несохранённые изменения. Вы уверены, что хотите уйти?".to_string()
}

fn default_mark_not_completed() -> String {
    "Не сдал".to_string()
}

fn default_mark_completed() -> String {
    "Сдал".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            save_path: default_save_path(),
            media_prefix: default_media_prefix(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            save_success: default_save_success(),
            save_failed_prefix: default_save_failed_prefix(),
            save_failed: default_save_failed(),
            save_transport_error: default_save_transport_error(),
            decode_failed: default_decode_failed(),
            toggle_failed: default_toggle_failed(),
            toggle_transport_error: default_toggle_transport_error(),
            missing_token: default_missing_token(),
            unload_warning: default_unload_warning(),
            mark_not_completed: default_mark_not_completed(),
            mark_completed: default_mark_completed(),
        }
    }
}

impl NotificationConfig {
    pub fn dismiss_after(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.dismiss_after_ms)
    }
}
