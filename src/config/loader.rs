use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::PageConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl PageConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/profile-sync/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("profile-sync").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `PageConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(PageConfig::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: PageConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute URL
    /// - The media prefix is a `/`-delimited path
    /// - The dismiss delay is non-zero
    /// - No user-facing message is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = reqwest::Url::parse(&self.endpoints.base_url) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", self.endpoints.base_url, e),
            });
        }

        let prefix = &self.endpoints.media_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("media_prefix '{}' must start and end with '/'", prefix),
            });
        }

        if self.notifications.dismiss_after_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "dismiss_after_ms must be greater than zero".to_string(),
            });
        }

        let m = &self.messages;
        let required = [
            ("save_success", &m.save_success),
            ("save_failed", &m.save_failed),
            ("save_transport_error", &m.save_transport_error),
            ("decode_failed", &m.decode_failed),
            ("toggle_failed", &m.toggle_failed),
            ("toggle_transport_error", &m.toggle_transport_error),
            ("missing_token", &m.missing_token),
            ("unload_warning", &m.unload_warning),
            ("mark_not_completed", &m.mark_not_completed),
            ("mark_completed", &m.mark_completed),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Message '{}' must not be empty", name),
            });
        }

        Ok(())
    }
}
