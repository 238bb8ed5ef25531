mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Endpoints, GuardConfig, Messages, NotificationConfig, OverlapPolicy, PageConfig,
    SaveFailurePolicy,
};
