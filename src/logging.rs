use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "PROFILE_SYNC_LOG";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "profile_sync=info";

/// Per-instance log file: `{base}.{timestamp}.{pid}`.
pub fn log_file_path(base: &str) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, timestamp, std::process::id()))
}

/// Install a file subscriber if `PROFILE_SYNC_LOG` is set.
///
/// Returns the file written to, or `None` when logging stays off. A host
/// that already installed a subscriber keeps it; the file is still created.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_ENV).ok().filter(|v| !v.is_empty())?;
    let path = log_file_path(&base);

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: a tracing subscriber is already installed");
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_keeps_base_and_pid() {
        let path = log_file_path("/tmp/page.log");
        let name = path.to_string_lossy().into_owned();
        assert!(name.starts_with("/tmp/page.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
    }
}
