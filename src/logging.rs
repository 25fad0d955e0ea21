use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default since stdout carries the JSON document.
/// Set `OPTEXTRACT_LOG` to a file path to enable it. The level comes from
/// `RUST_LOG` (default `info`).
///
/// Returns the path actually written to, if logging was enabled.
pub fn init_tracing(settings: &Settings) -> Option<PathBuf> {
    let log_path = settings.log_path.as_deref()?;
    let unique_path = unique_log_path(log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

/// `{path}.{timestamp}.{pid}`, so concurrent runs never share a file.
fn unique_log_path(path: &Path, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", path.display(), timestamp, pid))
}
