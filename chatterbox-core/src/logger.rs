//! Tracing setup for the server binary.
//!
//! Console output is always on. When a log file is configured, a second plain-text layer
//! appends the same events to it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Returns the log file path, or `None` when file logging is disabled (empty or blank).
pub fn log_file_path(raw: &str) -> Option<&Path> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| Path::new(trimmed))
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `info`, `chatterbox_server=debug`)
/// is used. An empty `log_file` logs to the console only.
pub fn init_tracing(log_file: &str, default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let file_layer = match log_file_path(log_file) {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Tracing already initialized: {}", e))?;

    tracing::info!(log_file = %log_file.trim(), "Tracing initialized");
    Ok(())
}
