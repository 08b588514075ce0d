//! Logging initialization shared by `serve` and `seed`.
//!
//! Line format: `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`, no ANSI codes so the
//! optional log file stays plain text.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer,
    fmt::time::FormatTime,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Used when RUST_LOG is unset. sqlx logs every statement at info, which floods request logs.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber, writing to stdout and, when given, appending to `log_file`.
///
/// Load `.env` before calling so RUST_LOG is visible. Fails if a subscriber is already set.
pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            BoxMakeWriter::new(io::stdout.and(file))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/wdl.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing(None);

        assert!(init_tracing(None).is_err());
    }
}
