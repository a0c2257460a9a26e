//! Logging setup
//!
//! Human-readable logs go to stderr so the pass/fail report on stdout stays
//! clean. `--log-file` adds a JSON log written off-thread.

use crate::error::{ProbeError, ProbeResult};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging options resolved from flags and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Optional JSON log destination
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Build the filter: `RUST_LOG` first, then `level`, then `info`
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// The returned guard must be held until exit, or buffered file output is lost.
/// A subscriber that is already installed is left in place.
pub fn init(settings: &LogSettings) -> ProbeResult<Option<WorkerGuard>> {
    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| {
                    ProbeError::Unexpected(format!("Invalid log file path: {}", path.display()))
                })?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(&dir)
                .map_err(|err| {
                    ProbeError::Unexpected(format!(
                        "Cannot open log file {}: {}",
                        path.display(),
                        err
                    ))
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if let Err(err) = tracing_subscriber::registry()
        .with(build_filter(&settings.level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        tracing::debug!("Logging already initialized: {}", err);
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_build_filter_uses_level_without_rust_log() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(build_filter("debug").to_string(), "debug");
    }

    #[test]
    #[serial]
    fn test_build_filter_prefers_rust_log() {
        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(build_filter("debug").to_string(), "warn");
        std::env::remove_var("RUST_LOG");
    }

    #[test]
    fn test_init_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("probe.jsonl");
        let settings = LogSettings {
            level: "debug".to_string(),
            file: Some(path),
        };

        let guard = init(&settings).unwrap();
        assert!(guard.is_some());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_init_rejects_unusable_log_path() {
        let root = LogSettings {
            level: "info".to_string(),
            file: Some(PathBuf::from("/")),
        };
        assert!(init(&root).is_err());

        // An existing directory cannot be opened as the log file
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("taken")).unwrap();
        let taken = LogSettings {
            level: "info".to_string(),
            file: Some(dir.path().join("taken")),
        };
        assert!(init(&taken).is_err());
    }
}
