//! Logging - tracing subscriber setup

use std::fs;
use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::config::LoggingConfig;
use crate::error::{Error, Result};

/// Log file prefix inside the configured directory
const LOG_FILE_PREFIX: &str = "showcase.log";

/// Parse the configured default level ("error" .. "trace", or "off")
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level.trim().parse::<LevelFilter>().map_err(|_| Error::Invalid {
        message: format!("unknown log level `{level}`"),
    })
}

/// Open the daily rolling file writer for `directory`
pub fn file_writer(directory: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(directory)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the configured level. When a log directory is set,
/// a daily rolling file is written next to stdout; keep the returned guard
/// alive until exit so buffered lines get flushed. An unknown level falls
/// back to `info` and an unusable directory falls back to stdout only; both
/// are reported once the subscriber is up.
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (level, level_error) = match parse_level(&config.level) {
        Ok(level) => (level, None),
        Err(err) => (LevelFilter::INFO, Some(err)),
    };

    let (file, file_error) = match config.directory.as_deref().map(file_writer) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    let guard = match file {
        Some((writer, guard)) => {
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(LocalTime::rfc_3339())
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    if let Some(err) = level_error {
        warn!(error = %err, "Invalid log level, using info");
    }
    if let Some(err) = file_error {
        warn!(
            error = %err,
            directory = ?config.directory,
            "Log directory unusable, logging to stdout only"
        );
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off").ok(), Some(LevelFilter::OFF));
    }

    #[test]
    fn unknown_level_is_reported() {
        assert!(matches!(parse_level("verbose"), Err(Error::Invalid { .. })));
        assert!(matches!(parse_level(""), Err(Error::Invalid { .. })));
    }

    #[test]
    fn directory_under_regular_file_is_reported() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let directory = file.path().join("logs");

        let result = file_writer(&directory);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn writable_directory_opens_writer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let directory = dir.path().join("logs");

        let result = file_writer(&directory);
        assert!(result.is_ok());
        assert!(directory.is_dir());
    }
}
