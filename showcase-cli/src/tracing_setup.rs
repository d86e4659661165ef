//! Tracing setup for the showcase binary
//!
//! Usage:
//!   showcase --debug export           # Debug logging to console
//!   RUST_LOG=showcase=debug showcase  # Fine-grained log control
//!
//! The TUI owns the terminal, so while it runs logs go to daily-rotated
//! files under `~/.showcase/logs/` instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let default = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Initialize tracing with console output
pub fn init_console(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Keep about a week of daily logs
const MAX_LOG_FILES: usize = 7;

/// Daily-rotated `showcase.<date>.log` files under `dir`
pub fn log_appender(dir: &Path) -> Result<RollingFileAppender> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("showcase")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

/// Initialize tracing into rotated log files.
///
/// Logs are written off-thread; keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init_file(config: &TracingConfig, dir: &Path) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(log_appender(dir)?);

    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    Ok(guard)
}

/// Default TUI log directory: `~/.showcase/logs`
pub fn default_log_dir(state_dir: &Path) -> PathBuf {
    state_dir.join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn appender_writes_rotated_log_files() {
        let dir = TempDir::new().unwrap();
        let log_dir = default_log_dir(dir.path());

        let mut appender = log_appender(&log_dir).unwrap();
        appender.write_all(b"showcase screen mounted\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(&log_dir)
            .unwrap()
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("showcase."), "{}", names[0]);
        assert!(names[0].ends_with(".log"), "{}", names[0]);
    }

    #[test]
    fn appender_reports_unusable_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("logs");
        fs::write(&blocker, "x").unwrap();

        assert!(log_appender(&blocker).is_err());
    }
}
