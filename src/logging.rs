//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when `WW_LOG_FILE` is set.
//! CLI commands log to stderr unless a file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Cli,
    Tui,
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &AppConfig, mode: LogMode) -> Result<(), AppError> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    match (&config.log_file, mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::io(format!("Failed to open log file {}: {e}", path.display()))
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, LogMode::Cli) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogMode::Tui) => {}
    }

    Ok(())
}
