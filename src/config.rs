//! Runtime configuration from the environment.
//!
//! Loading order:
//! 1. `.env` in the current directory (optional, via `dotenvy`)
//! 2. process environment
//! 3. built-in defaults
//!
//! Variables:
//! - `WW_NOTICE_SECS`: how long the "select a specialist" notice stays up (default 3)
//! - `WW_LOG_FILE`: append logs to this file instead of stderr
//! - `RUST_LOG`: log filter directives (default `warn`)

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::session::DEFAULT_NOTICE_TTL;

pub const ENV_NOTICE_SECS: &str = "WW_NOTICE_SECS";
pub const ENV_LOG_FILE: &str = "WW_LOG_FILE";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub notice_ttl: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notice_ttl: DEFAULT_NOTICE_TTL,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(get: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = get(ENV_NOTICE_SECS) {
            config.notice_ttl = parse_notice_secs(&raw)?;
        }

        config.log_file = get(ENV_LOG_FILE)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_notice_secs(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::usage(format!(
            "{ENV_NOTICE_SECS} must be a positive whole number of seconds (got '{raw}')."
        ))),
    }
}
