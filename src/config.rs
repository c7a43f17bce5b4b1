//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here changes how contacts are stored; it only shapes the
//! console and its logging.

use crate::console::DEFAULT_PROMPT;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the contact book console.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each command (default: "Command: ")
    pub prompt: String,

    /// Log filter directive (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Prompt text (default: "Command: ")
    /// - `LOG_LEVEL`: `tracing` filter directive (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        Self::validate_log_level(&log_level)?;

        Ok(Config { prompt, log_level })
    }

    /// Check that a log level parses as a `tracing` filter directive.
    fn validate_log_level(level: &str) -> ConfigResult<()> {
        if level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        EnvFilter::try_new(level)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Not a valid filter directive ({}), got: {}", e, level),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
