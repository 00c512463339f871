//! Optional TOML configuration for the console game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Filter used when neither the environment, the command line nor a
/// config file supplies one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings read from a config file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// `tracing` filter directive, e.g. `"strictly_ttt=debug"`.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl GameConfig {
    /// Creates a configuration with the given log filter.
    pub fn new(log_filter: impl Into<String>) -> Self {
        Self {
            log_filter: log_filter.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILTER)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
