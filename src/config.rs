//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_2048.toml";

/// Configuration for the command-line driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Seed used when no `--seed` flag is given. `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// End interactive play after the first win notification.
    #[serde(default)]
    stop_on_win: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: default_log_filter(),
            stop_on_win: false,
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, stop_on_win = config.stop_on_win, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Returns the CLI seed if given, otherwise the configured one.
    pub fn resolve_seed(&self, cli_seed: Option<u64>) -> Option<u64> {
        cli_seed.or(self.seed)
    }

    /// Overrides `stop_on_win`.
    pub fn with_stop_on_win(mut self, stop_on_win: bool) -> Self {
        self.stop_on_win = stop_on_win;
        self
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
