//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable overriding the engine URL.
pub const SERVER_URL_ENV: &str = "LUDO_SERVER_URL";

/// Settings for one client run.
///
/// Loaded from TOML; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ClientConfig {
    /// Base URL of the game engine.
    #[serde(default = "default_server_url")]
    #[setters(into)]
    server_url: String,

    /// Milliseconds between state polls.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Milliseconds the dice animation runs after a roll request.
    #[serde(default = "default_roll_delay_ms")]
    roll_delay_ms: u64,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    request_timeout_ms: u64,

    /// Where tracing output goes while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    #[setters(into)]
    log_file: PathBuf,
}

#[instrument]
fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

#[instrument]
fn default_poll_interval_ms() -> u64 {
    2000
}

#[instrument]
fn default_roll_delay_ms() -> u64 {
    600
}

#[instrument]
fn default_request_timeout_ms() -> u64 {
    5000
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("ludo_client.log")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            poll_interval_ms: default_poll_interval_ms(),
            roll_delay_ms: default_roll_delay_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(server_url = %config.server_url, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies [`SERVER_URL_ENV`] if it is set.
    #[instrument(skip(self))]
    pub fn apply_env(self) -> Self {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(server_url = %url, "Server URL taken from environment");
                self.with_server_url(url)
            }
            _ => self,
        }
    }

    /// Rejects values the client cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_url.trim().is_empty() {
            return Err(ConfigError::new("server_url must not be empty".to_string()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::new(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::new(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Poll interval.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Post-roll delay.
    pub fn roll_delay(&self) -> Duration {
        Duration::from_millis(self.roll_delay_ms)
    }

    /// Request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
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
