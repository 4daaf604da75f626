//! Command-line interface for ludo_client.

use std::path::PathBuf;

use clap::Parser;
use ludo_client::{ClientConfig, ConfigError};
use tracing::instrument;

/// Ludo client - terminal front end for a remote Ludo engine
#[derive(Parser, Debug)]
#[command(name = "ludo_client")]
#[command(about = "Play Ludo against a remote game engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game engine URL (overrides config file and LUDO_SERVER_URL)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between state polls
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Milliseconds the dice animation runs after a roll
    #[arg(long)]
    pub roll_delay_ms: Option<u64>,

    /// File receiving tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective configuration: file, then environment, then flags.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        }
        .apply_env();

        if let Some(url) = &self.server_url {
            config = config.with_server_url(url.clone());
        }
        if let Some(ms) = self.poll_interval_ms {
            config = config.with_poll_interval_ms(ms);
        }
        if let Some(ms) = self.roll_delay_ms {
            config = config.with_roll_delay_ms(ms);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
