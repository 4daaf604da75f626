//! Ludo client - terminal front end for a remote Ludo engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    ludo_client::tui::run_tui(config).await
}
