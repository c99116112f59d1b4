//! Pocket Games terminal front-end.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use pocket_games::GamesConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = GamesConfig::load_or_default(&cli.config)?;
    config.apply_overrides(cli.seed, cli.tick_ms);
    config.validate()?;

    init_tracing(config.log_file())?;
    info!(
        config = %cli.config.display(),
        seed = ?config.seed(),
        tick_ms = config.tick_ms(),
        "Starting Pocket Games"
    );

    tui::run(config).await
}

/// Sends log output to a file so it never mixes with the terminal UI.
fn init_tracing(path: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pocket_games=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
