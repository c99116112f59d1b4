//! Command-line interface for pocket_games.

use std::path::PathBuf;

use clap::Parser;

/// Pocket Games - Number Challenge, Wordle and Snake in the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket_games")]
#[command(about = "Three small games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config; defaults apply when the file is missing
    #[arg(short, long, default_value = "pocket_games.toml")]
    pub config: PathBuf,

    /// Seed for every random draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between frames
    #[arg(long)]
    pub tick_ms: Option<u64>,
}
