//! Strictly tic-tac-toe - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_ttt::{DEFAULT_LOG_FILTER, Game, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let filter = cli
        .log_filter
        .clone()
        .unwrap_or_else(|| config.log_filter().clone());
    initialize_tracing(&filter);

    run_game()
}

/// Plays one game on stdin/stdout.
#[instrument]
fn run_game() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let status = Game::new().run(&mut stdin.lock(), &mut stdout.lock())?;
    info!(?status, "Exiting");
    Ok(())
}

/// Diagnostics go to stderr so the game transcript on stdout stays clean.
fn initialize_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
