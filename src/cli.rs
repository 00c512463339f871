//! Command-line interface for strictly_ttt.

use clap::Parser;

/// Two-player tic-tac-toe on the console.
///
/// Moves are a row letter (t, m, b) followed by a column letter (l, m, r),
/// e.g. `tl` for the top-left square.
#[derive(Parser, Debug)]
#[command(name = "strictly_ttt")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Log filter for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}
