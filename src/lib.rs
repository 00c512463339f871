//! Strictly tic-tac-toe - a two-player console game.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid storage with row, column and diagonal queries
//! - **Rules**: win detection (rows, then columns, then diagonals) and fullness
//! - **Game**: turn order, move prompting and result announcement
//!
//! # Example
//!
//! ```
//! use strictly_ttt::{Game, GameStatus, Player};
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new("tl\nml\ntm\nmm\ntr\n");
//! let mut output = Vec::new();
//! let status = Game::new().run(&mut input, &mut output).unwrap();
//! assert_eq!(status, GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_LOG_FILTER, GameConfig};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COL_KEY, GREETING, Game, GameStatus, Move, MoveError, Player, Position, ROW_KEY,
    SIZE, Square, announcement, rules,
};
