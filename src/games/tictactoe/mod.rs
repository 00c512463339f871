//! Two-player console tic-tac-toe.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GREETING, announcement};
pub use position::{COL_KEY, Position, ROW_KEY};
pub use types::{Board, GameStatus, Player, SIZE, Square};
