//! Errors that end a console game early.

use crate::games::tictactoe::MoveError;
use derive_more::{Display, Error, From};

/// Failure while running an interactive game.
///
/// Bad move text is never one of these: it is handled by re-prompting.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Input ended while a player was being prompted for a move.
    #[display("Input closed before the game finished")]
    #[from(ignore)]
    InputClosed,

    /// Reading the move or writing the board failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// A move was applied that the board could not accept.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}
