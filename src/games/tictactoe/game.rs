//! Game controller: turn order, move solicitation and result announcement.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use crate::error::GameError;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Printed once before the first board.
pub const GREETING: &str = "Let's play tic-tac-toe!";

/// Tic-tac-toe game controller.
///
/// Owns the board, whose turn it is and the result so far. One value
/// plays exactly one game.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    last_player: Option<Player>,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and nobody to have moved.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        Player::next(self.last_player)
    }

    /// Places the current player's mark at `pos` and re-evaluates the status.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.last_player = Some(player);

        self.status = if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        };
        Ok(self.status)
    }

    /// Prompts `player` until a line names an empty square, and returns it.
    ///
    /// Malformed keys and occupied squares are dropped silently and the
    /// prompt is repeated.
    ///
    /// # Errors
    ///
    /// [`GameError::InputClosed`] if `input` runs out, [`GameError::Io`]
    /// on read or write failure.
    #[instrument(skip(self, input, output))]
    pub fn solicit_move<R, W>(
        &self,
        player: Player,
        input: &mut R,
        output: &mut W,
    ) -> Result<Position, GameError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            write!(output, "Player {}, enter your move: ", player)?;
            output.flush()?;

            let mut line = Vec::new();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            let bytes = line.strip_suffix(b"\n").unwrap_or(&line);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let Ok(text) = std::str::from_utf8(bytes) else {
                debug!(len = bytes.len(), "Move is not UTF-8");
                continue;
            };

            match Position::from_key(text) {
                Ok(pos) if self.board.is_empty(pos) => return Ok(pos),
                Ok(pos) => debug!(%pos, "Square already taken"),
                Err(e) => debug!(error = %e, "Unreadable move"),
            }
        }
    }

    /// Plays the game to completion over `input` and `output`.
    ///
    /// Prints the greeting and empty board, then alternates prompts
    /// (X first) and board renderings until a line is completed or the
    /// board fills, and finally prints the result.
    #[instrument(skip_all)]
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<GameStatus, GameError>
    where
        R: BufRead,
        W: Write,
    {
        info!("Starting game");
        writeln!(output, "{}", GREETING)?;
        writeln!(output, "{}", self.board)?;

        while !self.status.is_terminal() {
            let player = self.to_move();
            let pos = self.solicit_move(player, input, output)?;
            self.play(pos)?;
            writeln!(output, "{}", self.board)?;
        }

        if let Some(result) = announcement(self.status) {
            writeln!(output, "{}", result)?;
        }
        info!(status = ?self.status, moves = self.history.len(), "Game finished");
        Ok(self.status)
    }
}

/// Final line for a finished game, `None` while it is still in progress.
pub fn announcement(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Won(player) => Some(format!("Winner is {}!", player)),
        GameStatus::Tied => Some("Tie game!".to_string()),
        GameStatus::InProgress => None,
    }
}
