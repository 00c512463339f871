//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::position::Position;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who moves after `current`.
    ///
    /// `None` means nobody has moved yet, which always hands the first
    /// turn to X.
    pub fn next(current: Option<Player>) -> Self {
        current.map_or(Player::X, Player::opponent)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SIZE * SIZE],
        }
    }

    /// Returns true when no square is empty.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        !self.squares.contains(&Square::Empty)
    }

    /// Writes `square` at (`row`, `col`).
    ///
    /// Callers guarantee `row` and `col` are below [`SIZE`]; move keys
    /// can only decode to in-range coordinates.
    #[instrument(skip(self))]
    pub fn set_position(&mut self, row: usize, col: usize, square: Square) {
        debug_assert!(row < SIZE && col < SIZE, "({row}, {col}) is off the board");
        self.squares[row * SIZE + col] = square;
    }

    /// Returns the square at (`row`, `col`).
    pub fn get_position(&self, row: usize, col: usize) -> Square {
        debug_assert!(row < SIZE && col < SIZE, "({row}, {col}) is off the board");
        self.squares[row * SIZE + col]
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.get_position(pos.row(), pos.col())
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.set_position(pos.row(), pos.col(), square);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Squares of row `n`, left to right.
    pub fn row(&self, n: usize) -> [Square; SIZE] {
        std::array::from_fn(|col| self.get_position(n, col))
    }

    /// Squares of column `n`, top to bottom.
    pub fn col(&self, n: usize) -> [Square; SIZE] {
        std::array::from_fn(|row| self.get_position(row, n))
    }

    /// Top-left to bottom-right.
    pub fn desc_diag(&self) -> [Square; SIZE] {
        std::array::from_fn(|i| self.get_position(i, i))
    }

    /// Top-right to bottom-left.
    pub fn asc_diag(&self) -> [Square; SIZE] {
        std::array::from_fn(|i| self.get_position(i, SIZE - 1 - i))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; SIZE * SIZE] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows as ` X | O |   ` separated by a dash rule of the same width.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..SIZE)
            .map(|n| {
                let cells: Vec<String> = self.row(n).iter().map(|s| s.to_string()).collect();
                format!(" {} ", cells.join(" | "))
            })
            .collect();
        let rule = "-".repeat(rows[0].len());
        write!(f, "{}", rows.join(&format!("\n{}\n", rule)))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
