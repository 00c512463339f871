//! Board positions and the two-character move keys that address them.
//!
//! A move key is a row letter from [`ROW_KEY`] followed by a column
//! letter from [`COL_KEY`]: `"tl"` is the top-left square, `"mm"` the
//! center, `"br"` the bottom-right.

use super::action::MoveError;
use super::types::{Board, SIZE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Row letters: top, middle, bottom.
pub const ROW_KEY: &str = "tmb";

/// Column letters: left, middle, right.
pub const COL_KEY: &str = "lmr";

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Decodes a two-character move key such as `"tl"` or `"bm"`.
    ///
    /// Anything other than exactly one row letter followed by one column
    /// letter is rejected; case and surrounding whitespace matter.
    #[instrument]
    pub fn from_key(key: &str) -> Result<Position, MoveError> {
        let invalid = || MoveError::InvalidKey(key.to_string());
        let mut chars = key.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let row = ROW_KEY.find(r).ok_or_else(invalid)?;
        let col = COL_KEY.find(c).ok_or_else(invalid)?;
        Self::from_coords(row, col).ok_or_else(invalid)
    }

    /// Encodes this position as its two-character move key.
    pub fn key(self) -> String {
        // Both key strings are ASCII, so byte offsets are char offsets.
        let row = &ROW_KEY[self.row()..=self.row()];
        let col = &COL_KEY[self.col()..=self.col()];
        format!("{}{}", row, col)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from (row, col).
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Self::from_index(row * SIZE + col)
        } else {
            None
        }
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
