//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// A full board on which no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::*;
    use strum::IntoEnumIterator;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let square = match ch {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                board.set_position(r, c, square);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!board.is_full());
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["XXX", "OOX", "OXO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
