//! Win detection logic for tic-tac-toe.
//!
//! Lines are checked in a fixed order: rows top to bottom, then columns
//! left to right, then the descending diagonal, then the ascending one.
//! The first uniform line decides the winner.

use super::super::types::SIZE;
use super::super::{Board, Player, Square};
use tracing::instrument;

/// Returns the owner of `line` if all of its squares hold the same player.
///
/// Three empty squares are uniform but never a win.
fn line_winner(line: [Square; SIZE]) -> Option<Player> {
    let first = line[0].player()?;
    line.iter()
        .all(|sq| *sq == Square::Occupied(first))
        .then_some(first)
}

/// First winning row, top to bottom.
fn check_rows(board: &Board) -> Option<Player> {
    (0..SIZE).find_map(|n| line_winner(board.row(n)))
}

/// First winning column, left to right.
fn check_cols(board: &Board) -> Option<Player> {
    (0..SIZE).find_map(|n| line_winner(board.col(n)))
}

fn check_diags(board: &Board) -> Option<Player> {
    line_winner(board.desc_diag()).or_else(|| line_winner(board.asc_diag()))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    check_rows(board)
        .or_else(|| check_cols(board))
        .or_else(|| check_diags(board))
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    fn place(board: &mut Board, positions: &[Position], player: Player) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        assert_eq!(line_winner([Square::Empty; SIZE]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_ascending_diagonal() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        place(&mut board, &[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, &[Position::TopLeft, Position::TopCenter], Player::X);
        place(&mut board, &[Position::TopRight], Player::O);
        assert_eq!(check_winner(&board), None);
    }

    // Two complete lines for different players cannot arise in play, but
    // pin down which one the checker reports. A row and a column always
    // share a square, so the contest is within a tier.
    #[test]
    fn test_upper_row_reported_first() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::O,
        );
        place(
            &mut board,
            &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_left_column_reported_first() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            Player::X,
        );
        place(
            &mut board,
            &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_overlapping_lines_of_one_player() {
        // X owns row 0, column 0 and the ascending diagonal; every tier
        // agrees on the winner.
        let mut board = Board::new();
        place(
            &mut board,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
            ],
            Player::X,
        );
        assert_eq!(check_rows(&board), Some(Player::X));
        assert_eq!(check_cols(&board), Some(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_diagonal_only_when_rows_and_columns_fail() {
        let mut board = Board::new();
        place(
            &mut board,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::O,
        );
        place(&mut board, &[Position::TopLeft, Position::BottomRight], Player::X);
        assert_eq!(check_rows(&board), None);
        assert_eq!(check_cols(&board), None);
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
