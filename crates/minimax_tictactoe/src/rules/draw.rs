//! Full-board detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X O X / O X O / X O X: X holds both diagonals
        let board: Board = "XOX/OXO/XOX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
