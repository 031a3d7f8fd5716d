//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(is_full(&board));
    }
}
