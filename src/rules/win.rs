//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Mark, WinLine};
use tracing::instrument;

/// The 8 winning lines, scanned in this order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Finds the first completed line in table order.
///
/// Returns the mark on the line and the line itself. Lines later in the
/// table are not checked once one matches.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line.indices();
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return Some((mark, line));
        }
    }

    None
}
