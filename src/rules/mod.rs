//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after
//! every placed mark; the pieces are public so they can be tested alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, winning_line};

use super::types::{Board, GameStatus, Mark};
use tracing::instrument;

/// Status the game is in after `mover` placed a mark on `board`.
///
/// The win check runs strictly before the full-board check, so a final
/// move that both fills the board and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> GameStatus {
    if let Some((_, line)) = winning_line(board) {
        return GameStatus::Won {
            winner: mover,
            line,
        };
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}
