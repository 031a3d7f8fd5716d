//! Status consistency invariant: the status agrees with the board.

use super::super::rules::is_full;
use super::super::types::{Cell, GameState, GameStatus};
use super::Invariant;

/// Invariant: a Won line really is the winner's, and Draw means a full board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => true,
            GameStatus::Won { winner, line } => line
                .indices()
                .iter()
                .all(|&i| board.get(i) == Some(Cell::Occupied(*winner))),
            GameStatus::Draw => is_full(board),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, WinLine};

    #[test]
    fn test_claimed_win_without_line() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Won {
            winner: Mark::X,
            line: WinLine([0, 1, 2]),
        });
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_draw_requires_full_board() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Draw);
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
