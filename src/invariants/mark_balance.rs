//! Mark balance invariant: X moves first, then players alternate.

use super::super::types::{GameState, Mark};
use super::Invariant;

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_after_x_move() {
        let mut state = GameState::new();
        state.place_current(4);
        assert!(MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_o_ahead_is_violation() {
        let mut state = GameState::new();
        state.switch_player();
        state.place_current(4);
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
