//! History consistency invariant: history and board agree.

use super::super::types::GameState;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: history lists each filled cell exactly once and nothing else.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();
        let filled = board.cells().len() - board.empty_indices().len();

        let distinct: HashSet<_> = history.iter().collect();
        distinct.len() == history.len()
            && history.len() == filled
            && history.iter().all(|&i| matches!(board.get(i), Some(c) if c.mark().is_some()))
    }

    fn description() -> &'static str {
        "History matches the filled cells on the board"
    }
}
