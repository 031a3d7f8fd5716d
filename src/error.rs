//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A move index outside the board (0-8).
    #[display("Index {index} is out of range (must be 0-8)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Engine error with location tracking.
///
/// Only raised for caller bugs. Routine rejected moves are not errors.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;

    #[test]
    fn test_location_is_the_rejecting_call() {
        let err = Game::new().apply_move(12).unwrap_err();
        assert_eq!(err.kind(), GameErrorKind::IndexOutOfRange { index: 12 });
        assert!(err.file.ends_with("engine.rs"), "reported {}", err.file);
        assert!(err.to_string().contains("Index 12 is out of range"));
    }
}
