//! Strictly Tic-Tac-Toe - an observable tic-tac-toe engine
//!
//! The engine owns the board, the player to move and the game status, and
//! announces every change as a [`GameEvent`]. Presentation code subscribes
//! and never touches game state directly.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] with `apply_move` / `reset` and read-only queries
//! - **Rules**: pure win and draw evaluation over a [`Board`]
//! - **Events**: [`GameEvent`] notifications and [`GameObserver`]s
//! - **Presentation**: [`Presenter`] turns events into display state
//! - **Shared**: [`SharedGame`] for use across threads
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Mark, WinLine};
//!
//! # fn main() -> Result<(), strictly_tictactoe::GameError> {
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(
//!     game.status(),
//!     &GameStatus::Won { winner: Mark::X, line: WinLine([0, 1, 2]) }
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod events;
mod invariants;
mod position;
mod presentation;
pub mod rules;
mod shared;
mod types;

// Crate-level exports - Engine
pub use engine::{Game, MoveOutcome, Rejection};

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{BOARD_SIZE, Board, Cell, GameState, GameStatus, Mark, WinLine};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Notifications
pub use events::{ChannelObserver, GameEvent, GameObserver, Observers, SubscriptionId};

// Crate-level exports - Invariants
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};

// Crate-level exports - Presentation
pub use presentation::{
    Accent, AccentParseError, BOARD_EXTENT, BoardView, CELL_GAP, CELL_SIZE, Overlay, Point,
    Presenter, Theme, cell_center,
};

// Crate-level exports - Concurrency
pub use shared::SharedGame;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};
