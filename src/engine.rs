//! The tic-tac-toe game engine.
//!
//! [`Game`] owns one [`GameState`] and the registered observers. It is the
//! only mutator of that state: [`Game::apply_move`] and [`Game::reset`] are
//! the whole write surface, and every change they make is announced as a
//! [`GameEvent`].

use super::error::{GameError, GameErrorKind};
use super::events::{GameEvent, GameObserver, Observers, SubscriptionId};
use super::invariants::assert_invariants;
use super::rules;
use super::types::{BOARD_SIZE, Board, GameState, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
}

/// Result of [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; carries the status after evaluation.
    Applied(GameStatus),
    /// Nothing changed and nothing was emitted.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
    observers: Observers,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this is the player who made the final move.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// Returns the indices played so far.
    pub fn history(&self) -> &[usize] {
        self.state.history()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Indices that would currently be accepted.
    pub fn available_moves(&self) -> Vec<usize> {
        if self.is_over() {
            Vec::new()
        } else {
            self.state.board().empty_indices()
        }
    }

    /// Registers an observer for all subsequent events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// A move on an occupied cell, or after the game is over, is ignored:
    /// no state change and no event. On success [`GameEvent::CellFilled`]
    /// is emitted, followed by exactly one of [`GameEvent::GameWon`],
    /// [`GameEvent::GameDraw`] or [`GameEvent::TurnSwitched`]. Observers
    /// run only after the move has fully settled.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::IndexOutOfRange`] if `index` is not on the
    /// board. That is a caller bug, not a routine rejection.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if index >= BOARD_SIZE {
            return Err(GameError::new(GameErrorKind::IndexOutOfRange { index }));
        }

        if self.is_over() {
            debug!(index, "Move ignored, game is over");
            return Ok(MoveOutcome::Ignored(Rejection::GameOver));
        }

        let mark = self.state.current_player();
        if !self.state.place_current(index) {
            debug!(index, "Move ignored, cell occupied");
            return Ok(MoveOutcome::Ignored(Rejection::CellOccupied));
        }

        // All state changes land before any observer runs.
        let status = rules::evaluate(self.state.board(), mark);
        self.state.set_status(status);
        let follow_up = match status {
            GameStatus::Won { winner, line } => {
                info!(%winner, ?line, "Game won");
                GameEvent::GameWon { winner, line }
            }
            GameStatus::Draw => {
                info!("Game drawn");
                GameEvent::GameDraw
            }
            GameStatus::InProgress => {
                self.state.switch_player();
                let next = self.state.current_player();
                debug!(%next, "Turn switched");
                GameEvent::TurnSwitched { next }
            }
        };

        assert_invariants(&self.state);

        self.observers.emit(GameEvent::CellFilled { index, mark });
        self.observers.emit(follow_up);

        Ok(MoveOutcome::Applied(status))
    }

    /// Restores the initial state and emits [`GameEvent::BoardReset`].
    ///
    /// Callable at any time, including mid-game.
    #[instrument(skip(self), fields(moves = self.state.history().len()))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
        self.observers.emit(GameEvent::BoardReset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{InvariantSet, TicTacToeInvariants};
    use crate::types::{Cell, WinLine};
    use std::sync::{Arc, Mutex};

    fn play(game: &mut Game, moves: &[usize]) {
        for &i in moves {
            game.apply_move(i).expect("index in range");
        }
    }

    fn recorded(game: &mut Game) -> Arc<Mutex<Vec<GameEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        game.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(*event));
        events
    }

    #[test]
    fn test_first_move_switches_turn() {
        let mut game = Game::new();
        let outcome = game.apply_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Applied(GameStatus::InProgress));
        assert_eq!(game.board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(game.current_player(), Mark::O);
        assert_eq!(game.history(), &[4]);
    }

    #[test]
    fn test_observer_sees_settled_state() {
        let mut game = Game::new();
        game.subscribe(|event: &GameEvent| {
            if matches!(event, GameEvent::CellFilled { .. }) {
                panic!("observer failure");
            }
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| game.apply_move(0)));
        assert!(result.is_err());
        assert_eq!(game.history(), &[0]);
        assert_eq!(game.current_player(), Mark::O);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(<TicTacToeInvariants as InvariantSet<GameState>>::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut game = Game::new();
        let events = recorded(&mut game);
        let err = game.apply_move(9).unwrap_err();
        assert_eq!(err.kind(), GameErrorKind::IndexOutOfRange { index: 9 });
        assert!(err.file.ends_with("engine.rs"), "reported {}", err.file);
        assert_eq!(game.snapshot(), GameState::new());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();
        let events = recorded(&mut game);
        let before = game.snapshot();

        let outcome = game.apply_move(0).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(Rejection::CellOccupied));
        assert_eq!(game.snapshot(), before);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_winning_move_events() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4]);
        let events = recorded(&mut game);

        game.apply_move(2).unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                GameEvent::CellFilled {
                    index: 2,
                    mark: Mark::X
                },
                GameEvent::GameWon {
                    winner: Mark::X,
                    line: WinLine([0, 1, 2])
                },
            ]
        );
        // The mover stays current once the game is over.
        assert_eq!(game.current_player(), Mark::X);
        assert!(game.available_moves().is_empty());
    }

    #[test]
    fn test_terminal_lock() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.snapshot();
        assert_eq!(
            game.apply_move(5).unwrap(),
            MoveOutcome::Ignored(Rejection::GameOver)
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_reset_emits_and_restores() {
        let mut game = Game::new();
        play(&mut game, &[4, 0]);
        let events = recorded(&mut game);

        game.reset();
        assert_eq!(game.snapshot(), GameState::new());
        assert_eq!(*events.lock().unwrap(), vec![GameEvent::BoardReset]);
    }

    #[test]
    fn test_unsubscribed_observer_is_silent() {
        let mut game = Game::new();
        let events = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&events);
        let id = game.subscribe(move |_: &GameEvent| *sink.lock().unwrap() += 1);
        game.apply_move(0).unwrap();
        assert!(game.unsubscribe(id));
        game.apply_move(1).unwrap();
        assert_eq!(*events.lock().unwrap(), 2);
    }
}
