//! Thread-safe handle to a single game.

use super::engine::{Game, MoveOutcome};
use super::error::GameError;
use super::events::{GameObserver, SubscriptionId};
use super::types::{GameState, GameStatus, Mark};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// A [`Game`] behind one mutex.
///
/// Every call takes the lock once, so a move's check-place-evaluate
/// sequence is never interleaved with another operation. Clones share the
/// same game.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates a handle to a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        // Observers only run after a move has settled, so the guarded game is whole.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Game lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// See [`Game::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<MoveOutcome, GameError> {
        self.lock().apply_move(index)
    }

    /// See [`Game::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().snapshot()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        *self.lock().status()
    }

    /// Player to move.
    pub fn current_player(&self) -> Mark {
        self.lock().current_player()
    }

    /// Registers an observer. It runs while the lock is held.
    pub fn subscribe(&self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.lock().subscribe(observer)
    }

    /// Removes an observer.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }
}
