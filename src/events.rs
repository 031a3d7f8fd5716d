//! Notifications emitted by the engine.
//!
//! The engine never touches presentation. It emits [`GameEvent`]s and
//! anything implementing [`GameObserver`] reacts to them: redrawing marks,
//! recolouring the turn indicator, drawing the winning-line overlay.

use super::types::{Mark, WinLine};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::{debug, instrument, trace};

/// A state change observed by presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A mark was written into a cell. Fires first on every placed mark.
    #[display("{mark} filled cell {index}")]
    CellFilled {
        /// Board index.
        index: usize,
        /// Mark written.
        mark: Mark,
    },
    /// The game continues with `next` to move.
    #[display("{next} to move")]
    TurnSwitched {
        /// Player now to move.
        next: Mark,
    },
    /// A line was completed.
    #[display("{winner} won on {line:?}")]
    GameWon {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled with no line.
    #[display("Draw")]
    GameDraw,
    /// The game was reset to its initial state.
    #[display("Board reset")]
    BoardReset,
}

/// Receives engine notifications.
///
/// Observers run synchronously inside the engine operation that produced
/// the event, in registration order.
pub trait GameObserver: Send {
    /// Called once per event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Forwards events over a channel. A dropped receiver is ignored.
#[derive(Debug, Clone, derive_new::new)]
pub struct ChannelObserver {
    tx: Sender<GameEvent>,
}

impl GameObserver for ChannelObserver {
    fn notify(&mut self, event: &GameEvent) {
        if self.tx.send(*event).is_err() {
            trace!(%event, "Event receiver dropped");
        }
    }
}

/// Handle returned by subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{_0}")]
pub struct SubscriptionId(u64);

/// Registered observers in registration order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
}

impl Observers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        debug!(%id, total = self.entries.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if `id` was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        debug!(%id, removed, "Observer unsubscribed");
        removed
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers `event` to every observer.
    pub fn emit(&mut self, event: GameEvent) {
        trace!(%event, observers = self.entries.len(), "Emitting event");
        for (_, observer) in &mut self.entries {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_reaches_all_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Arc::clone(&seen);
        observers.subscribe(move |_: &GameEvent| first.lock().unwrap().push("first"));
        let second = Arc::clone(&seen);
        observers.subscribe(move |_: &GameEvent| second.lock().unwrap().push("second"));

        observers.emit(GameEvent::BoardReset);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut observers = Observers::new();
        let id = observers.subscribe(|_: &GameEvent| {});
        assert_eq!(observers.len(), 1);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());
    }

    #[test]
    fn test_channel_observer() {
        let (tx, rx) = mpsc::channel();
        let mut observers = Observers::new();
        observers.subscribe(ChannelObserver::new(tx));
        observers.emit(GameEvent::GameDraw);
        assert_eq!(rx.try_recv(), Ok(GameEvent::GameDraw));
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut observers = Observers::new();
        observers.subscribe(ChannelObserver::new(tx));
        observers.emit(GameEvent::BoardReset);
    }
}
