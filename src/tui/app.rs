//! Application state and logic.

use super::input::Action;
use anyhow::Result;
use std::sync::mpsc::{self, Receiver};
use strictly_tictactoe::{ChannelObserver, Game, GameEvent, MoveOutcome, Position, Presenter, Theme};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: Game,
    presenter: Presenter,
    events: Receiver<GameEvent>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        let (tx, events) = mpsc::channel();
        let mut game = Game::new();
        game.subscribe(ChannelObserver::new(tx));
        Self {
            game,
            presenter: Presenter::new(theme),
            events,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The view to draw.
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlaceCursor => self.place(self.cursor)?,
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos)?;
            }
            Action::Reset => self.game.reset(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        self.drain_events()
    }

    fn place(&mut self, pos: Position) -> Result<()> {
        if let MoveOutcome::Ignored(reason) = self.game.apply_move(pos.to_index())? {
            debug!(%pos, %reason, "Move ignored");
        }
        Ok(())
    }

    /// Feeds queued engine events to the presenter.
    fn drain_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            self.presenter.apply(&event);
            if matches!(event, GameEvent::GameWon { .. } | GameEvent::GameDraw) {
                let snapshot = serde_json::to_string(self.game.state())?;
                info!(%snapshot, "Final position\n{}", self.game.board().display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Mark;

    #[test]
    fn test_play_to_win_updates_view() {
        let mut app = App::new(Theme::default());
        for n in [1, 4, 2, 5, 3] {
            let pos = Position::from_index(n - 1).unwrap();
            app.handle(Action::Place(pos)).unwrap();
        }
        let view = app.presenter().view();
        assert_eq!(view.status_text(), "Winner!");
        assert_eq!(view.marks()[2], Some(Mark::X));
    }

    #[test]
    fn test_reset_clears_view() {
        let mut app = App::new(Theme::default());
        app.handle(Action::PlaceCursor).unwrap();
        assert_eq!(app.presenter().view().marks()[4], Some(Mark::X));
        app.handle(Action::Reset).unwrap();
        assert_eq!(app.presenter().view(), Presenter::default().view());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::default());
        app.handle(Action::Quit).unwrap();
        assert!(app.should_quit());
    }
}
