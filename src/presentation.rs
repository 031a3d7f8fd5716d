//! Presentation view-model driven by engine events.
//!
//! Nothing here feeds back into the engine. [`Presenter`] folds
//! [`GameEvent`]s into a [`BoardView`] that a front end renders: marks,
//! status and result texts with their colours, and the winning-line
//! overlay on a 320x320 layout of 100px cells separated by 10px gaps.

use super::events::{GameEvent, GameObserver};
use super::types::{BOARD_SIZE, GameState, GameStatus, Mark, WinLine};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of a cell in layout units.
pub const CELL_SIZE: f64 = 100.0;
/// Gap between cells in layout units.
pub const CELL_GAP: f64 = 10.0;
/// Side length of the whole board in layout units.
pub const BOARD_EXTENT: f64 = 3.0 * CELL_SIZE + 2.0 * CELL_GAP;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("#{r:02x}{g:02x}{b:02x}")]
pub struct Accent {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

/// A colour string that is not `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid colour {input:?}, expected #rrggbb")]
pub struct AccentParseError {
    /// The rejected input.
    pub input: String,
}

impl Accent {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> Result<Self, AccentParseError> {
        let err = || AccentParseError {
            input: input.to_string(),
        };
        let hex = input.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        Ok(Self {
            r: channel(0..2).map_err(|_| err())?,
            g: channel(2..4).map_err(|_| err())?,
            b: channel(4..6).map_err(|_| err())?,
        })
    }
}

impl std::str::FromStr for Accent {
    type Err = AccentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Colours used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of X marks and X's turn.
    pub x: Accent,
    /// Colour of O marks and O's turn.
    pub o: Accent,
    /// Colour of draw texts.
    pub neutral: Accent,
}

impl Theme {
    /// Accent of a mark.
    pub fn accent(&self, mark: Mark) -> Accent {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Accent { r: 0x38, g: 0xbd, b: 0xf8 },
            o: Accent { r: 0xf4, g: 0x72, b: 0xb6 },
            neutral: Accent { r: 0xf8, g: 0xfa, b: 0xfc },
        }
    }
}

/// A point in layout units, origin top-left, y growing down.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// Centre of the cell at `index`: (col * 110 + 50, row * 110 + 50).
pub fn cell_center(index: usize) -> Point {
    let row = (index / 3) as f64;
    let col = (index % 3) as f64;
    let pitch = CELL_SIZE + CELL_GAP;
    Point::new(col * pitch + CELL_SIZE / 2.0, row * pitch + CELL_SIZE / 2.0)
}

/// The line drawn over a winning triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Centre of the first cell of the line.
    pub start: Point,
    /// Centre of the last cell of the line.
    pub end: Point,
    /// Stroke colour (the winner's accent).
    pub color: Accent,
}

impl Overlay {
    /// Overlay for `line`, stroked in `color`.
    pub fn for_line(line: WinLine, color: Accent) -> Self {
        Self {
            start: cell_center(line.first()),
            end: cell_center(line.last()),
            color,
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct BoardView {
    /// Mark shown in each cell.
    marks: [Option<Mark>; BOARD_SIZE],
    /// Turn indicator or result headline.
    status_text: String,
    /// Colour of `status_text`.
    status_color: Accent,
    /// Result message, shown once the game is over.
    message: Option<(String, Accent)>,
    /// Winning triple, for cell highlighting.
    winning_line: Option<WinLine>,
    /// Line drawn over the winning triple.
    overlay: Option<Overlay>,
}

impl BoardView {
    fn initial(theme: &Theme) -> Self {
        Self {
            marks: [None; BOARD_SIZE],
            status_text: turn_text(Mark::X),
            status_color: theme.x,
            message: None,
            winning_line: None,
            overlay: None,
        }
    }
}

fn turn_text(mark: Mark) -> String {
    format!("Player {mark}'s Turn")
}

/// Folds engine events into a [`BoardView`].
#[derive(Debug, Clone)]
pub struct Presenter {
    theme: Theme,
    view: BoardView,
}

impl Presenter {
    /// Creates a presenter showing a fresh game.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            view: BoardView::initial(&theme),
            theme,
        }
    }

    /// Current view.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Theme in use.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Updates the view for one event.
    #[instrument(skip_all, fields(event = %event))]
    pub fn apply(&mut self, event: &GameEvent) {
        let theme = self.theme;
        let view = &mut self.view;
        match *event {
            GameEvent::CellFilled { index, mark } => {
                if let Some(slot) = view.marks.get_mut(index) {
                    *slot = Some(mark);
                }
            }
            GameEvent::TurnSwitched { next } => {
                view.status_text = turn_text(next);
                view.status_color = theme.accent(next);
            }
            GameEvent::GameWon { winner, line } => {
                self.show_win(winner, line);
            }
            GameEvent::GameDraw => self.show_draw(),
            GameEvent::BoardReset => {
                self.view = BoardView::initial(&theme);
            }
        }
        debug!(status = %self.view.status_text, "View updated");
    }

    /// Rebuilds the view from a state snapshot.
    #[instrument(skip_all)]
    pub fn sync(&mut self, state: &GameState) {
        let mut view = BoardView::initial(&self.theme);
        for (slot, cell) in view.marks.iter_mut().zip(state.board().cells()) {
            *slot = cell.mark();
        }
        self.view = view;

        match *state.status() {
            GameStatus::InProgress => {
                let mark = state.current_player();
                self.view.status_text = turn_text(mark);
                self.view.status_color = self.theme.accent(mark);
            }
            GameStatus::Won { winner, line } => self.show_win(winner, line),
            GameStatus::Draw => self.show_draw(),
        }
    }

    fn show_win(&mut self, winner: Mark, line: WinLine) {
        let accent = self.theme.accent(winner);
        self.view.status_text = "Winner!".to_string();
        self.view.status_color = accent;
        self.view.message = Some((format!("Player {winner} has won the game!"), accent));
        self.view.winning_line = Some(line);
        self.view.overlay = Some(Overlay::for_line(line, accent));
    }

    fn show_draw(&mut self) {
        let neutral = self.theme.neutral;
        self.view.status_text = "Draw!".to_string();
        self.view.status_color = neutral;
        self.view.message = Some(("It's a tie game.".to_string(), neutral));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl GameObserver for Presenter {
    fn notify(&mut self, event: &GameEvent) {
        self.apply(event);
    }
}
