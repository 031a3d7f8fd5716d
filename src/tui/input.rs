//! Keyboard input for the terminal front end.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to this square.
    Cursor(Position),
    /// Play the square under the cursor.
    PlaceCursor,
    /// Play a specific square.
    Place(Position),
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, given the current cursor.
pub fn action_for(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceCursor),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_label_or_number(&c.to_string()).map(Action::Place)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_key_actions() {
        let cursor = Position::Center;
        assert_eq!(action_for(KeyCode::Char('1'), cursor), Some(Action::Place(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9'), cursor), Some(Action::Place(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Enter, cursor), Some(Action::PlaceCursor));
        assert_eq!(action_for(KeyCode::Char('r'), cursor), Some(Action::Reset));
        assert_eq!(action_for(KeyCode::Esc, cursor), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('0'), cursor), None);
        assert_eq!(
            action_for(KeyCode::Left, cursor),
            Some(Action::Cursor(Position::MiddleLeft))
        );
    }
}
