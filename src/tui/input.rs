//! Keyboard handling.

use crossterm::event::KeyCode;
use tictactoe_minimax::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Select a cell by index.
    Select(usize),
    /// Switch between single-player and two-player.
    ToggleMode,
    /// Start a new round.
    NewRound,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Digits 1-9 select cells in reading order.
pub fn action_for(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewRound),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select(cursor.to_index())),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Action::Select(digit as usize - 1)),
            _ => None,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(action_for(KeyCode::Char('1'), Position::Center), Some(Action::Select(0)));
        assert_eq!(action_for(KeyCode::Char('9'), Position::Center), Some(Action::Select(8)));
        assert_eq!(action_for(KeyCode::Char('0'), Position::Center), None);
        assert_eq!(action_for(KeyCode::Enter, Position::TopRight), Some(Action::Select(2)));
        assert_eq!(action_for(KeyCode::Char('m'), Position::Center), Some(Action::ToggleMode));
    }
}
