//! Key mapping from terminal events to player input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a player event.
///
/// Arrow keys and w/a/s/d drive movement; `q`, Esc, and Ctrl-C quit.
/// Anything else is not an event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::MoveBackward),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::TurnRight),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
