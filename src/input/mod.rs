//! Key mapping for the terminal frontend.
//!
//! One key press becomes at most one engine input. Key repeat is left to
//! the terminal; the engine consumes each intent on its next tick.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Input;

/// Map a key event to an engine input, if any
pub fn map_key(key: KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(Input::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Input::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Some(Input::SoftDropOn),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => Some(Input::RotateClockwise),
        KeyCode::Char('r') => Some(Input::Restart),
        _ => None,
    }
}

/// Quit keys: q, Esc, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
