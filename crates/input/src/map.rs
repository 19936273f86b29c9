//! Key mapping from terminal events to game keys.

use crate::types::QUIT_KEY;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to the character the game dispatches on.
///
/// Only plain (optionally shifted) character presses produce a key; control
/// and alt chords, special keys, repeats and releases yield `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` quits, `Q` does not. Ctrl+C also quits, since raw mode keeps it from
/// interrupting the process.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || handle_key_event(key) == Some(QUIT_KEY)
}
