//! Key mapping from terminal events to the exit request.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Check if a key press should end the game.
///
/// Escape is the exit key. Ctrl-C is honoured too: raw mode swallows the
/// interrupt signal, so it arrives here as an ordinary key.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
