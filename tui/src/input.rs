//! Key Translation
//!
//! Turns crossterm key events into the backend-independent [`Key`] the
//! session understands. Only presses count; release and repeat events are
//! dropped here so the session never sees them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use misskey_core::Key;

/// Translate a terminal key event, `None` for non-press events
pub fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    let key = match event.code {
        KeyCode::Char('c') if ctrl => Key::CtrlC,
        KeyCode::Char('s') if ctrl => Key::CtrlS,
        KeyCode::Char(_) if ctrl => Key::Other,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Other,
    };
    Some(key)
}
