//! Adapter to convert crossterm key events to our KeyEvent type

use crossterm::event::{
    KeyCode as TermKeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers,
};

use super::types::{KeyCode, KeyEvent, Modifiers};

/// Convert a crossterm key event to our KeyEvent
///
/// Returns None for key releases and keys with no key-sequence name.
/// Shift is dropped from character keys because the character already
/// carries it (`S-a` arrives as `A`).
pub fn key_event_from_crossterm(event: &TermKeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    let (key, shift) = match event.code {
        TermKeyCode::Char(c) if ctrl && c.is_ascii_alphabetic() => {
            (KeyCode::Char(c.to_ascii_uppercase()), false)
        }
        TermKeyCode::Char(c) => (KeyCode::Char(c), false),
        TermKeyCode::Enter => (KeyCode::Enter, shift),
        TermKeyCode::Tab => (KeyCode::Tab, shift),
        TermKeyCode::BackTab => (KeyCode::Tab, true),
        TermKeyCode::Backspace => (KeyCode::Backspace, shift),
        TermKeyCode::Delete => (KeyCode::Delete, shift),
        TermKeyCode::Esc => (KeyCode::Escape, shift),

        // Arrows
        TermKeyCode::Up => (KeyCode::Up, shift),
        TermKeyCode::Down => (KeyCode::Down, shift),
        TermKeyCode::Left => (KeyCode::Left, shift),
        TermKeyCode::Right => (KeyCode::Right, shift),

        // Navigation
        TermKeyCode::Home => (KeyCode::Home, shift),
        TermKeyCode::End => (KeyCode::End, shift),
        TermKeyCode::PageUp => (KeyCode::PageUp, shift),
        TermKeyCode::PageDown => (KeyCode::PageDown, shift),
        TermKeyCode::Insert => (KeyCode::Insert, shift),

        TermKeyCode::F(n) if (1..=12).contains(&n) => (KeyCode::F(n), shift),
        _ => return None,
    };

    Some(KeyEvent::new(key, Modifiers::new(ctrl, alt, shift)))
}
