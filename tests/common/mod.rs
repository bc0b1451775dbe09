//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use keyline::editable::{EditorState, LineBuffer, StringBuffer};
use keyline::keymap::{parse_key_event, KeyEvent};
use keyline::{KeybindingManager, KillRing, LineSession, Result};

/// Buffer with the cursor marked by `|` in `text`
///
/// `buffer("foo|bar")` is "foobar" with the cursor at 3. Without a marker the
/// cursor sits at the end.
pub fn buffer(text: &str) -> StringBuffer {
    match text.find('|') {
        Some(cursor) => StringBuffer::with_cursor(&text.replacen('|', "", 1), cursor),
        None => StringBuffer::from_text(text),
    }
}

/// Render a buffer back into the `|` notation
pub fn render(buffer: &StringBuffer) -> String {
    let mut text = buffer.as_str().to_string();
    text.insert(buffer.cursor(), '|');
    text
}

/// Parse key strings, panicking on malformed test input
pub fn keys(sequences: &[&str]) -> Vec<KeyEvent> {
    sequences
        .iter()
        .map(|s| parse_key_event(s).unwrap_or_else(|e| panic!("bad key {:?}: {}", s, e)))
        .collect()
}

/// Plain character events for every char of `text`
pub fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(KeyEvent::char).collect()
}

/// Manager with the Emacs preset
pub fn emacs_manager() -> KeybindingManager {
    KeybindingManager::with_emacs_preset().unwrap()
}

/// Session with the Emacs preset and an empty history
pub fn emacs_session() -> LineSession {
    LineSession::with_emacs_preset().unwrap()
}

/// Run `events` through `manager` against `buf`, stopping at the first error
pub fn press(
    manager: &mut KeybindingManager,
    buf: &mut StringBuffer,
    ring: &KillRing,
    events: &[KeyEvent],
) -> Result<()> {
    let mut state = EditorState::new(buf, ring);
    for event in events {
        manager.process_key(event, &mut state)?;
    }
    Ok(())
}

/// Apply a simple action directly to a marked buffer and render the result
pub fn apply(name: &str, text: &str, ring: &KillRing) -> String {
    let action = keyline::actions::registry::lookup(name)
        .unwrap_or_else(|| panic!("unknown action {}", name));
    let mut buf = buffer(text);
    {
        let mut state = EditorState::new(&mut buf, ring);
        keyline::actions::run_simple(action, &mut state).unwrap();
    }
    render(&buf)
}
