//! Key-sequence codec
//!
//! Converts between human-authorable key strings (`"C-a"`, `"M-DEL"`, `"RET"`)
//! and [`KeyEvent`]s. The canonical string form is what the keymap uses as its
//! lookup key.
//!
//! Grammar: zero or more modifier prefixes (`C-`, `M-`, `S-`, any order,
//! repeats are harmless) followed by either an all-uppercase special key name,
//! an `F1`..`F12` token, or a single character.
//!
//! Ctrl+letter events store the uppercase letter (the ASCII control
//! equivalent) while the canonical string spells it lowercase, so `"C-a"` and
//! `"C-A"` name the same key and both encode back to `"C-a"`.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::{LineEditError, Result};

use super::types::{KeyCode, KeyEvent, Modifiers};

/// Canonical string form of a single key event
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeySequence(String);

impl KeySequence {
    /// Longest encoded form the keymap stores
    pub const MAX_LEN: usize = 32;

    /// Parse and canonicalize a key string
    pub fn parse(s: &str) -> Result<Self> {
        parse_key_event(s)?.to_sequence()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into the event this sequence names
    pub fn to_event(&self) -> Result<KeyEvent> {
        parse_key_event(&self.0)
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeySequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a key string into a key event
pub fn parse_key_event(input: &str) -> Result<KeyEvent> {
    let mut mods = Modifiers::NONE;
    let mut rest = input;

    loop {
        let flag = if rest.starts_with("C-") {
            Modifiers::CTRL
        } else if rest.starts_with("M-") {
            Modifiers::ALT
        } else if rest.starts_with("S-") {
            Modifiers::SHIFT
        } else {
            break;
        };
        mods = mods | flag;
        rest = &rest[2..];
    }

    let key = parse_key_code(rest).ok_or_else(|| LineEditError::InvalidFormat(input.to_string()))?;

    let key = match key {
        KeyCode::Char(c) if mods.ctrl() && c.is_ascii_lowercase() => {
            KeyCode::Char(c.to_ascii_uppercase())
        }
        other => other,
    };

    Ok(KeyEvent::new(key, mods))
}

/// Parse the part of a key string after the modifier prefixes
fn parse_key_code(rest: &str) -> Option<KeyCode> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return Some(KeyCode::Char(first));
    }

    if !rest
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }
    KeyCode::from_name(rest)
}

/// Write the canonical form of `event` into `out`, refusing to grow past `capacity` bytes
pub fn encode_into(event: &KeyEvent, out: &mut String, capacity: usize) -> Result<()> {
    let start = out.len();
    // Writing to a String is infallible
    let _ = write!(out, "{}", event);
    let needed = out.len() - start;
    if needed > capacity {
        out.truncate(start);
        return Err(LineEditError::BufferOverflow { needed, capacity });
    }
    Ok(())
}

impl KeyEvent {
    /// Encode into the canonical key sequence
    pub fn to_sequence(&self) -> Result<KeySequence> {
        let mut out = String::with_capacity(8);
        encode_into(self, &mut out, KeySequence::MAX_LEN)?;
        Ok(KeySequence(out))
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.ctrl() {
            f.write_str("C-")?;
        }
        if self.mods.alt() {
            f.write_str("M-")?;
        }
        if self.mods.shift() {
            f.write_str("S-")?;
        }
        match self.key {
            KeyCode::Char(c) if self.mods.ctrl() && c.is_ascii_uppercase() => {
                write!(f, "{}", c.to_ascii_lowercase())
            }
            key => write!(f, "{}", key),
        }
    }
}

impl FromStr for KeyEvent {
    type Err = LineEditError;

    fn from_str(s: &str) -> Result<Self> {
        parse_key_event(s)
    }
}

impl FromStr for KeySequence {
    type Err = LineEditError;

    fn from_str(s: &str) -> Result<Self> {
        KeySequence::parse(s)
    }
}
