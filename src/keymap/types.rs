//! Core types for the keymap system: KeyEvent, Modifiers, KeyCode, KeymapMode

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b001);
    pub const ALT: Modifiers = Modifiers(0b010);
    pub const SHIFT: Modifiers = Modifiers(0b100);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b001;
        }
        if alt {
            bits |= 0b010;
        }
        if shift {
            bits |= 0b100;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if alt (meta) is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// The payload of a key event: a Unicode character or a named special key
///
/// Being an enum, a key is always exactly one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key
    Char(char),

    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F12
}

impl KeyCode {
    /// Canonical name used in key-sequence strings, `None` for characters
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            KeyCode::Char(_) | KeyCode::F(_) => return None,
            KeyCode::Enter => "RET",
            KeyCode::Tab => "TAB",
            KeyCode::Backspace => "DEL",
            KeyCode::Delete => "DELETE",
            KeyCode::Escape => "ESC",
            KeyCode::Up => "UP",
            KeyCode::Down => "DOWN",
            KeyCode::Left => "LEFT",
            KeyCode::Right => "RIGHT",
            KeyCode::Home => "HOME",
            KeyCode::End => "END",
            KeyCode::PageUp => "PGUP",
            KeyCode::PageDown => "PGDN",
            KeyCode::Insert => "INSERT",
        };
        Some(name)
    }

    /// Look up a named special key (all-uppercase token)
    pub fn from_name(name: &str) -> Option<KeyCode> {
        let key = match name {
            "RET" | "ENTER" | "RETURN" => KeyCode::Enter,
            "TAB" => KeyCode::Tab,
            "DEL" | "BACKSPACE" | "BS" => KeyCode::Backspace,
            "DELETE" => KeyCode::Delete,
            "ESC" | "ESCAPE" => KeyCode::Escape,
            "SPC" | "SPACE" => KeyCode::Char(' '),
            "UP" => KeyCode::Up,
            "DOWN" => KeyCode::Down,
            "LEFT" => KeyCode::Left,
            "RIGHT" => KeyCode::Right,
            "HOME" => KeyCode::Home,
            "END" => KeyCode::End,
            "PGUP" | "PAGEUP" => KeyCode::PageUp,
            "PGDN" | "PAGEDOWN" => KeyCode::PageDown,
            "INSERT" | "INS" => KeyCode::Insert,
            _ => return function_key(name),
        };
        Some(key)
    }
}

/// Parse an `F<1-12>` token
fn function_key(name: &str) -> Option<KeyCode> {
    let digits = name.strip_prefix('F')?;
    if digits.starts_with('+') {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=12).contains(&n).then_some(KeyCode::F(n))
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => write!(f, "SPC"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => write!(f, "{}", other.name().unwrap_or_default()),
        }
    }
}

/// A single key event: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Create a new key event
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a key event with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create an unmodified character key event
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a ctrl+character event, canonicalized the way the parser does
    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_uppercase()), Modifiers::CTRL)
    }

    /// Create an alt+character event
    pub const fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), Modifiers::ALT)
    }

    /// The character this event would insert as plain text, if any
    ///
    /// Only unmodified (or shift-only) characters qualify.
    pub fn printable_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.mods.ctrl() && !self.mods.alt() && !c.is_control() => {
                Some(c)
            }
            _ => None,
        }
    }

    /// The literal character inserted when this event follows `quoted-insert`
    pub fn literal_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if self.mods.ctrl() && ('@'..='_').contains(&c) => {
                Some((c as u8 & 0x1f) as char)
            }
            KeyCode::Char(c) if self.mods.ctrl() && c == '?' => Some('\x7f'),
            KeyCode::Char(c) => Some(c),
            KeyCode::Enter => Some('\n'),
            KeyCode::Tab => Some('\t'),
            KeyCode::Escape => Some('\x1b'),
            KeyCode::Backspace => Some('\x7f'),
            _ => None,
        }
    }
}

/// Keymap modes. Each mode has its own binding table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeymapMode {
    #[default]
    Emacs,
    #[serde(alias = "vi")]
    ViInsert,
    ViCommand,
}

impl KeymapMode {
    pub const ALL: [KeymapMode; 3] = [
        KeymapMode::Emacs,
        KeymapMode::ViInsert,
        KeymapMode::ViCommand,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeymapMode::Emacs => "emacs",
            KeymapMode::ViInsert => "vi-insert",
            KeymapMode::ViCommand => "vi-command",
        }
    }
}

impl fmt::Display for KeymapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for KeymapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emacs" => Ok(KeymapMode::Emacs),
            "vi" | "vi-insert" => Ok(KeymapMode::ViInsert),
            "vi-command" => Ok(KeymapMode::ViCommand),
            other => Err(format!("unknown keymap mode: {}", other)),
        }
    }
}
