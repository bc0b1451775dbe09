//! Key codec and keybinding manager
//!
//! This module provides a data-driven keybinding system that:
//! - Encodes key events as canonical Readline-style strings (`C-a`, `M-DEL`, `RET`)
//! - Keeps one binding table per keymap mode (Emacs, vi insert, vi command)
//! - Dispatches key events to actions from the static registry
//! - Enables user customization via TOML config files
//!
//! # Architecture
//!
//! ```text
//! crossterm::KeyEvent → KeyEvent → KeySequence → Keymap::lookup() → ActionDescriptor
//! ```
//!
//! # Example
//!
//! ```
//! use keyline::editable::{EditorState, StringBuffer};
//! use keyline::keymap::{KeyEvent, KeybindingManager};
//! use keyline::KillRing;
//!
//! let mut manager = KeybindingManager::with_emacs_preset().unwrap();
//! let ring = KillRing::default();
//! let mut buffer = StringBuffer::from_text("echo hello");
//! let mut state = EditorState::new(&mut buffer, &ring);
//!
//! manager.process_key(&KeyEvent::ctrl('w'), &mut state).unwrap();
//! assert_eq!(buffer.as_str(), "echo ");
//! assert_eq!(ring.get_current().unwrap(), "hello");
//! ```

mod binding;
pub mod config;
pub mod crossterm_adapter;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod manager;
mod sequence;
mod types;

pub use binding::Keybinding;
pub use config::{
    apply_bindings, load_keymap_file, parse_keymap_toml, KeymapConfig, KeymapError, LoadSummary,
};
pub use crossterm_adapter::key_event_from_crossterm;
pub use defaults::EMACS_BINDINGS;
pub use keymap::Keymap;
pub use manager::{KeybindingManager, LookupStats};
pub use sequence::{encode_into, parse_key_event, KeySequence};
pub use types::{KeyCode, KeyEvent, KeymapMode, Modifiers};
