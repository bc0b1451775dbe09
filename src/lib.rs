//! keyline - Readline-compatible line-editing core
//!
//! This crate provides the pieces an interactive shell needs between raw key
//! events and its line buffer: a key-sequence codec, per-mode binding tables,
//! a catalog of Readline editing actions and a thread-safe kill ring.

pub mod actions;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod keymap;
pub mod kill_ring;
pub mod session;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use editable::{EditorState, LineBuffer, LineOutcome, StringBuffer};
pub use error::{LineEditError, Result};
pub use keymap::{KeyEvent, KeybindingManager, KeymapMode};
pub use kill_ring::KillRing;
pub use session::LineSession;
