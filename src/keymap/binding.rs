//! Keybinding struct representing a mapping from a key sequence to an action

use crate::actions::ActionDescriptor;

use super::sequence::KeySequence;
use super::types::KeymapMode;

/// A single keybinding
///
/// The action is a reference into the static action registry, never a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// Canonical key sequence
    pub sequence: KeySequence,
    /// The bound action
    pub action: &'static ActionDescriptor,
    /// The keymap this binding belongs to
    pub mode: KeymapMode,
}

impl Keybinding {
    pub fn new(sequence: KeySequence, action: &'static ActionDescriptor, mode: KeymapMode) -> Self {
        Self {
            sequence,
            action,
            mode,
        }
    }

    /// Name of the bound action
    pub fn action_name(&self) -> &'static str {
        self.action.name
    }

    /// Display string for this keybinding, e.g. `C-k  kill-line`
    pub fn display_string(&self) -> String {
        format!("{:<12} {}", self.sequence.as_str(), self.action.name)
    }
}
