//! Keymap struct for storing and looking up the bindings of one mode

use std::collections::HashMap;

use crate::actions::ActionDescriptor;

use super::binding::Keybinding;
use super::sequence::KeySequence;
use super::types::KeymapMode;

/// Binding table for a single keymap mode, keyed by canonical sequence
#[derive(Debug, Clone)]
pub struct Keymap {
    mode: KeymapMode,
    bindings: HashMap<KeySequence, Keybinding>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new(mode: KeymapMode) -> Self {
        Self {
            mode,
            bindings: HashMap::new(),
        }
    }

    pub fn mode(&self) -> KeymapMode {
        self.mode
    }

    /// Add a binding, returning the one it replaced
    pub fn insert(
        &mut self,
        sequence: KeySequence,
        action: &'static ActionDescriptor,
    ) -> Option<Keybinding> {
        let binding = Keybinding::new(sequence.clone(), action, self.mode);
        self.bindings.insert(sequence, binding)
    }

    /// Remove a binding, returning it if present
    pub fn remove(&mut self, sequence: &KeySequence) -> Option<Keybinding> {
        self.bindings.remove(sequence)
    }

    /// Look up a sequence
    #[inline]
    pub fn lookup(&self, sequence: &KeySequence) -> Option<&Keybinding> {
        self.bindings.get(sequence)
    }

    pub fn contains(&self, sequence: &KeySequence) -> bool {
        self.bindings.contains_key(sequence)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// All bindings sorted by sequence
    pub fn bindings(&self) -> Vec<&Keybinding> {
        let mut all: Vec<&Keybinding> = self.bindings.values().collect();
        all.sort_by(|a, b| a.sequence.cmp(&b.sequence));
        all
    }

    /// Sequences bound to the named action, sorted
    pub fn sequences_for(&self, action_name: &str) -> Vec<&KeySequence> {
        let mut found: Vec<&KeySequence> = self
            .bindings
            .values()
            .filter(|b| b.action.name == action_name)
            .map(|b| &b.sequence)
            .collect();
        found.sort();
        found
    }
}
