//! Keybinding manager: per-mode binding tables and key dispatch
//!
//! `process_key` is called once per keystroke. It encodes the event to its
//! canonical sequence, looks it up in the active mode's table and runs the
//! bound simple action. Context actions cannot run here; the enclosing loop
//! resolves them with [`KeybindingManager::binding_for_event`] and dispatches
//! them itself.

use std::time::{Duration, Instant};

use crate::actions::{dispatch, registry, ActionDescriptor, ActionKind};
use crate::editable::{EditorState, LineBuffer};
use crate::error::{LineEditError, Result};

use super::binding::Keybinding;
use super::defaults::EMACS_BINDINGS;
use super::keymap::Keymap;
use super::sequence::KeySequence;
use super::types::{KeyEvent, KeymapMode};

/// Action that makes the next key event insert itself literally
const QUOTED_INSERT: &str = "quoted-insert";

/// Cumulative key-lookup latency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    /// Lookups performed, hits and misses alike
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl LookupStats {
    fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }

    /// Mean lookup time, zero before the first lookup
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

/// Owns the binding tables of one editing session
#[derive(Debug, Clone)]
pub struct KeybindingManager {
    emacs: Keymap,
    vi_insert: Keymap,
    vi_command: Keymap,
    mode: KeymapMode,
    stats: LookupStats,
    quoted_insert_pending: bool,
}

impl Default for KeybindingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingManager {
    /// Create a manager with empty tables in Emacs mode
    pub fn new() -> Self {
        Self {
            emacs: Keymap::new(KeymapMode::Emacs),
            vi_insert: Keymap::new(KeymapMode::ViInsert),
            vi_command: Keymap::new(KeymapMode::ViCommand),
            mode: KeymapMode::Emacs,
            stats: LookupStats::default(),
            quoted_insert_pending: false,
        }
    }

    /// Create a manager with the Emacs preset loaded
    pub fn with_emacs_preset() -> Result<Self> {
        let mut manager = Self::new();
        manager.load_emacs_preset()?;
        Ok(manager)
    }

    pub fn keymap(&self, mode: KeymapMode) -> &Keymap {
        match mode {
            KeymapMode::Emacs => &self.emacs,
            KeymapMode::ViInsert => &self.vi_insert,
            KeymapMode::ViCommand => &self.vi_command,
        }
    }

    fn keymap_mut(&mut self, mode: KeymapMode) -> &mut Keymap {
        match mode {
            KeymapMode::Emacs => &mut self.emacs,
            KeymapMode::ViInsert => &mut self.vi_insert,
            KeymapMode::ViCommand => &mut self.vi_command,
        }
    }

    /// Table of the active mode
    pub fn current_keymap(&self) -> &Keymap {
        self.keymap(self.mode)
    }

    /// Bind `sequence` in the active mode, returning the binding it replaced
    pub fn bind(
        &mut self,
        sequence: &str,
        action: &'static ActionDescriptor,
    ) -> Result<Option<Keybinding>> {
        self.bind_in_mode(sequence, action, self.mode)
    }

    /// Bind `sequence` in a specific mode's table
    pub fn bind_in_mode(
        &mut self,
        sequence: &str,
        action: &'static ActionDescriptor,
        mode: KeymapMode,
    ) -> Result<Option<Keybinding>> {
        let sequence = KeySequence::parse(sequence)?;
        tracing::debug!(sequence = %sequence, action = action.name, mode = %mode, "bind");
        Ok(self.keymap_mut(mode).insert(sequence, action))
    }

    /// Bind `sequence` to the registry action called `name`
    pub fn bind_action(&mut self, sequence: &str, name: &str) -> Result<Option<Keybinding>> {
        let action = registry::lookup(name)
            .ok_or_else(|| LineEditError::NotFound(format!("action {}", name)))?;
        self.bind(sequence, action)
    }

    /// Remove the binding for `sequence` in the active mode
    ///
    /// Returns `NotFound` when nothing was bound, so config loaders can tell
    /// a skipped unbind from a real one.
    pub fn unbind(&mut self, sequence: &str) -> Result<Keybinding> {
        let sequence = KeySequence::parse(sequence)?;
        let mode = self.mode;
        let removed = self
            .keymap_mut(mode)
            .remove(&sequence)
            .ok_or_else(|| LineEditError::NotFound(sequence.to_string()))?;
        tracing::debug!(sequence = %sequence, mode = %mode, "unbind");
        Ok(removed)
    }

    /// Binding for `event` in the active mode, without touching the latency counters
    pub fn binding_for_event(&self, event: &KeyEvent) -> Option<&Keybinding> {
        let sequence = event.to_sequence().ok()?;
        self.current_keymap().lookup(&sequence)
    }

    /// Binding for a key string in the active mode
    pub fn binding_for_sequence(&self, sequence: &str) -> Result<Option<&Keybinding>> {
        let sequence = KeySequence::parse(sequence)?;
        Ok(self.current_keymap().lookup(&sequence))
    }

    /// Dispatch one key event
    ///
    /// - `NotFound` when the event is unbound in the active mode
    /// - `InvalidState` when it is bound to a context action
    /// - otherwise the simple action's own result
    ///
    /// After `quoted-insert` the next event is inserted literally instead of
    /// being looked up.
    pub fn process_key(&mut self, event: &KeyEvent, state: &mut EditorState<'_>) -> Result<()> {
        if self.quoted_insert_pending {
            self.quoted_insert_pending = false;
            return insert_literal(event, state);
        }

        // Every looked-up event is sampled, including ones that fail to encode
        let start = Instant::now();
        let sequence = event.to_sequence();
        let action = sequence
            .as_ref()
            .ok()
            .and_then(|sequence| self.current_keymap().lookup(sequence))
            .map(|b| b.action);
        let elapsed = start.elapsed();
        self.stats.record(elapsed);
        let sequence = sequence?;
        tracing::trace!(
            sequence = %sequence,
            hit = action.is_some(),
            elapsed_ns = elapsed.as_nanos() as u64,
            "key lookup"
        );

        let action = action.ok_or_else(|| LineEditError::NotFound(sequence.to_string()))?;
        if let ActionKind::Context(_) = action.kind {
            return Err(LineEditError::InvalidState("key is bound to a context action"));
        }
        if action.name == QUOTED_INSERT {
            self.arm_quoted_insert();
        }
        dispatch::run_simple(action, state)
    }

    /// Whether the next event will be inserted literally
    pub fn quoted_insert_pending(&self) -> bool {
        self.quoted_insert_pending
    }

    /// Insert the next event literally, as after `quoted-insert`
    pub fn arm_quoted_insert(&mut self) {
        self.quoted_insert_pending = true;
    }

    /// Emacs binding for an event the active vi table leaves unbound
    ///
    /// `None` in Emacs mode, or when the vi table binds the event itself.
    pub fn emacs_fallback(&self, event: &KeyEvent) -> Option<&Keybinding> {
        if self.mode == KeymapMode::Emacs || self.binding_for_event(event).is_some() {
            return None;
        }
        let sequence = event.to_sequence().ok()?;
        self.emacs.lookup(&sequence)
    }

    /// Replace the Emacs table with the default bindings and switch to Emacs mode
    pub fn load_emacs_preset(&mut self) -> Result<()> {
        self.emacs.clear();
        for (sequence, name) in EMACS_BINDINGS {
            let action = registry::lookup(name)
                .ok_or_else(|| LineEditError::NotFound(format!("action {}", name)))?;
            self.emacs.insert(KeySequence::parse(sequence)?, action);
        }
        self.mode = KeymapMode::Emacs;
        tracing::debug!("Loaded emacs preset ({} bindings)", self.emacs.len());
        Ok(())
    }

    /// Switch to vi insert mode; no vi bindings ship with the preset
    pub fn load_vi_preset(&mut self) {
        self.mode = KeymapMode::ViInsert;
        tracing::debug!("Switched to vi preset");
    }

    pub fn set_mode(&mut self, mode: KeymapMode) {
        self.mode = mode;
    }

    pub fn get_mode(&self) -> KeymapMode {
        self.mode
    }

    pub fn stats(&self) -> LookupStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = LookupStats::default();
    }
}

/// Insert the event's literal character, ending any kill or yank chain
fn insert_literal(event: &KeyEvent, state: &mut EditorState<'_>) -> Result<()> {
    if let Some(ring) = state.kill_ring {
        ring.set_last_was_kill(false);
        ring.reset_yank_state();
    }
    if let Some(c) = event.literal_char() {
        let mut buf = [0u8; 4];
        state.buffer.insert_at_cursor(c.encode_utf8(&mut buf));
    }
    Ok(())
}
