//! Line-editing session: the enclosing loop around the keybinding manager
//!
//! A session owns the line being edited, the keybinding manager and an
//! in-memory history. It routes each key event through the manager, runs
//! context actions itself, and self-inserts unbound printable characters.

use std::fmt;
use std::sync::Arc;

use crate::actions::dispatch;
use crate::config::Config;
use crate::editable::{
    Completion, EditorState, LineBuffer, LineCompletionContext, LineOutcome, SearchDirection,
    StringBuffer,
};
use crate::error::{LineEditError, Result};
use crate::keymap::{KeyEvent, KeybindingManager, LoadSummary};
use crate::kill_ring::KillRing;

/// Produces completions for `(line, cursor)`
pub type Completer = Box<dyn Fn(&str, usize) -> Vec<Completion> + Send>;

pub struct LineSession {
    buffer: StringBuffer,
    kill_ring: Arc<KillRing>,
    manager: KeybindingManager,
    history: Vec<String>,
    /// `history.len()` while editing the new line
    history_index: usize,
    /// The new line, parked while browsing history
    saved_line: Option<String>,
    completer: Option<Completer>,
    outcome: Option<LineOutcome>,
}

impl fmt::Debug for LineSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSession")
            .field("buffer", &self.buffer)
            .field("mode", &self.manager.get_mode())
            .field("history", &self.history.len())
            .field("history_index", &self.history_index)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl LineSession {
    pub fn new(manager: KeybindingManager, kill_ring: Arc<KillRing>) -> Self {
        Self {
            buffer: StringBuffer::new(),
            kill_ring,
            manager,
            history: Vec::new(),
            history_index: 0,
            saved_line: None,
            completer: None,
            outcome: None,
        }
    }

    /// Session with the Emacs preset and a default-sized kill ring
    pub fn with_emacs_preset() -> Result<Self> {
        Ok(Self::new(
            KeybindingManager::with_emacs_preset()?,
            Arc::new(KillRing::default()),
        ))
    }

    /// Session built from user configuration
    pub fn from_config(config: &Config) -> Result<(Self, LoadSummary)> {
        let (manager, summary) = config.keybinding_manager()?;
        Ok((Self::new(manager, Arc::new(config.kill_ring())), summary))
    }

    pub fn with_history<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history.extend(entries.into_iter().map(Into::into));
        self.history_index = self.history.len();
        self
    }

    pub fn with_completer(mut self, completer: Completer) -> Self {
        self.completer = Some(completer);
        self
    }

    pub fn buffer(&self) -> &StringBuffer {
        &self.buffer
    }

    pub fn line(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn manager(&self) -> &KeybindingManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut KeybindingManager {
        &mut self.manager
    }

    /// Shared kill ring; other threads may add kills through a clone
    pub fn kill_ring(&self) -> &Arc<KillRing> {
        &self.kill_ring
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// How the current line finished, if it has
    pub fn outcome(&self) -> Option<&LineOutcome> {
        self.outcome.as_ref()
    }

    /// Route one key event
    ///
    /// In vi modes, keys the vi table leaves unbound run their Emacs binding.
    /// Unbound printable characters are inserted; other unbound keys return
    /// `NotFound`. Keys arriving after the line finished are `InvalidState`.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<()> {
        if self.outcome.is_some() {
            return Err(LineEditError::InvalidState("line already finished"));
        }

        let result = {
            let mut state = EditorState::new(&mut self.buffer, &self.kill_ring);
            self.manager.process_key(event, &mut state)
        };

        match result {
            Err(LineEditError::InvalidState(_)) => {
                let Some(action) = self
                    .manager
                    .binding_for_event(event)
                    .map(|b| b.action)
                    .filter(|a| a.kind.is_context())
                else {
                    return result;
                };
                tracing::trace!(action = action.name, "context dispatch");
                dispatch::run_with_context(action, self)
            }
            Err(LineEditError::NotFound(_)) => {
                if let Some(action) = self.manager.emacs_fallback(event).map(|b| b.action) {
                    tracing::trace!(action = action.name, "emacs fallback");
                    if action.name == "quoted-insert" {
                        self.manager.arm_quoted_insert();
                    }
                    return dispatch::run_with_context(action, self);
                }
                match event.printable_char() {
                    Some(c) => {
                        self.self_insert(c);
                        Ok(())
                    }
                    None => result,
                }
            }
            other => other,
        }
    }

    /// Feed several events, stopping at the first error
    pub fn handle_keys<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a KeyEvent>,
    ) -> Result<()> {
        for event in events {
            self.handle_key(event)?;
        }
        Ok(())
    }

    fn self_insert(&mut self, c: char) {
        self.kill_ring.set_last_was_kill(false);
        self.kill_ring.reset_yank_state();
        let mut buf = [0u8; 4];
        self.buffer.insert_at_cursor(c.encode_utf8(&mut buf));
    }

    /// Take the finished line's outcome and start a new line
    ///
    /// Accepted non-empty lines are appended to the history.
    pub fn finish_line(&mut self) -> Option<LineOutcome> {
        let outcome = self.outcome.take()?;
        if let LineOutcome::Accepted(line) = &outcome {
            if !line.is_empty() {
                self.history.push(line.clone());
            }
        }
        self.buffer = StringBuffer::new();
        self.history_index = self.history.len();
        self.saved_line = None;
        Some(outcome)
    }

    /// Park the new line before the first step into history
    fn leave_new_line(&mut self) {
        if self.history_index == self.history.len() {
            self.saved_line = Some(self.buffer.as_str().to_string());
        }
    }

    fn history_entry(&mut self, index: usize) -> Option<String> {
        self.leave_new_line();
        self.history_index = index;
        self.history.get(index).cloned()
    }
}

fn common_prefix<'a>(mut words: impl Iterator<Item = &'a str>) -> &'a str {
    let Some(first) = words.next() else {
        return "";
    };
    let mut len = first.len();
    for word in words {
        len = first
            .char_indices()
            .zip(word.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0)
            .min(len);
    }
    &first[..len]
}

impl LineCompletionContext for LineSession {
    fn editor_state(&mut self) -> EditorState<'_> {
        EditorState::new(&mut self.buffer, &self.kill_ring)
    }

    fn history_previous(&mut self) -> Option<String> {
        let index = self.history_index.checked_sub(1)?;
        self.history_entry(index)
    }

    fn history_next(&mut self) -> Option<String> {
        if self.history_index >= self.history.len() {
            return None;
        }
        self.history_index += 1;
        if self.history_index == self.history.len() {
            return Some(self.saved_line.take().unwrap_or_default());
        }
        self.history.get(self.history_index).cloned()
    }

    fn history_first(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        self.history_entry(0)
    }

    fn history_last(&mut self) -> Option<String> {
        if self.history_index == self.history.len() {
            return None;
        }
        self.history_index = self.history.len();
        Some(self.saved_line.take().unwrap_or_default())
    }

    fn history_search(&mut self, prefix: &str, direction: SearchDirection) -> Option<String> {
        let found = match direction {
            SearchDirection::Backward => (0..self.history_index)
                .rev()
                .find(|&i| self.history[i].starts_with(prefix)),
            SearchDirection::Forward => (self.history_index + 1..self.history.len())
                .find(|&i| self.history[i].starts_with(prefix)),
        }?;
        self.history_entry(found)
    }

    fn complete(&mut self, line: &str, cursor: usize) -> Option<Completion> {
        let candidates = self.list_completions(line, cursor);
        match candidates.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, ..] => {
                let prefix = common_prefix(candidates.iter().map(|c| c.text.as_str()));
                let current = line.get(first.replace.clone()).unwrap_or_default();
                (prefix.len() > current.len()).then(|| Completion {
                    replace: first.replace.clone(),
                    text: prefix.to_string(),
                })
            }
        }
    }

    fn list_completions(&mut self, line: &str, cursor: usize) -> Vec<Completion> {
        self.completer
            .as_ref()
            .map(|completer| completer(line, cursor))
            .unwrap_or_default()
    }

    fn accept(&mut self, line: String) {
        self.outcome = Some(LineOutcome::Accepted(line));
    }

    fn abort(&mut self) {
        self.outcome = Some(LineOutcome::Aborted);
    }

    fn end_of_input(&mut self) {
        self.outcome = Some(LineOutcome::EndOfInput);
    }
}
