//! Collaborator handles passed to editing actions

use std::ops::Range;

use crate::error::{LineEditError, Result};
use crate::kill_ring::KillRing;

use super::buffer::LineBuffer;

/// Editing state a simple action operates on
///
/// Borrowed for the duration of one action; actions never keep references
/// into either collaborator.
pub struct EditorState<'a> {
    pub buffer: &'a mut dyn LineBuffer,
    pub kill_ring: Option<&'a KillRing>,
}

impl<'a> EditorState<'a> {
    pub fn new(buffer: &'a mut dyn LineBuffer, kill_ring: &'a KillRing) -> Self {
        Self {
            buffer,
            kill_ring: Some(kill_ring),
        }
    }

    /// Editing state without a kill ring; kill and yank actions will refuse to run
    pub fn without_kill_ring(buffer: &'a mut dyn LineBuffer) -> Self {
        Self {
            buffer,
            kill_ring: None,
        }
    }

    /// The kill ring, or `InvalidParameter` when none is attached
    pub fn kill_ring(&self) -> Result<&'a KillRing> {
        self.kill_ring
            .ok_or(LineEditError::InvalidParameter("editor state has no kill ring"))
    }
}

/// Direction for history searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Backward,
    Forward,
}

/// A completion the enclosing loop offers for the text around the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Byte range of the buffer being replaced
    pub replace: Range<usize>,
    /// Replacement text
    pub text: String,
}

/// How the enclosing loop finished the current line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(String),
    Aborted,
    EndOfInput,
}

/// Capabilities of the enclosing line-completion loop
///
/// Context actions receive this instead of a bare [`EditorState`]. History and
/// completion default to "nothing available".
pub trait LineCompletionContext {
    /// Editing state for the line being edited
    fn editor_state(&mut self) -> EditorState<'_>;

    /// Older history entry, moving the history cursor
    fn history_previous(&mut self) -> Option<String> {
        None
    }

    /// Newer history entry; `Some("")` when stepping past the newest
    fn history_next(&mut self) -> Option<String> {
        None
    }

    /// Oldest history entry
    fn history_first(&mut self) -> Option<String> {
        None
    }

    /// Back to the line being edited
    fn history_last(&mut self) -> Option<String> {
        None
    }

    /// Next entry in `direction` that starts with `prefix`
    fn history_search(&mut self, _prefix: &str, _direction: SearchDirection) -> Option<String> {
        None
    }

    /// Completion for the word at `cursor`
    fn complete(&mut self, _line: &str, _cursor: usize) -> Option<Completion> {
        None
    }

    /// All completions for the word at `cursor`
    fn list_completions(&mut self, _line: &str, _cursor: usize) -> Vec<Completion> {
        Vec::new()
    }

    /// Accept the line
    fn accept(&mut self, line: String);

    /// Abandon the line
    fn abort(&mut self);

    /// Signal end of input
    fn end_of_input(&mut self);
}
