//! Error type shared by the key codec, keybinding manager, kill ring and actions

use thiserror::Error;

/// Errors returned by the line-editing core
///
/// Editing actions report "nothing to do" situations (empty buffer, cursor at
/// an edge) as success; only invalid invocations come back as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineEditError {
    /// A required argument or collaborator was missing or empty
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Unbound key sequence, unknown action, or missing kill-ring entry
    #[error("not found: {0}")]
    NotFound(String),

    /// Yank from an empty kill ring
    #[error("kill ring is empty")]
    QueueEmpty,

    /// Operation not valid in the current state
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Unparseable key-sequence string
    #[error("invalid key sequence: {0:?}")]
    InvalidFormat(String),

    /// Encoded key sequence does not fit the destination
    #[error("key sequence needs {needed} bytes, capacity is {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },

    /// Allocation failure reported by a collaborator
    #[error("out of memory")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, LineEditError>;
