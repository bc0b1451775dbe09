//! Text editing collaborators for the line-editing core.
//!
//! The core never owns the line being edited. Actions reach it through:
//!
//! - [`LineBuffer`]: buffer content plus a grapheme-aware cursor
//! - [`StringBuffer`]: the `String`-backed implementation used by sessions and tests
//! - [`EditorState`]: what simple actions receive (buffer + kill ring)
//! - [`LineCompletionContext`]: what context actions receive (history,
//!   completion, accept/abort)
//!
//! # Example
//!
//! ```
//! use keyline::editable::{LineBuffer, StringBuffer};
//!
//! let mut buffer = StringBuffer::from_text("hello");
//! buffer.move_cursor(-2);
//! buffer.insert_at_cursor("_");
//!
//! assert_eq!(buffer.as_str(), "hel_lo");
//! ```

mod buffer;
mod context;

pub use buffer::{LineBuffer, StringBuffer};
pub use context::{Completion, EditorState, LineCompletionContext, LineOutcome, SearchDirection};
