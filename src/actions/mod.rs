//! Editing actions and the static registry that names them
//!
//! Every action is a plain function. Simple actions take an
//! [`EditorState`](crate::editable::EditorState); context actions take the
//! enclosing [`LineCompletionContext`](crate::editable::LineCompletionContext).
//! The registry maps Readline names such as `kill-line` to descriptors.

pub mod dispatch;
mod edit;
mod history;
mod kill;
mod movement;
pub mod registry;
mod shell;

pub use dispatch::{finish_action, run_simple, run_with_context};
pub use registry::{ActionCategory, ActionDescriptor, ActionKind, ContextFn, SimpleFn};
