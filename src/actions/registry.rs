//! Static catalog of editing actions
//!
//! The table is fixed at compile time; a name index is built on first use.
//! Bindings hold `&'static ActionDescriptor` references into this table.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::editable::{EditorState, LineCompletionContext};
use crate::error::Result;

use super::{edit, history, kill, movement, shell};

/// Action that only needs buffer and kill ring
pub type SimpleFn = fn(&mut EditorState<'_>) -> Result<()>;
/// Action that needs the enclosing line-completion loop
pub type ContextFn = fn(&mut dyn LineCompletionContext) -> Result<()>;

/// Callable behavior of an action
#[derive(Clone, Copy)]
pub enum ActionKind {
    Simple(SimpleFn),
    Context(ContextFn),
}

impl ActionKind {
    pub fn is_context(&self) -> bool {
        matches!(self, ActionKind::Context(_))
    }
}

impl fmt::Debug for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Simple(_) => f.write_str("Simple"),
            ActionKind::Context(_) => f.write_str("Context"),
        }
    }
}

/// Action families, used for introspection and kill/yank chain bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Movement,
    Deletion,
    Kill,
    Yank,
    Transpose,
    Case,
    History,
    Completion,
    Shell,
    Utility,
}

impl ActionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionCategory::Movement => "movement",
            ActionCategory::Deletion => "deletion",
            ActionCategory::Kill => "kill",
            ActionCategory::Yank => "yank",
            ActionCategory::Transpose => "transpose",
            ActionCategory::Case => "case",
            ActionCategory::History => "history",
            ActionCategory::Completion => "completion",
            ActionCategory::Shell => "shell",
            ActionCategory::Utility => "utility",
        }
    }
}

/// A named action in the catalog
#[derive(Debug)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
    pub kind: ActionKind,
}

// Names are unique within the catalog
impl PartialEq for ActionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActionDescriptor {}

const fn simple(
    name: &'static str,
    category: ActionCategory,
    description: &'static str,
    f: SimpleFn,
) -> ActionDescriptor {
    ActionDescriptor {
        name,
        description,
        category,
        kind: ActionKind::Simple(f),
    }
}

const fn context(
    name: &'static str,
    category: ActionCategory,
    description: &'static str,
    f: ContextFn,
) -> ActionDescriptor {
    ActionDescriptor {
        name,
        description,
        category,
        kind: ActionKind::Context(f),
    }
}

use ActionCategory::*;

static ACTIONS: [ActionDescriptor; 42] = [
    // Movement
    simple(
        "forward-char",
        Movement,
        "Move forward one character",
        movement::forward_char,
    ),
    simple(
        "backward-char",
        Movement,
        "Move back one character",
        movement::backward_char,
    ),
    simple(
        "forward-word",
        Movement,
        "Move to the end of the next word",
        movement::forward_word,
    ),
    simple(
        "backward-word",
        Movement,
        "Move to the start of the previous word",
        movement::backward_word,
    ),
    simple(
        "beginning-of-line",
        Movement,
        "Move to the start of the current line",
        movement::beginning_of_line,
    ),
    simple(
        "end-of-line",
        Movement,
        "Move to the end of the current line",
        movement::end_of_line,
    ),
    simple(
        "beginning-of-buffer",
        Movement,
        "Move to the start of the input",
        movement::beginning_of_buffer,
    ),
    simple(
        "end-of-buffer",
        Movement,
        "Move to the end of the input",
        movement::end_of_buffer,
    ),
    // Deletion
    simple(
        "delete-char",
        Deletion,
        "Delete the character under the cursor",
        kill::delete_char,
    ),
    simple(
        "backward-delete-char",
        Deletion,
        "Delete the character before the cursor",
        kill::backward_delete_char,
    ),
    // Kill
    simple(
        "kill-line",
        Kill,
        "Kill to the end of the line",
        kill::kill_line,
    ),
    simple(
        "backward-kill-line",
        Kill,
        "Kill back to the start of the line",
        kill::backward_kill_line,
    ),
    simple(
        "kill-whole-line",
        Kill,
        "Kill the current line",
        kill::kill_whole_line,
    ),
    simple(
        "kill-word",
        Kill,
        "Kill to the end of the word",
        kill::kill_word,
    ),
    simple(
        "backward-kill-word",
        Kill,
        "Kill back to the start of the word",
        kill::backward_kill_word,
    ),
    simple(
        "unix-line-discard",
        Kill,
        "Kill back to the start of the line",
        kill::unix_line_discard,
    ),
    simple(
        "unix-word-rubout",
        Kill,
        "Kill the whitespace-delimited word before the cursor",
        kill::unix_word_rubout,
    ),
    // Yank
    simple("yank", Yank, "Insert the most recent kill", kill::yank),
    simple(
        "yank-pop",
        Yank,
        "Replace the yanked text with the previous kill",
        kill::yank_pop,
    ),
    // Transpose
    simple(
        "transpose-chars",
        Transpose,
        "Swap the characters around the cursor",
        edit::transpose_chars,
    ),
    simple(
        "transpose-words",
        Transpose,
        "Swap the words around the cursor",
        edit::transpose_words,
    ),
    // Case
    simple(
        "upcase-word",
        Case,
        "Uppercase to the end of the word",
        edit::upcase_word,
    ),
    simple(
        "downcase-word",
        Case,
        "Lowercase to the end of the word",
        edit::downcase_word,
    ),
    simple(
        "capitalize-word",
        Case,
        "Capitalize to the end of the word",
        edit::capitalize_word,
    ),
    // History
    context(
        "previous-history",
        History,
        "Fetch the previous history entry",
        history::previous_history,
    ),
    context(
        "next-history",
        History,
        "Fetch the next history entry",
        history::next_history,
    ),
    context(
        "beginning-of-history",
        History,
        "Fetch the oldest history entry",
        history::beginning_of_history,
    ),
    context(
        "end-of-history",
        History,
        "Return to the line being edited",
        history::end_of_history,
    ),
    context(
        "reverse-search-history",
        History,
        "Search backward for a line starting with the text before the cursor",
        history::reverse_search_history,
    ),
    context(
        "forward-search-history",
        History,
        "Search forward for a line starting with the text before the cursor",
        history::forward_search_history,
    ),
    // Completion
    context(
        "complete",
        Completion,
        "Complete the word at the cursor",
        history::complete,
    ),
    context(
        "possible-completions",
        Completion,
        "List completions for the word at the cursor",
        history::possible_completions,
    ),
    context(
        "insert-completions",
        Completion,
        "Insert every completion for the word at the cursor",
        history::insert_completions,
    ),
    // Shell control
    context("accept-line", Shell, "Accept the line", shell::accept_line),
    context("abort-line", Shell, "Abandon the line", shell::abort_line),
    context(
        "send-eof",
        Shell,
        "End input on an empty line, otherwise delete the character under the cursor",
        shell::send_eof,
    ),
    simple(
        "interrupt",
        Shell,
        "Send SIGINT to the shell",
        shell::interrupt,
    ),
    simple(
        "suspend",
        Shell,
        "Send SIGTSTP to the shell",
        shell::suspend,
    ),
    simple(
        "clear-screen",
        Shell,
        "Clear the terminal",
        shell::clear_screen,
    ),
    // Utility
    simple(
        "quoted-insert",
        Utility,
        "Insert the next key literally",
        edit::quoted_insert,
    ),
    simple(
        "tab-insert",
        Utility,
        "Insert a tab character",
        edit::tab_insert,
    ),
    simple(
        "delete-horizontal-space",
        Utility,
        "Delete spaces and tabs around the cursor",
        edit::delete_horizontal_space,
    ),
];

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| (action.name, i))
        .collect()
});

/// Find an action by name
pub fn lookup(name: &str) -> Option<&'static ActionDescriptor> {
    INDEX.get(name).map(|&i| &ACTIONS[i])
}

/// Every action, in catalog order
pub fn get_all() -> &'static [ActionDescriptor] {
    &ACTIONS
}

pub fn count() -> usize {
    ACTIONS.len()
}

pub fn get_by_index(index: usize) -> Option<&'static ActionDescriptor> {
    ACTIONS.get(index)
}
