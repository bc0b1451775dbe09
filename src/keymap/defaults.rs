//! Default keybindings
//!
//! The Emacs table follows GNU Readline's defaults. Arrow and navigation keys
//! are bound alongside their control-letter equivalents so either input form
//! works.

/// `(key sequence, action name)` pairs installed by `load_emacs_preset`
pub const EMACS_BINDINGS: &[(&str, &str)] = &[
    // Movement
    ("C-f", "forward-char"),
    ("RIGHT", "forward-char"),
    ("C-b", "backward-char"),
    ("LEFT", "backward-char"),
    ("M-f", "forward-word"),
    ("M-RIGHT", "forward-word"),
    ("C-RIGHT", "forward-word"),
    ("M-b", "backward-word"),
    ("M-LEFT", "backward-word"),
    ("C-LEFT", "backward-word"),
    ("C-a", "beginning-of-line"),
    ("HOME", "beginning-of-line"),
    ("C-e", "end-of-line"),
    ("END", "end-of-line"),
    ("C-HOME", "beginning-of-buffer"),
    ("C-END", "end-of-buffer"),
    // Deletion
    ("DELETE", "delete-char"),
    ("DEL", "backward-delete-char"),
    ("C-h", "backward-delete-char"),
    // Kill
    ("C-k", "kill-line"),
    ("C-M-k", "backward-kill-line"),
    ("C-x", "kill-whole-line"),
    ("M-d", "kill-word"),
    ("C-DELETE", "kill-word"),
    ("M-DEL", "backward-kill-word"),
    ("C-DEL", "backward-kill-word"),
    ("C-u", "unix-line-discard"),
    ("C-w", "unix-word-rubout"),
    // Yank
    ("C-y", "yank"),
    ("M-y", "yank-pop"),
    // Transpose
    ("C-t", "transpose-chars"),
    ("M-t", "transpose-words"),
    // Case
    ("M-u", "upcase-word"),
    ("M-l", "downcase-word"),
    ("M-c", "capitalize-word"),
    // History
    ("C-p", "previous-history"),
    ("UP", "previous-history"),
    ("C-n", "next-history"),
    ("DOWN", "next-history"),
    ("M-<", "beginning-of-history"),
    ("PGUP", "beginning-of-history"),
    ("M->", "end-of-history"),
    ("PGDN", "end-of-history"),
    ("C-r", "reverse-search-history"),
    ("C-s", "forward-search-history"),
    // Completion
    ("TAB", "complete"),
    ("M-?", "possible-completions"),
    ("M-*", "insert-completions"),
    // Shell control
    ("RET", "accept-line"),
    ("C-j", "accept-line"),
    ("C-m", "accept-line"),
    ("C-g", "abort-line"),
    ("C-d", "send-eof"),
    ("C-c", "interrupt"),
    ("C-z", "suspend"),
    ("C-l", "clear-screen"),
    // Utility
    ("C-q", "quoted-insert"),
    ("C-v", "quoted-insert"),
    ("M-TAB", "tab-insert"),
    ("M-\\", "delete-horizontal-space"),
];
