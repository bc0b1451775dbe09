//! Text scanning helpers for word, line and grapheme motions
//!
//! All positions are UTF-8 byte offsets on char boundaries.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Separator between logical lines of a multi-line command
pub const LINE_SEPARATOR: char = '\n';

/// Check if a character is a shell metacharacter that ends a word
pub fn is_shell_delimiter(ch: char) -> bool {
    matches!(
        ch,
        '|' | '&' | ';' | '(' | ')' | '<' | '>' | '\'' | '"' | '`' | '$' | '\\'
    )
}

/// Which characters separate words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStyle {
    /// Whitespace and shell metacharacters (`forward-word`, `kill-word`, ...)
    Shell,
    /// Whitespace only (`unix-word-rubout`)
    Unix,
}

impl WordStyle {
    #[inline]
    pub fn is_boundary(self, ch: char) -> bool {
        match self {
            WordStyle::Shell => ch.is_whitespace() || is_shell_delimiter(ch),
            WordStyle::Unix => ch.is_whitespace(),
        }
    }
}

/// Clamp `pos` into `text` and move it back onto a char boundary
pub fn snap_to_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// End of the word at or after `pos`
///
/// Skips whitespace, then scans to the next boundary character. A motion
/// that would not move because `pos` sits on a shell metacharacter steps
/// over the metacharacters and the word after them instead.
pub fn word_end_after(text: &str, pos: usize, style: WordStyle) -> usize {
    let pos = snap_to_boundary(text, pos);
    let rest = &text[pos..];
    let skipped = rest.len() - rest.trim_start_matches(char::is_whitespace).len();
    let end = rest[skipped..]
        .find(|ch| style.is_boundary(ch))
        .map_or(text.len(), |i| pos + skipped + i);
    if end > pos {
        end
    } else {
        scan_past_boundaries(text, pos, style)
    }
}

/// Start of the word before `pos`
///
/// Mirror of [`word_end_after`]: skips whitespace leftward, then scans back to
/// the previous boundary character.
pub fn word_start_before(text: &str, pos: usize, style: WordStyle) -> usize {
    let pos = snap_to_boundary(text, pos);
    let head = text[..pos].trim_end_matches(char::is_whitespace);
    let start = head
        .char_indices()
        .rev()
        .find(|&(_, ch)| style.is_boundary(ch))
        .map_or(0, |(i, ch)| i + ch.len_utf8());
    if start < pos {
        start
    } else {
        scan_back_past_boundaries(text, pos, style)
    }
}

fn scan_past_boundaries(text: &str, pos: usize, style: WordStyle) -> usize {
    let mut in_word = false;
    for (i, ch) in text[pos..].char_indices() {
        if style.is_boundary(ch) {
            if in_word {
                return pos + i;
            }
        } else {
            in_word = true;
        }
    }
    text.len()
}

fn scan_back_past_boundaries(text: &str, pos: usize, style: WordStyle) -> usize {
    let mut in_word = false;
    for (i, ch) in text[..pos].char_indices().rev() {
        if style.is_boundary(ch) {
            if in_word {
                return i + ch.len_utf8();
            }
        } else {
            in_word = true;
        }
    }
    0
}

/// Start of the logical line containing `pos`
pub fn line_start(text: &str, pos: usize) -> usize {
    let pos = snap_to_boundary(text, pos);
    text[..pos]
        .rfind(LINE_SEPARATOR)
        .map(|i| i + LINE_SEPARATOR.len_utf8())
        .unwrap_or(0)
}

/// End of the logical line containing `pos` (before its separator)
pub fn line_end(text: &str, pos: usize) -> usize {
    let pos = snap_to_boundary(text, pos);
    text[pos..]
        .find(LINE_SEPARATOR)
        .map(|i| pos + i)
        .unwrap_or(text.len())
}

/// Run of spaces and tabs surrounding `pos`
pub fn horizontal_space_around(text: &str, pos: usize) -> Range<usize> {
    let is_blank = |ch: char| ch == ' ' || ch == '\t';
    let pos = snap_to_boundary(text, pos);
    let before = text[..pos].trim_end_matches(is_blank).len();
    let after = pos + (text[pos..].len() - text[pos..].trim_start_matches(is_blank).len());
    before..after
}

/// Byte range of the grapheme cluster ending at `pos`
pub fn grapheme_before(text: &str, pos: usize) -> Option<Range<usize>> {
    let pos = snap_to_boundary(text, pos);
    text[..pos]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, g)| i..i + g.len())
}

/// Byte range of the grapheme cluster starting at `pos`
pub fn grapheme_after(text: &str, pos: usize) -> Option<Range<usize>> {
    let pos = snap_to_boundary(text, pos);
    text[pos..]
        .graphemes(true)
        .next()
        .map(|g| pos..pos + g.len())
}
