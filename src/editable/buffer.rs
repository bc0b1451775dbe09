//! Line buffer capability and its `String`-backed implementation.
//!
//! Editing actions only see the [`LineBuffer`] trait. Offsets are UTF-8 byte
//! offsets; single-step cursor motion is by grapheme cluster so that one
//! keypress moves over one user-visible character.

use std::borrow::Cow;
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Buffer and cursor operations the line-editing core needs.
///
/// Implementations keep the cursor anchored to the text around it: inserting
/// at or before the cursor shifts it right, deleting a range before it shifts
/// it left, and deleting a range containing it moves it to the range start.
pub trait LineBuffer {
    /// Full content
    fn content(&self) -> Cow<'_, str>;

    /// Length in bytes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor byte offset
    fn cursor(&self) -> usize;

    /// Move the cursor to an absolute byte offset (clamped to the buffer)
    fn set_cursor(&mut self, offset: usize);

    /// Move the cursor by `count` grapheme clusters (negative moves left)
    fn move_cursor(&mut self, count: isize);

    /// Insert text at a byte offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Delete a byte range
    fn delete(&mut self, range: Range<usize>);

    /// Text in a byte range
    fn slice(&self, range: Range<usize>) -> String {
        let content = self.content();
        let end = range.end.min(content.len());
        let start = range.start.min(end);
        content.get(start..end).unwrap_or_default().to_string()
    }

    /// Insert at the cursor
    fn insert_at_cursor(&mut self, text: &str) {
        self.insert(self.cursor(), text);
    }

    /// Replace everything and put the cursor at the end
    fn set_content(&mut self, text: &str) {
        let len = self.len();
        if len > 0 {
            self.delete(0..len);
        }
        self.insert(0, text);
        self.set_cursor(text.len());
    }
}

/// LineBuffer backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
    cursor: usize,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with the cursor at the end of `s`
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Create a buffer with the cursor at `cursor` (snapped to a char boundary)
    pub fn with_cursor(s: &str, cursor: usize) -> Self {
        let mut buffer = Self::from_text(s);
        buffer.set_cursor(cursor);
        buffer
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Clamp to the buffer and snap down to a char boundary
    fn snap(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl LineBuffer for StringBuffer {
    fn content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.snap(offset);
    }

    fn move_cursor(&mut self, count: isize) {
        if count >= 0 {
            let steps = count.unsigned_abs();
            let after = &self.text[self.cursor..];
            let advance: usize = after.graphemes(true).take(steps).map(str::len).sum();
            self.cursor += advance;
        } else {
            let steps = count.unsigned_abs();
            let before = &self.text[..self.cursor];
            let retreat: usize = before.graphemes(true).rev().take(steps).map(str::len).sum();
            self.cursor -= retreat;
        }
    }

    fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.snap(offset);
        self.text.insert_str(offset, text);
        if offset <= self.cursor {
            self.cursor += text.len();
        }
    }

    fn delete(&mut self, range: Range<usize>) {
        let end = self.snap(range.end);
        let start = self.snap(range.start).min(end);
        if start == end {
            return;
        }
        self.text.replace_range(start..end, "");
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
    }

    fn slice(&self, range: Range<usize>) -> String {
        let end = self.snap(range.end);
        let start = self.snap(range.start).min(end);
        self.text[start..end].to_string()
    }
}
