//! Transpose, case and small utility actions

use std::ops::Range;

use crate::editable::EditorState;
use crate::error::Result;
use crate::util::{
    grapheme_after, grapheme_before, horizontal_space_around, line_end, snap_to_boundary,
    word_end_after, word_start_before, WordStyle,
};

/// Replace `range` with `text`, leaving the cursor after the replacement
fn replace_range(state: &mut EditorState<'_>, range: Range<usize>, text: &str) {
    state.buffer.delete(range.clone());
    state.buffer.insert(range.start, text);
    state.buffer.set_cursor(range.start + text.len());
}

/// Swap the grapheme before the cursor with the one under it
///
/// At the end of a line the two graphemes before the cursor are swapped.
pub fn transpose_chars(state: &mut EditorState<'_>) -> Result<()> {
    let cursor = state.buffer.cursor();
    let swap = {
        let text = state.buffer.content();
        let pivot = if line_end(&text, cursor) == cursor {
            grapheme_before(&text, cursor).map_or(cursor, |g| g.start)
        } else {
            cursor
        };
        match (grapheme_before(&text, pivot), grapheme_after(&text, pivot)) {
            (Some(left), Some(right)) => {
                let swapped = format!("{}{}", &text[right.clone()], &text[left.clone()]);
                Some((left.start..right.end, swapped))
            }
            _ => None,
        }
    };
    if let Some((range, swapped)) = swap {
        replace_range(state, range, &swapped);
    }
    Ok(())
}

/// Swap the word before the cursor with the word after it
pub fn transpose_words(state: &mut EditorState<'_>) -> Result<()> {
    let cursor = state.buffer.cursor();
    let swap = {
        let text = state.buffer.content();
        let end2 = word_end_after(&text, cursor, WordStyle::Shell);
        let start2 = word_start_before(&text, end2, WordStyle::Shell);
        let start1 = word_start_before(&text, start2, WordStyle::Shell);
        let end1 = word_end_after(&text, start1, WordStyle::Shell);
        if start1 == start2 || end1 > start2 {
            None
        } else {
            let swapped = format!(
                "{}{}{}",
                &text[start2..end2],
                &text[end1..start2],
                &text[start1..end1]
            );
            Some((start1..end2, swapped))
        }
    };
    if let Some((range, swapped)) = swap {
        replace_range(state, range, &swapped);
    }
    Ok(())
}

/// Rewrite the text from the cursor to the end of the word
fn map_word(state: &mut EditorState<'_>, f: impl Fn(&str) -> String) -> Result<()> {
    let (range, mapped) = {
        let text = state.buffer.content();
        let cursor = snap_to_boundary(&text, state.buffer.cursor());
        let end = word_end_after(&text, cursor, WordStyle::Shell);
        (cursor..end, f(&text[cursor..end]))
    };
    if !range.is_empty() {
        replace_range(state, range, &mapped);
    }
    Ok(())
}

pub fn upcase_word(state: &mut EditorState<'_>) -> Result<()> {
    map_word(state, str::to_uppercase)
}

pub fn downcase_word(state: &mut EditorState<'_>) -> Result<()> {
    map_word(state, str::to_lowercase)
}

/// Uppercase the first letter of the word, lowercase the rest
pub fn capitalize_word(state: &mut EditorState<'_>) -> Result<()> {
    map_word(state, |word| {
        let mut seen = false;
        let mut out = String::with_capacity(word.len());
        for ch in word.chars() {
            if seen {
                out.extend(ch.to_lowercase());
            } else if ch.is_alphanumeric() {
                out.extend(ch.to_uppercase());
                seen = true;
            } else {
                out.push(ch);
            }
        }
        out
    })
}

/// Marker action: the keybinding manager inserts the next key literally
pub fn quoted_insert(_state: &mut EditorState<'_>) -> Result<()> {
    Ok(())
}

pub fn tab_insert(state: &mut EditorState<'_>) -> Result<()> {
    state.buffer.insert_at_cursor("\t");
    Ok(())
}

pub fn delete_horizontal_space(state: &mut EditorState<'_>) -> Result<()> {
    let cursor = state.buffer.cursor();
    let range = horizontal_space_around(&state.buffer.content(), cursor);
    state.buffer.delete(range);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{LineBuffer, StringBuffer};

    fn run(
        text: &str,
        cursor: usize,
        action: fn(&mut EditorState<'_>) -> Result<()>,
    ) -> (String, usize) {
        let mut buffer = StringBuffer::with_cursor(text, cursor);
        let mut state = EditorState::without_kill_ring(&mut buffer);
        action(&mut state).unwrap();
        (buffer.as_str().to_string(), buffer.cursor())
    }

    #[test]
    fn test_transpose_chars() {
        assert_eq!(run("abc", 1, transpose_chars), ("bac".to_string(), 2));
        assert_eq!(run("abc", 3, transpose_chars), ("acb".to_string(), 3));
        assert_eq!(run("ab\ncd", 2, transpose_chars), ("ba\ncd".to_string(), 2));
    }

    #[test]
    fn test_transpose_chars_noop_cases() {
        assert_eq!(run("abc", 0, transpose_chars), ("abc".to_string(), 0));
        assert_eq!(run("a", 1, transpose_chars), ("a".to_string(), 1));
        assert_eq!(run("", 0, transpose_chars), (String::new(), 0));
    }

    #[test]
    fn test_transpose_words() {
        assert_eq!(run("one two", 3, transpose_words), ("two one".to_string(), 7));
        assert_eq!(run("one two", 7, transpose_words), ("two one".to_string(), 7));
        assert_eq!(
            run("ls src | wc", 2, transpose_words),
            ("src ls | wc".to_string(), 6)
        );
    }

    #[test]
    fn test_transpose_words_needs_two_words() {
        assert_eq!(run("one two", 0, transpose_words), ("one two".to_string(), 0));
        assert_eq!(run("single", 3, transpose_words), ("single".to_string(), 3));
    }

    #[test]
    fn test_case_words() {
        assert_eq!(run("echo hello world", 4, upcase_word), ("echo HELLO world".to_string(), 10));
        assert_eq!(run("MAKE ALL", 0, downcase_word), ("make ALL".to_string(), 4));
        assert_eq!(run("say hELLO", 3, capitalize_word), ("say Hello".to_string(), 9));
    }

    #[test]
    fn test_case_word_from_middle() {
        assert_eq!(run("hello", 2, upcase_word), ("heLLO".to_string(), 5));
    }

    #[test]
    fn test_case_at_end_is_noop() {
        assert_eq!(run("abc  ", 5, upcase_word), ("abc  ".to_string(), 5));
    }

    #[test]
    fn test_tab_insert() {
        assert_eq!(run("ab", 1, tab_insert), ("a\tb".to_string(), 2));
    }

    #[test]
    fn test_delete_horizontal_space() {
        assert_eq!(run("a  \t b", 3, delete_horizontal_space), ("ab".to_string(), 1));
        assert_eq!(run("ab", 1, delete_horizontal_space), ("ab".to_string(), 1));
    }

    #[test]
    fn test_quoted_insert_leaves_buffer_alone() {
        assert_eq!(run("ab", 1, quoted_insert), ("ab".to_string(), 1));
    }
}
