//! Deletion, kill and yank actions
//!
//! Kills copy the span into the kill ring before removing it from the buffer.
//! Forward kills append to a running kill, backward kills prepend, so a chain
//! of kills yanks back as the contiguous text it was.

use std::ops::Range;

use crate::editable::EditorState;
use crate::error::{LineEditError, Result};
use crate::kill_ring::KillRing;
use crate::util::{
    grapheme_after, grapheme_before, line_end, line_start, snap_to_boundary, word_end_after,
    word_start_before, WordStyle, LINE_SEPARATOR,
};

/// Which end of a running kill the new text joins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KillDirection {
    Forward,
    Backward,
}

/// Move `range` from the buffer into the kill ring
fn kill_range(
    state: &mut EditorState<'_>,
    ring: &KillRing,
    range: Range<usize>,
    direction: KillDirection,
) -> Result<()> {
    let range = {
        let text = state.buffer.content();
        snap_to_boundary(&text, range.start)..snap_to_boundary(&text, range.end)
    };
    if range.is_empty() {
        return Ok(());
    }
    let text = state.buffer.slice(range.clone());
    match direction {
        KillDirection::Forward => ring.add(&text, true)?,
        KillDirection::Backward => ring.prepend(&text)?,
    }
    state.buffer.delete(range.clone());
    state.buffer.set_cursor(range.start);
    Ok(())
}

pub fn delete_char(state: &mut EditorState<'_>) -> Result<()> {
    let cursor = state.buffer.cursor();
    let range = grapheme_after(&state.buffer.content(), cursor);
    if let Some(range) = range {
        state.buffer.delete(range);
    }
    Ok(())
}

pub fn backward_delete_char(state: &mut EditorState<'_>) -> Result<()> {
    let cursor = state.buffer.cursor();
    let range = grapheme_before(&state.buffer.content(), cursor);
    if let Some(range) = range {
        state.buffer.delete(range);
    }
    Ok(())
}

/// Kill to the end of the logical line; at the end of a line, kill the separator
pub fn kill_line(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let end = {
        let text = state.buffer.content();
        let end = line_end(&text, cursor);
        if end == cursor && end < text.len() {
            end + LINE_SEPARATOR.len_utf8()
        } else {
            end
        }
    };
    kill_range(state, ring, cursor..end, KillDirection::Forward)
}

pub fn backward_kill_line(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let start = line_start(&state.buffer.content(), cursor);
    kill_range(state, ring, start..cursor, KillDirection::Backward)
}

/// Kill the logical line containing the cursor, including its separator
pub fn kill_whole_line(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let range = {
        let text = state.buffer.content();
        let start = line_start(&text, cursor);
        let end = line_end(&text, cursor);
        if end < text.len() {
            start..end + LINE_SEPARATOR.len_utf8()
        } else if start > 0 {
            // Last line: take the separator before it instead
            start - LINE_SEPARATOR.len_utf8()..end
        } else {
            start..end
        }
    };
    kill_range(state, ring, range, KillDirection::Forward)
}

/// Kill from the cursor to the end of the current or next word
pub fn kill_word(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let end = word_end_after(&state.buffer.content(), cursor, WordStyle::Shell);
    kill_range(state, ring, cursor..end, KillDirection::Forward)
}

pub fn backward_kill_word(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let start = word_start_before(&state.buffer.content(), cursor, WordStyle::Shell);
    kill_range(state, ring, start..cursor, KillDirection::Backward)
}

pub fn unix_line_discard(state: &mut EditorState<'_>) -> Result<()> {
    backward_kill_line(state)
}

/// Kill the whitespace-delimited word before the cursor
pub fn unix_word_rubout(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let cursor = state.buffer.cursor();
    let start = word_start_before(&state.buffer.content(), cursor, WordStyle::Unix);
    kill_range(state, ring, start..cursor, KillDirection::Backward)
}

/// Insert the newest kill at the cursor
pub fn yank(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    match ring.get_current() {
        Ok(text) => {
            state.buffer.insert_at_cursor(&text);
            Ok(())
        }
        Err(LineEditError::QueueEmpty) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Replace the text just yanked with the next older kill
///
/// Only does anything directly after `yank` or `yank-pop`.
pub fn yank_pop(state: &mut EditorState<'_>) -> Result<()> {
    let ring = state.kill_ring()?;
    let previous = ring.current_yank();
    let text = match ring.yank_pop() {
        Ok(text) => text,
        Err(LineEditError::InvalidState(_)) | Err(LineEditError::QueueEmpty) => return Ok(()),
        Err(e) => return Err(e),
    };

    let cursor = state.buffer.cursor();
    if let Some(previous) = previous {
        let yanked_here = cursor >= previous.len()
            && state.buffer.slice(cursor - previous.len()..cursor) == previous;
        if yanked_here {
            state.buffer.delete(cursor - previous.len()..cursor);
        }
    }
    state.buffer.insert_at_cursor(&text);
    Ok(())
}
