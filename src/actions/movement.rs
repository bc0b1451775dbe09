//! Cursor motion actions

use crate::editable::EditorState;
use crate::error::Result;
use crate::util::{line_end, line_start, word_end_after, word_start_before, WordStyle};

pub fn forward_char(state: &mut EditorState<'_>) -> Result<()> {
    state.buffer.move_cursor(1);
    Ok(())
}

pub fn backward_char(state: &mut EditorState<'_>) -> Result<()> {
    state.buffer.move_cursor(-1);
    Ok(())
}

pub fn forward_word(state: &mut EditorState<'_>) -> Result<()> {
    let target = {
        let text = state.buffer.content();
        word_end_after(&text, state.buffer.cursor(), WordStyle::Shell)
    };
    state.buffer.set_cursor(target);
    Ok(())
}

pub fn backward_word(state: &mut EditorState<'_>) -> Result<()> {
    let target = {
        let text = state.buffer.content();
        word_start_before(&text, state.buffer.cursor(), WordStyle::Shell)
    };
    state.buffer.set_cursor(target);
    Ok(())
}

/// Start of the current logical line
pub fn beginning_of_line(state: &mut EditorState<'_>) -> Result<()> {
    let target = line_start(&state.buffer.content(), state.buffer.cursor());
    state.buffer.set_cursor(target);
    Ok(())
}

/// End of the current logical line
pub fn end_of_line(state: &mut EditorState<'_>) -> Result<()> {
    let target = line_end(&state.buffer.content(), state.buffer.cursor());
    state.buffer.set_cursor(target);
    Ok(())
}

pub fn beginning_of_buffer(state: &mut EditorState<'_>) -> Result<()> {
    state.buffer.set_cursor(0);
    Ok(())
}

pub fn end_of_buffer(state: &mut EditorState<'_>) -> Result<()> {
    let len = state.buffer.len();
    state.buffer.set_cursor(len);
    Ok(())
}
