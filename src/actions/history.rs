//! History and completion actions
//!
//! These delegate to the enclosing line-completion loop; when it offers no
//! history or completions they leave the buffer untouched.

use crate::editable::{LineBuffer, LineCompletionContext, SearchDirection};
use crate::error::Result;

fn replace_line(context: &mut dyn LineCompletionContext, entry: Option<String>) -> Result<()> {
    if let Some(line) = entry {
        context.editor_state().buffer.set_content(&line);
    }
    Ok(())
}

pub fn previous_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    let entry = context.history_previous();
    replace_line(context, entry)
}

pub fn next_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    let entry = context.history_next();
    replace_line(context, entry)
}

pub fn beginning_of_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    let entry = context.history_first();
    replace_line(context, entry)
}

pub fn end_of_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    let entry = context.history_last();
    replace_line(context, entry)
}

/// Text before the cursor, used as the search prefix
fn search_prefix(buffer: &dyn LineBuffer) -> String {
    buffer.slice(0..buffer.cursor())
}

fn search(context: &mut dyn LineCompletionContext, direction: SearchDirection) -> Result<()> {
    let prefix = search_prefix(context.editor_state().buffer);
    let Some(line) = context.history_search(&prefix, direction) else {
        return Ok(());
    };
    let state = context.editor_state();
    state.buffer.set_content(&line);
    // Keep the cursor after the matched prefix so repeated searches reuse it
    state.buffer.set_cursor(prefix.len());
    Ok(())
}

pub fn reverse_search_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    search(context, SearchDirection::Backward)
}

pub fn forward_search_history(context: &mut dyn LineCompletionContext) -> Result<()> {
    search(context, SearchDirection::Forward)
}

fn line_and_cursor(context: &mut dyn LineCompletionContext) -> (String, usize) {
    let state = context.editor_state();
    (state.buffer.content().into_owned(), state.buffer.cursor())
}

/// Replace the word at the cursor with the loop's completion
pub fn complete(context: &mut dyn LineCompletionContext) -> Result<()> {
    let (line, cursor) = line_and_cursor(context);
    if let Some(completion) = context.complete(&line, cursor) {
        let state = context.editor_state();
        state.buffer.delete(completion.replace.clone());
        state.buffer.insert(completion.replace.start, &completion.text);
        state
            .buffer
            .set_cursor(completion.replace.start + completion.text.len());
    }
    Ok(())
}

/// Ask the loop for every completion; listing them is the loop's job
pub fn possible_completions(context: &mut dyn LineCompletionContext) -> Result<()> {
    let (line, cursor) = line_and_cursor(context);
    let completions = context.list_completions(&line, cursor);
    tracing::debug!(count = completions.len(), "possible completions");
    Ok(())
}

/// Replace the word at the cursor with every completion, space separated
pub fn insert_completions(context: &mut dyn LineCompletionContext) -> Result<()> {
    let (line, cursor) = line_and_cursor(context);
    let completions = context.list_completions(&line, cursor);
    let Some(first) = completions.first() else {
        return Ok(());
    };
    let replace = first.replace.clone();
    let joined = completions
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let state = context.editor_state();
    state.buffer.delete(replace.clone());
    state.buffer.insert(replace.start, &joined);
    state.buffer.set_cursor(replace.start + joined.len());
    Ok(())
}
