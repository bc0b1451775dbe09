//! Line outcome and terminal/process control actions

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::editable::{EditorState, LineBuffer, LineCompletionContext};
use crate::error::Result;
use crate::util::grapheme_after;

pub fn accept_line(context: &mut dyn LineCompletionContext) -> Result<()> {
    let line = context.editor_state().buffer.content().into_owned();
    tracing::debug!(len = line.len(), "accept line");
    context.accept(line);
    Ok(())
}

pub fn abort_line(context: &mut dyn LineCompletionContext) -> Result<()> {
    context.abort();
    Ok(())
}

/// End of input on an empty line, otherwise delete the grapheme under the cursor
pub fn send_eof(context: &mut dyn LineCompletionContext) -> Result<()> {
    let state = context.editor_state();
    if state.buffer.is_empty() {
        context.end_of_input();
        return Ok(());
    }
    let cursor = state.buffer.cursor();
    let range = grapheme_after(&state.buffer.content(), cursor);
    if let Some(range) = range {
        state.buffer.delete(range);
    }
    Ok(())
}

#[cfg(unix)]
fn raise_signal(signal: nix::sys::signal::Signal) {
    if let Err(e) = nix::sys::signal::raise(signal) {
        tracing::warn!("Failed to raise {:?}: {}", signal, e);
    }
}

pub fn interrupt(_state: &mut EditorState<'_>) -> Result<()> {
    #[cfg(unix)]
    raise_signal(nix::sys::signal::Signal::SIGINT);
    Ok(())
}

pub fn suspend(_state: &mut EditorState<'_>) -> Result<()> {
    #[cfg(unix)]
    raise_signal(nix::sys::signal::Signal::SIGTSTP);
    Ok(())
}

pub fn clear_screen(_state: &mut EditorState<'_>) -> Result<()> {
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
        tracing::warn!("Failed to clear screen: {}", e);
    }
    Ok(())
}
