//! Running actions and the kill/yank chain bookkeeping that follows them

use crate::editable::{EditorState, LineCompletionContext};
use crate::error::{LineEditError, Result};
use crate::kill_ring::KillRing;

use super::registry::{ActionCategory, ActionDescriptor, ActionKind};

/// Run a simple action against editing state
///
/// Context actions cannot run here and yield `InvalidState`.
pub fn run_simple(action: &ActionDescriptor, state: &mut EditorState<'_>) -> Result<()> {
    match action.kind {
        ActionKind::Simple(f) => {
            let result = f(state);
            finish_action(action, state.kill_ring);
            result
        }
        ActionKind::Context(_) => Err(LineEditError::InvalidState(
            "context action dispatched without a line-completion context",
        )),
    }
}

/// Run any action with the enclosing loop's context
pub fn run_with_context(
    action: &ActionDescriptor,
    context: &mut dyn LineCompletionContext,
) -> Result<()> {
    let result = match action.kind {
        ActionKind::Simple(f) => f(&mut context.editor_state()),
        ActionKind::Context(f) => f(context),
    };
    finish_action(action, context.editor_state().kill_ring);
    result
}

/// Break kill and yank chains after anything that is not a kill or a yank
pub fn finish_action(action: &ActionDescriptor, kill_ring: Option<&KillRing>) {
    let Some(ring) = kill_ring else {
        return;
    };
    if action.category != ActionCategory::Kill {
        ring.set_last_was_kill(false);
    }
    if action.category != ActionCategory::Yank {
        ring.reset_yank_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::registry;
    use crate::editable::{LineBuffer, StringBuffer};

    #[test]
    fn test_movement_breaks_kill_chain() {
        let ring = KillRing::default();
        let mut buffer = StringBuffer::from_text("one two");
        let mut state = EditorState::new(&mut buffer, &ring);

        run_simple(registry::lookup("backward-kill-word").unwrap(), &mut state).unwrap();
        assert!(ring.last_was_kill());

        run_simple(registry::lookup("backward-char").unwrap(), &mut state).unwrap();
        assert!(!ring.last_was_kill());

        run_simple(registry::lookup("backward-kill-word").unwrap(), &mut state).unwrap();
        assert_eq!(ring.count(), 2);
    }

    #[test]
    fn test_yank_chain_survives_yank_pop_only() {
        let ring = KillRing::default();
        ring.add("a", false).unwrap();
        ring.add("b", false).unwrap();
        let mut buffer = StringBuffer::new();
        let mut state = EditorState::new(&mut buffer, &ring);

        run_simple(registry::lookup("yank").unwrap(), &mut state).unwrap();
        assert!(ring.last_was_yank());
        run_simple(registry::lookup("yank-pop").unwrap(), &mut state).unwrap();
        assert!(ring.last_was_yank());
        assert_eq!(state.buffer.content(), "a");

        run_simple(registry::lookup("forward-char").unwrap(), &mut state).unwrap();
        assert!(!ring.last_was_yank());
    }

    #[test]
    fn test_context_action_rejected() {
        let mut buffer = StringBuffer::new();
        let mut state = EditorState::without_kill_ring(&mut buffer);
        let result = run_simple(registry::lookup("accept-line").unwrap(), &mut state);
        assert!(matches!(result, Err(LineEditError::InvalidState(_))));
    }
}
