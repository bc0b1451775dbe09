//! Line session tests: the full key loop with history, completion and line outcomes

mod common;

use std::sync::Arc;
use std::thread;

use common::{emacs_session, keys, typed};
use keyline::editable::Completion;
use keyline::session::Completer;
use keyline::{Config, KeyEvent, KeymapMode, LineEditError, LineOutcome, LineSession};
use pretty_assertions::assert_eq;

const GIT_WORDS: &[&str] = &["checkout", "cherry-pick", "commit"];

/// Completes the last space-separated word from `GIT_WORDS`
fn git_completer() -> Completer {
    Box::new(|line: &str, cursor: usize| {
        let start = line[..cursor].rfind(' ').map_or(0, |i| i + 1);
        let word = &line[start..cursor];
        GIT_WORDS
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion {
                replace: start..cursor,
                text: w.to_string(),
            })
            .collect()
    })
}

fn type_line(session: &mut LineSession, text: &str) {
    session.handle_keys(&typed(text)).unwrap();
}

// ============================================================================
// Line outcomes
// ============================================================================

#[test]
fn test_typing_and_accepting() {
    let mut session = emacs_session();
    type_line(&mut session, "ls -la");
    assert_eq!(session.line(), "ls -la");
    assert_eq!(session.cursor(), 6);

    session.handle_keys(&keys(&["RET"])).unwrap();
    assert_eq!(
        session.outcome(),
        Some(&LineOutcome::Accepted("ls -la".to_string()))
    );
    assert_eq!(
        session.finish_line(),
        Some(LineOutcome::Accepted("ls -la".to_string()))
    );
    assert_eq!(session.history(), ["ls -la".to_string()]);
    assert_eq!(session.line(), "");
}

#[test]
fn test_empty_lines_stay_out_of_history() {
    let mut session = emacs_session();
    session.handle_keys(&keys(&["C-m"])).unwrap();
    assert_eq!(
        session.finish_line(),
        Some(LineOutcome::Accepted(String::new()))
    );
    assert!(session.history().is_empty());
}

#[test]
fn test_abort_discards_line() {
    let mut session = emacs_session();
    type_line(&mut session, "rm -rf");
    session.handle_keys(&keys(&["C-g"])).unwrap();

    assert_eq!(session.finish_line(), Some(LineOutcome::Aborted));
    assert!(session.history().is_empty());
    assert_eq!(session.line(), "");
}

#[test]
fn test_send_eof() {
    let mut session = emacs_session();
    type_line(&mut session, "ab");
    session.handle_keys(&keys(&["C-a", "C-d"])).unwrap();
    assert_eq!(session.line(), "b");
    assert_eq!(session.outcome(), None);

    session.handle_keys(&keys(&["C-d", "C-d"])).unwrap();
    assert_eq!(session.outcome(), Some(&LineOutcome::EndOfInput));
}

#[test]
fn test_unbound_keys() {
    let mut session = emacs_session();
    type_line(&mut session, "x");

    let err = session.handle_key(&KeyEvent::key(keyline::keymap::KeyCode::F(5)));
    assert_eq!(err, Err(LineEditError::NotFound("F5".to_string())));
    let err = session.handle_keys(&keys(&["M-z"]));
    assert!(matches!(err, Err(LineEditError::NotFound(_))));
    assert_eq!(session.line(), "x");
}

#[test]
fn test_unbound_space_and_unicode_insert_themselves() {
    let mut session = emacs_session();
    type_line(&mut session, "echo héllo 日本");
    assert_eq!(session.line(), "echo héllo 日本");
}

// ============================================================================
// Editing inside a session
// ============================================================================

#[test]
fn test_kill_and_yank_across_lines() {
    let mut session = emacs_session();
    type_line(&mut session, "cargo build --release");
    session.handle_keys(&keys(&["M-DEL", "RET"])).unwrap();
    session.finish_line();

    type_line(&mut session, "cargo test ");
    session.handle_keys(&keys(&["C-y"])).unwrap();
    assert_eq!(session.line(), "cargo test --release");
}

#[test]
fn test_kill_word_from_inside_word() {
    let mut session = emacs_session();
    type_line(&mut session, "ab");
    session.handle_keys(&keys(&["C-b", "M-d"])).unwrap();

    assert_eq!(session.line(), "a");
    assert_eq!(session.kill_ring().get_current().unwrap(), "b");
}

#[test]
fn test_typing_breaks_kill_chain() {
    let mut session = emacs_session();
    type_line(&mut session, "one two");
    session.handle_keys(&keys(&["C-w"])).unwrap();
    type_line(&mut session, "x");
    session.handle_keys(&keys(&["DEL", "C-w"])).unwrap();

    assert_eq!(session.line(), "");
    assert_eq!(session.kill_ring().count(), 2);
    assert_eq!(session.kill_ring().get(0).unwrap(), "one ");
}

#[test]
fn test_quoted_insert_in_session() {
    let mut session = emacs_session();
    session.handle_keys(&keys(&["C-q", "C-g"])).unwrap();
    assert_eq!(session.line(), "\u{7}");
    assert_eq!(session.outcome(), None);
}

#[test]
fn test_kill_ring_shared_with_another_thread() {
    let mut session = emacs_session();
    let ring = Arc::clone(session.kill_ring());
    thread::spawn(move || ring.add("from elsewhere", false).unwrap())
        .join()
        .unwrap();

    session.handle_keys(&keys(&["C-y"])).unwrap();
    assert_eq!(session.line(), "from elsewhere");
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_navigation() {
    let mut session = emacs_session().with_history(["make", "make test", "git status"]);
    type_line(&mut session, "draft");

    session.handle_keys(&keys(&["UP"])).unwrap();
    assert_eq!(session.line(), "git status");
    session.handle_keys(&keys(&["C-p", "C-p"])).unwrap();
    assert_eq!(session.line(), "make");
    session.handle_keys(&keys(&["UP"])).unwrap();
    assert_eq!(session.line(), "make");

    session.handle_keys(&keys(&["DOWN"])).unwrap();
    assert_eq!(session.line(), "make test");
    session.handle_keys(&keys(&["M->"])).unwrap();
    assert_eq!(session.line(), "draft");
    assert_eq!(session.cursor(), 5);

    session.handle_keys(&keys(&["M-<"])).unwrap();
    assert_eq!(session.line(), "make");
}

#[test]
fn test_history_search_by_prefix() {
    let mut session = emacs_session().with_history(["make", "ls", "make test", "git status"]);
    type_line(&mut session, "ma");

    session.handle_keys(&keys(&["C-r"])).unwrap();
    assert_eq!(session.line(), "make test");
    assert_eq!(session.cursor(), 2);

    session.handle_keys(&keys(&["C-r"])).unwrap();
    assert_eq!(session.line(), "make");

    session.handle_keys(&keys(&["C-s"])).unwrap();
    assert_eq!(session.line(), "make test");

    type_line(&mut session, "zz");
    session.handle_keys(&keys(&["C-r"])).unwrap();
    assert_eq!(session.line(), "mazzke test");
}

#[test]
fn test_edited_history_entry_is_accepted() {
    let mut session = emacs_session().with_history(["git status"]);
    session.handle_keys(&keys(&["UP", "M-DEL"])).unwrap();
    type_line(&mut session, "log");
    session.handle_keys(&keys(&["RET"])).unwrap();

    assert_eq!(
        session.finish_line(),
        Some(LineOutcome::Accepted("git log".to_string()))
    );
    assert_eq!(session.history(), ["git status".to_string(), "git log".to_string()]);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_complete_single_candidate() {
    let mut session = emacs_session().with_completer(git_completer());
    type_line(&mut session, "git co");
    session.handle_keys(&keys(&["TAB"])).unwrap();
    assert_eq!(session.line(), "git commit");
    assert_eq!(session.cursor(), 10);
}

#[test]
fn test_complete_extends_to_common_prefix() {
    let mut session = emacs_session().with_completer(git_completer());
    type_line(&mut session, "git c");
    session.handle_keys(&keys(&["TAB"])).unwrap();
    assert_eq!(session.line(), "git c");

    type_line(&mut session, "h");
    session.handle_keys(&keys(&["TAB"])).unwrap();
    assert_eq!(session.line(), "git che");
}

#[test]
fn test_insert_all_completions() {
    let mut session = emacs_session().with_completer(git_completer());
    type_line(&mut session, "git ch");
    session.handle_keys(&keys(&["M-?", "M-*"])).unwrap();
    assert_eq!(session.line(), "git checkout cherry-pick");
}

#[test]
fn test_completion_without_completer_is_noop() {
    let mut session = emacs_session();
    type_line(&mut session, "git co");
    session.handle_keys(&keys(&["TAB", "M-*"])).unwrap();
    assert_eq!(session.line(), "git co");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_session_from_config() {
    let config = Config::from_toml_str(
        r#"
        [editor]
        kill_ring_capacity = 1

        [bindings]
        "C-t" = "transpose-words"
        "C-j" = "none"
        "#,
    )
    .unwrap();
    let (mut session, summary) = LineSession::from_config(&config).unwrap();
    assert_eq!(summary.overridden, 1);
    assert_eq!(summary.applied, 1);
    assert_eq!(session.kill_ring().capacity(), 1);

    type_line(&mut session, "one two");
    session.handle_keys(&keys(&["C-t"])).unwrap();
    assert_eq!(session.line(), "two one");

    assert!(matches!(
        session.handle_keys(&keys(&["C-j"])),
        Err(LineEditError::NotFound(_))
    ));
}

#[test]
fn test_vi_session_falls_back_to_emacs_bindings() {
    let config = Config::from_toml_str("[editor]\nkeymap = \"vi\"\n").unwrap();
    let (mut session, _) = LineSession::from_config(&config).unwrap();
    assert_eq!(session.manager().get_mode(), KeymapMode::ViInsert);

    type_line(&mut session, "abc");
    assert_eq!(session.line(), "abc");
    session.handle_keys(&keys(&["C-b", "C-k"])).unwrap();
    assert_eq!(session.line(), "ab");
    assert_eq!(session.kill_ring().get_current().unwrap(), "c");

    session.handle_keys(&keys(&["RET"])).unwrap();
    assert_eq!(
        session.finish_line(),
        Some(LineOutcome::Accepted("ab".to_string()))
    );

    type_line(&mut session, "rm");
    session.handle_keys(&keys(&["C-g"])).unwrap();
    assert_eq!(session.finish_line(), Some(LineOutcome::Aborted));
}

#[test]
fn test_vi_bindings_take_precedence_over_fallback() {
    let config = Config::from_toml_str(
        r#"
        [editor]
        keymap = "vi"

        [bindings]
        "C-a" = "end-of-line"
        "#,
    )
    .unwrap();
    let (mut session, summary) = LineSession::from_config(&config).unwrap();
    assert_eq!(summary.applied, 1);

    type_line(&mut session, "abc");
    session.handle_keys(&keys(&["C-b", "C-b"])).unwrap();
    assert_eq!(session.cursor(), 1);
    session.handle_keys(&keys(&["C-a"])).unwrap();
    assert_eq!(session.cursor(), 3);

    session.handle_keys(&keys(&["C-q", "C-g"])).unwrap();
    assert_eq!(session.line(), "abc\u{7}");
    assert_eq!(session.outcome(), None);
}
