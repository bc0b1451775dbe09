//! Kill ring integration tests: ring properties and kill/yank chains driven by actions

mod common;

use common::{apply, buffer, render};
use keyline::actions::{registry, run_simple};
use keyline::editable::EditorState;
use keyline::kill_ring::{KillRing, MAX_CAPACITY};
use keyline::LineEditError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run(names: &[&str], text: &str, ring: &KillRing) -> String {
    let mut buf = buffer(text);
    {
        let mut state = EditorState::new(&mut buf, ring);
        for name in names {
            let action = registry::lookup(name).unwrap();
            run_simple(action, &mut state).unwrap();
        }
    }
    render(&buf)
}

// ============================================================================
// Ring properties
// ============================================================================

proptest! {
    #[test]
    fn count_never_exceeds_capacity(
        capacity in 1usize..8,
        kills in proptest::collection::vec(("[a-z]{1,4}", any::<bool>()), 0..40),
    ) {
        let ring = KillRing::new(capacity);
        for (text, append) in &kills {
            ring.add(text, *append).unwrap();
            prop_assert!(ring.count() <= ring.capacity());
        }
    }

    #[test]
    fn unmerged_kills_are_newest_first(texts in proptest::collection::vec("[a-z]{1,6}", 1..10)) {
        let ring = KillRing::new(MAX_CAPACITY);
        for text in &texts {
            ring.add(text, false).unwrap();
        }
        for (age, text) in texts.iter().rev().enumerate() {
            prop_assert_eq!(&ring.get(age).unwrap(), text);
        }
    }

    #[test]
    fn yank_pop_visits_every_entry(n in 1usize..6) {
        let ring = KillRing::new(n);
        for i in 0..n {
            ring.add(&i.to_string(), false).unwrap();
        }
        let mut seen = vec![ring.get_current().unwrap()];
        for _ in 1..n {
            seen.push(ring.yank_pop().unwrap());
        }
        seen.sort();
        let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        prop_assert_eq!(seen, expected);
        // One more pop wraps to the newest entry
        prop_assert_eq!(ring.yank_pop().unwrap(), (n - 1).to_string());
    }
}

// ============================================================================
// Kill chains through actions
// ============================================================================

#[test]
fn test_consecutive_forward_kills_merge() {
    let ring = KillRing::default();
    assert_eq!(run(&["kill-word", "kill-word"], "|one two three", &ring), "| three");
    assert_eq!(ring.count(), 1);
    assert_eq!(ring.get(0).unwrap(), "one two");
}

#[test]
fn test_consecutive_backward_kills_read_in_buffer_order() {
    let ring = KillRing::default();
    assert_eq!(
        run(&["backward-kill-word", "backward-kill-word"], "one two three|", &ring),
        "one |"
    );
    assert_eq!(ring.count(), 1);
    assert_eq!(ring.get(0).unwrap(), "two three");
}

#[test]
fn test_motion_between_kills_starts_new_entry() {
    let ring = KillRing::default();
    assert_eq!(
        run(&["kill-word", "forward-char", "kill-word"], "|one two three", &ring),
        " | three"
    );
    assert_eq!(ring.count(), 2);
    assert_eq!(ring.get(0).unwrap(), "two");
    assert_eq!(ring.get(1).unwrap(), "one");
}

#[test]
fn test_yank_inserts_newest_kill() {
    let ring = KillRing::default();
    ring.add("world", false).unwrap();
    assert_eq!(apply("yank", "hello |", &ring), "hello world|");
    assert!(ring.last_was_yank());
}

#[test]
fn test_yank_on_empty_ring_changes_nothing() {
    let ring = KillRing::default();
    assert_eq!(apply("yank", "ab|c", &ring), "ab|c");
    assert_eq!(ring.get_current(), Err(LineEditError::QueueEmpty));
}

#[test]
fn test_yank_pop_replaces_previous_yank() {
    let ring = KillRing::default();
    ring.add("first", false).unwrap();
    ring.add("second", false).unwrap();

    assert_eq!(run(&["yank", "yank-pop"], "> |", &ring), "> first|");
    assert_eq!(run(&["yank", "yank-pop", "yank-pop"], "> |", &ring), "> second|");
}

#[test]
fn test_yank_pop_without_yank_is_noop() {
    let ring = KillRing::default();
    ring.add("text", false).unwrap();
    assert_eq!(apply("yank-pop", "abc|", &ring), "abc|");
}

#[test]
fn test_self_contained_kill_and_yank_round_trip() {
    let ring = KillRing::default();
    assert_eq!(
        run(&["beginning-of-line", "kill-line", "yank", "yank"], "ab|c", &ring),
        "abcabc|"
    );
}

#[test]
fn test_ring_is_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let ring = Arc::new(KillRing::new(16));
    let producer = {
        let ring = Arc::clone(&ring);
        thread::spawn(move || {
            for i in 0..8 {
                ring.add(&format!("bg{}", i), false).unwrap();
            }
        })
    };
    producer.join().unwrap();

    assert_eq!(apply("yank", "|", &ring), "bg7|");
    assert_eq!(ring.count(), 8);
}
