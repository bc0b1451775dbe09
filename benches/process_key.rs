//! Benchmarks for per-keystroke dispatch
//!
//! Run with: cargo bench process_key

use keyline::editable::{EditorState, StringBuffer};
use keyline::keymap::{parse_key_event, KeyEvent, KeySequence, KeybindingManager};
use keyline::KillRing;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str = "git commit -m \"fix the kill ring wraparound\" --no-verify";

// ============================================================================
// Codec
// ============================================================================

#[divan::bench(args = ["a", "C-a", "M-DEL", "C-M-S-DELETE", "F12"])]
fn parse_sequence(input: &str) -> KeySequence {
    KeySequence::parse(divan::black_box(input)).unwrap()
}

#[divan::bench]
fn encode_ctrl_letter(bencher: divan::Bencher) {
    let event = KeyEvent::ctrl('k');
    bencher.bench(|| divan::black_box(&event).to_sequence().unwrap());
}

// ============================================================================
// Lookup and dispatch
// ============================================================================

#[divan::bench(args = ["C-f", "C-b", "M-f", "F5"])]
fn lookup_binding(bencher: divan::Bencher, key: &str) {
    let manager = KeybindingManager::with_emacs_preset().unwrap();
    let event = parse_key_event(key).unwrap();
    bencher.bench(|| manager.binding_for_event(divan::black_box(&event)).is_some());
}

#[divan::bench]
fn cursor_sweep(bencher: divan::Bencher) {
    let mut manager = KeybindingManager::with_emacs_preset().unwrap();
    let ring = KillRing::default();
    let keys = [KeyEvent::ctrl('a'), KeyEvent::alt('f'), KeyEvent::alt('f'), KeyEvent::ctrl('e')];

    bencher
        .with_inputs(|| StringBuffer::from_text(LINE))
        .bench_local_values(|mut buffer| {
            {
                let mut state = EditorState::new(&mut buffer, &ring);
                for key in &keys {
                    let _ = manager.process_key(key, &mut state);
                }
            }
            buffer
        });
}

#[divan::bench]
fn kill_and_yank_word(bencher: divan::Bencher) {
    let mut manager = KeybindingManager::with_emacs_preset().unwrap();
    let keys = [KeyEvent::ctrl('w'), KeyEvent::ctrl('a'), KeyEvent::ctrl('y')];

    bencher
        .with_inputs(|| (StringBuffer::from_text(LINE), KillRing::new(8)))
        .bench_local_values(|(mut buffer, ring)| {
            {
                let mut state = EditorState::new(&mut buffer, &ring);
                for key in &keys {
                    let _ = manager.process_key(key, &mut state);
                }
            }
            (buffer, ring)
        });
}
