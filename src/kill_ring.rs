//! Readline-compatible kill ring
//!
//! A fixed number of slots holding killed text. Consecutive kills merge into
//! the newest entry; `get_current` starts a yank and `yank_pop` walks backward
//! through older entries, wrapping around to the newest.
//!
//! All operations take the ring's lock, so other threads may add kills while
//! the editing thread yanks.

use std::sync::{Mutex, MutexGuard};

use crate::error::{LineEditError, Result};

/// Default number of entries
pub const DEFAULT_CAPACITY: usize = 32;
/// Largest allowed capacity
pub const MAX_CAPACITY: usize = 256;
/// Smallest allowed capacity
pub const MIN_CAPACITY: usize = 1;

#[derive(Debug)]
struct RingState {
    slots: Vec<Option<String>>,
    count: usize,
    /// Slot of the most recent entry
    head: usize,
    /// Slot the current yank came from
    yank_position: usize,
    last_was_kill: bool,
    last_was_yank: bool,
}

impl RingState {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `text` in the next slot, dropping whatever was there
    fn push_entry(&mut self, text: &str) {
        let slot = if self.count == 0 {
            0
        } else {
            (self.head + 1) % self.capacity()
        };
        if self.slots[slot].replace(text.to_string()).is_none() {
            self.count += 1;
        }
        self.head = slot;
    }

    fn finish_kill(&mut self) {
        self.last_was_kill = true;
        self.last_was_yank = false;
        self.yank_position = self.head;
    }

    fn head_entry(&mut self) -> Option<&mut String> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.head].as_mut()
    }
}

/// Circular buffer of killed text
#[derive(Debug)]
pub struct KillRing {
    state: Mutex<RingState>,
}

impl KillRing {
    /// Create a ring; `capacity` is clamped to `MIN_CAPACITY..=MAX_CAPACITY`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        Self {
            state: Mutex::new(RingState {
                slots: vec![None; capacity],
                count: 0,
                head: 0,
                yank_position: 0,
                last_was_kill: false,
                last_was_yank: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RingState> {
        // Every operation leaves the state consistent, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add killed text
    ///
    /// With `append` set and the previous operation a kill, the text is
    /// concatenated onto the newest entry instead of starting a new one.
    pub fn add(&self, text: &str, append: bool) -> Result<()> {
        if text.is_empty() {
            return Err(LineEditError::InvalidParameter("kill text is empty"));
        }
        let mut state = self.lock();
        let merge = append && state.last_was_kill && state.count > 0;
        if merge {
            if let Some(entry) = state.head_entry() {
                entry.push_str(text);
            }
        } else {
            state.push_entry(text);
        }
        state.finish_kill();
        tracing::trace!(len = text.len(), merged = merge, "kill ring add");
        Ok(())
    }

    /// Add text killed leftward of the cursor
    ///
    /// Continuing a kill, the text goes in front of the newest entry so the
    /// combined entry reads in buffer order.
    pub fn prepend(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(LineEditError::InvalidParameter("kill text is empty"));
        }
        let mut state = self.lock();
        let merge = state.last_was_kill && state.count > 0;
        if merge {
            if let Some(entry) = state.head_entry() {
                entry.insert_str(0, text);
            }
        } else {
            state.push_entry(text);
        }
        state.finish_kill();
        tracing::trace!(len = text.len(), merged = merge, "kill ring prepend");
        Ok(())
    }

    /// Newest entry, starting a yank
    pub fn get_current(&self) -> Result<String> {
        let mut state = self.lock();
        let head = state.head;
        let text = state
            .head_entry()
            .cloned()
            .ok_or(LineEditError::QueueEmpty)?;
        state.last_was_yank = true;
        state.last_was_kill = false;
        state.yank_position = head;
        Ok(text)
    }

    /// Step to the previous entry after a yank
    ///
    /// Fails with `InvalidState` unless the last ring operation was a yank or
    /// yank-pop. Empty slots are skipped and the walk wraps to the newest entry.
    pub fn yank_pop(&self) -> Result<String> {
        let mut state = self.lock();
        if !state.last_was_yank {
            return Err(LineEditError::InvalidState("yank-pop without a preceding yank"));
        }
        if state.count == 0 {
            return Err(LineEditError::QueueEmpty);
        }

        let capacity = state.capacity();
        let mut position = state.yank_position;
        for _ in 0..capacity {
            position = (position + capacity - 1) % capacity;
            if let Some(text) = state.slots[position].clone() {
                state.yank_position = position;
                return Ok(text);
            }
        }
        Err(LineEditError::QueueEmpty)
    }

    /// Text of the entry the current yank came from, without changing state
    pub fn current_yank(&self) -> Option<String> {
        let state = self.lock();
        if !state.last_was_yank {
            return None;
        }
        state.slots[state.yank_position].clone()
    }

    /// Entry by age: 0 is the newest
    pub fn get(&self, index: usize) -> Result<String> {
        let state = self.lock();
        if index >= state.count {
            return Err(LineEditError::NotFound(format!("kill ring entry {}", index)));
        }
        let capacity = state.capacity();
        let slot = (state.head + capacity - index) % capacity;
        state.slots[slot]
            .clone()
            .ok_or_else(|| LineEditError::NotFound(format!("kill ring entry {}", index)))
    }

    /// Drop every entry and reset all state
    pub fn clear(&self) {
        let mut state = self.lock();
        state.slots.iter_mut().for_each(|slot| *slot = None);
        state.count = 0;
        state.head = 0;
        state.yank_position = 0;
        state.last_was_kill = false;
        state.last_was_yank = false;
    }

    /// Break a yank/yank-pop chain
    pub fn reset_yank_state(&self) {
        self.lock().last_was_yank = false;
    }

    /// Mark whether the last operation was a kill, controlling whether the next kill merges
    pub fn set_last_was_kill(&self, value: bool) {
        let mut state = self.lock();
        state.last_was_kill = value;
        if value {
            state.last_was_yank = false;
        }
    }

    pub fn last_was_kill(&self) -> bool {
        self.lock().last_was_kill
    }

    pub fn last_was_yank(&self) -> bool {
        self.lock().last_was_yank
    }

    pub fn count(&self) -> usize {
        self.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }
}

impl Default for KillRing {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
