// Per-element button state with frame edges

use super::buffer::{Transition, TransitionBuffer, DEFAULT_BUFFER_SIZE};
use std::collections::HashSet;

/// Held / down / up state for one table of buttons (keys, mouse buttons,
/// or the buttons of one controller).
///
/// Frame convention: `held` is true from the down frame up to, but not
/// including, the up frame. At most one transition per element is applied
/// per frame, so `down` and `up` are never both true for the same code.
/// Extra transitions wait in a buffer and replay on later frames. When that
/// buffer overflows it is reduced to each element's net change, so a release
/// is never lost.
#[derive(Debug)]
pub struct ButtonStates {
    /// Buttons currently held down
    held: HashSet<u32>,

    /// Buttons that went down this frame
    down: HashSet<u32>,

    /// Buttons that went up this frame
    up: HashSet<u32>,

    /// Transitions waiting for a later frame
    deferred: TransitionBuffer,
}

impl ButtonStates {
    /// Create an empty state table
    pub fn new(max_deferred: usize) -> Self {
        Self {
            held: HashSet::new(),
            down: HashSet::new(),
            up: HashSet::new(),
            deferred: TransitionBuffer::new(max_deferred),
        }
    }

    /// Check if a button is currently held
    pub fn is_held(&self, code: u32) -> bool {
        self.held.contains(&code)
    }

    /// Check if a button went down this frame
    pub fn is_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }

    /// Check if a button went up this frame
    pub fn is_up(&self, code: u32) -> bool {
        self.up.contains(&code)
    }

    /// Register a button press
    pub(crate) fn press(&mut self, code: u32) {
        self.apply(code, Transition::Press);
    }

    /// Register a button release
    pub(crate) fn release(&mut self, code: u32) {
        self.apply(code, Transition::Release);
    }

    /// Release every held button
    pub(crate) fn release_all(&mut self) {
        for code in self.held_codes() {
            self.release(code);
        }
    }

    /// Start a new frame: clear edges, then replay deferred transitions
    pub(crate) fn begin_frame(&mut self) {
        self.down.clear();
        self.up.clear();

        for entry in self.deferred.take_all() {
            self.apply(entry.code, entry.transition);
        }
    }

    fn apply(&mut self, code: u32, transition: Transition) {
        let changes_state = match transition {
            Transition::Press => !self.held.contains(&code),
            Transition::Release => self.held.contains(&code),
        };

        // Keep per-element ordering once anything is waiting
        if self.deferred.has(code) || (changes_state && self.changed_this_frame(code)) {
            self.deferred.push(code, transition);
            if self.deferred.is_over_capacity() {
                self.compact_deferred();
            }
            return;
        }

        if !changes_state {
            return;
        }

        match transition {
            Transition::Press => {
                self.held.insert(code);
                self.down.insert(code);
            }
            Transition::Release => {
                self.held.remove(&code);
                self.up.insert(code);
            }
        }
    }

    fn changed_this_frame(&self, code: u32) -> bool {
        self.down.contains(&code) || self.up.contains(&code)
    }

    fn compact_deferred(&mut self) {
        let held = &self.held;
        let removed = self.deferred.compact(|code| held.contains(&code));
        log::debug!(
            "Deferred transition buffer overflowed, collapsed {} transitions",
            removed
        );

        if self.deferred.is_over_capacity() {
            log::warn!(
                "Deferred transition buffer still holds {} net changes after compaction",
                self.deferred.len()
            );
        }
    }

    /// Get all currently held buttons, in ascending code order
    pub fn held_codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.held.iter().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for ButtonStates {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}
