// Deferred transition buffer
//
// Holds state changes that arrived after an element already changed state
// this frame. They are replayed, in order, at the start of the next frame.

use std::collections::VecDeque;

/// Default number of deferred transitions to store before compacting
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// Direction of a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Press,
    Release,
}

/// A single transition held back to a later frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredTransition {
    pub code: u32,
    pub transition: Transition,
}

/// FIFO of deferred transitions for one button table.
///
/// Past `capacity` the buffer is compacted down to one net transition per
/// element. Intermediate taps may be lost, the final held state never is.
#[derive(Debug)]
pub struct TransitionBuffer {
    buffer: VecDeque<DeferredTransition>,
    capacity: usize,
}

impl TransitionBuffer {
    /// Create a buffer that compacts once it holds more than `capacity` transitions
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a transition to the back of the buffer
    pub fn push(&mut self, code: u32, transition: Transition) {
        self.buffer.push_back(DeferredTransition { code, transition });
    }

    /// Check if the buffer holds more transitions than its capacity
    pub fn is_over_capacity(&self) -> bool {
        self.buffer.len() > self.capacity
    }

    /// Collapse the waiting transitions of each element into its net change.
    ///
    /// `is_held` reports the element's current state. An element keeps only its
    /// last transition, and only if that still changes the state. Elements stay
    /// in the order of their first waiting transition. Returns the number of
    /// transitions removed.
    pub fn compact(&mut self, is_held: impl Fn(u32) -> bool) -> usize {
        let before = self.buffer.len();
        let mut compacted: Vec<DeferredTransition> = Vec::with_capacity(before);

        for entry in self.buffer.drain(..) {
            match compacted.iter_mut().find(|kept| kept.code == entry.code) {
                Some(kept) => kept.transition = entry.transition,
                None => compacted.push(entry),
            }
        }

        compacted.retain(|entry| match entry.transition {
            Transition::Press => !is_held(entry.code),
            Transition::Release => is_held(entry.code),
        });

        self.buffer.extend(compacted);
        before - self.buffer.len()
    }

    /// Check if any transition for `code` is waiting
    pub fn has(&self, code: u32) -> bool {
        self.buffer.iter().any(|entry| entry.code == code)
    }

    /// Remove and return every waiting transition, oldest first
    pub fn take_all(&mut self) -> VecDeque<DeferredTransition> {
        std::mem::take(&mut self.buffer)
    }

    /// Get the number of deferred transitions
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for TransitionBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}
