//! Bounded FIFO history of observations.

use std::collections::VecDeque;

use axon_core::models::Observation;

/// The most recent observations, bounded by the configured context window.
///
/// Invariant: length never exceeds capacity; pushing past capacity evicts
/// exactly the oldest entry. Cleared only on explicit reset.
#[derive(Debug, Clone)]
pub struct ObservationWindow {
    capacity: usize,
    buffer: VecDeque<Observation>,
}

impl ObservationWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Push a new observation, returning the evicted oldest one when full.
    pub fn push(&mut self, observation: Observation) -> Option<Observation> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(observation);
        evicted
    }

    /// Resize the window; evicts oldest entries if the new capacity is
    /// smaller than the current length.
    pub fn set_capacity(&mut self, capacity: usize) {
        while self.buffer.len() > capacity {
            self.buffer.pop_front();
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.buffer.iter()
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<&Observation> {
        self.buffer.back()
    }

    /// Explicit reset.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
