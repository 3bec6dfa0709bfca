//! Undo/redo stacks of full scene snapshots.
//!
//! DESIGN
//! ======
//! Every entry is a complete copy of the object list, captured just before a
//! significant mutation (add, remove, drag start, rotate start). The live list
//! is always the "present" and lives outside this type. Both stacks are capped
//! at the configured limit, discarding the oldest entries first.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::doc::PlacedObject;

/// One immutable copy of the full object list.
pub type Snapshot = Vec<PlacedObject>;

#[derive(Debug, Clone)]
pub struct History {
    /// Oldest at the front, most recent at the back.
    past: VecDeque<Snapshot>,
    /// Next redo target at the front.
    future: VecDeque<Snapshot>,
    limit: usize,
}

impl History {
    /// Create empty stacks holding at most `limit` entries each (minimum 1).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { past: VecDeque::new(), future: VecDeque::new(), limit: limit.max(1) }
    }

    /// Record `present` before a new branch of edits. Invalidates redo.
    pub fn record(&mut self, present: Snapshot) {
        self.push_past(present);
        self.future.clear();
    }

    /// Step back: returns the snapshot to restore, stashing `present` for redo.
    /// `None` (and no change) when there is nothing to undo.
    pub fn undo(&mut self, present: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push_front(present);
        self.future.truncate(self.limit);
        Some(previous)
    }

    /// Step forward: returns the snapshot to restore, stashing `present` for undo.
    /// `None` (and no change) when there is nothing to redo.
    pub fn redo(&mut self, present: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop_front()?;
        self.push_past(present);
        Some(next)
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
