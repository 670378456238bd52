//! Snapshot history: an ordered list of immutable document snapshots plus a
//! cursor marking "now".
//!
//! The history is pure state — no UI, no confirmation prompts, no knowledge
//! of the store it snapshots. Committing truncates any redo tail beyond the
//! cursor before appending (linear history: redo branches are discarded, not
//! preserved). Undo and redo move the cursor by one within bounds and hand
//! back the snapshot now under it; the engine is responsible for putting that
//! snapshot back into the store and for gating the operation behind host
//! confirmation.
//!
//! Invariants: the history always holds at least one snapshot (it is seeded
//! with the empty collection), the cursor is always in bounds, and the
//! snapshot under the cursor equals the live store content.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::element::Element;

/// An immutable copy of the full element collection at one history point, in
/// insertion order.
pub type Snapshot = Vec<Element>;

/// Linear snapshot history with a cursor.
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with a single empty snapshot, cursor on it.
    #[must_use]
    pub fn new() -> Self {
        Self { snapshots: vec![Vec::new()], cursor: 0 }
    }

    /// Discard all snapshots after the cursor, append `snapshot`, and move
    /// the cursor onto it.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step the cursor back one entry and return the snapshot now under it.
    /// `None` at the start of history (state unchanged).
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor)
    }

    /// Step the cursor forward one entry and return the snapshot now under
    /// it. `None` at the end of history (state unchanged).
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor)
    }

    /// Whether there is an earlier snapshot to step back to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is a later snapshot to step forward to.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.cursor)
    }

    /// Cursor position (index of "now" in the snapshot list).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the seed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the history holds at least its seed snapshot. Present
    /// for the conventional `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Reset to a single seeded snapshot, discarding everything else. Used
    /// when the host hydrates a fresh document.
    pub fn reset(&mut self, seed: Snapshot) {
        self.snapshots = vec![seed];
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
