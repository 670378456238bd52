//! Selection tracker: at most one active element id.
//!
//! The tracker does no validation at set time; the engine reconciles it
//! against the store after every mutation that can remove elements, so a
//! non-null selection always references a live element between commands.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::element::ElementId;
use crate::store::ElementStore;

/// The single element currently targeted for property edits, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    id: Option<ElementId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected element id, if any.
    #[must_use]
    pub fn get(&self) -> Option<ElementId> {
        self.id
    }

    /// Select `id`, or clear with `None`. Not validated against the store.
    pub fn set(&mut self, id: Option<ElementId>) {
        self.id = id;
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.id = None;
    }

    /// Clear the selection if it no longer references a live element.
    /// Returns true if a dangling selection was cleared.
    pub fn reconcile(&mut self, store: &ElementStore) -> bool {
        match self.id {
            Some(id) if !store.contains(&id) => {
                self.id = None;
                true
            }
            _ => false,
        }
    }
}
