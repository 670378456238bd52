//! Command layer: the single entry point for every document mutation.
//!
//! `Engine` owns the element store, the snapshot history, and the selection
//! tracker, and is the only code that mutates any of them — pointer gestures,
//! keyboard shortcuts, and AI-collaborator callbacks all funnel their intents
//! through here, so no two mutations ever interleave partially.
//!
//! Commands come in two flavors. Committing commands (add, delete, duplicate,
//! confirmed undo/redo, finalize) each produce exactly one new or relocated
//! history entry. Transient commands (`update_element`, used for continuous
//! drag/resize feedback) mutate the live store without touching history; the
//! gesture owner calls [`Engine::finalize_edit`] once at the end of the
//! sequence to commit the accumulated result as a single entry.
//!
//! Undo and redo are two-phase: the engine never pops a confirmation prompt
//! itself. A request that could move the cursor returns
//! [`Action::ConfirmRequested`] and parks the operation; the host asks the
//! user and reports back through [`Engine::resolve_confirm`]. Declining is a
//! cancellation, not an error — state is exactly as before the request.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::element::{Element, ElementId, ElementKind, PartialElement};
use crate::history::History;
use crate::selection::Selection;
use crate::store::{ElementStore, IdProvider};

/// A history movement awaiting host confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    /// Step the cursor back one snapshot.
    Undo,
    /// Step the cursor forward one snapshot.
    Redo,
}

/// Actions returned from engine operations for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing happened; state is unchanged.
    None,
    /// An element was removed from the document.
    ElementDeleted {
        /// Id of the removed element.
        id: ElementId,
    },
    /// The selection was cleared without touching the document.
    SelectionCleared,
    /// The host must ask the user to confirm `op`, then call
    /// [`Engine::resolve_confirm`] with the answer.
    ConfirmRequested {
        /// The parked history movement.
        op: HistoryOp,
    },
    /// A confirmed history move replaced the document wholesale.
    DocumentRestored {
        /// The movement that was applied.
        op: HistoryOp,
    },
}

/// Errors from commands that name a specific element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The referenced id is not in the store.
    #[error("element not found: {0}")]
    UnknownElement(ElementId),
    /// `delete_element(None)` was called with nothing selected.
    #[error("no element selected")]
    NothingSelected,
}

/// The canvas editor core: element store + history + selection behind one
/// command API.
pub struct Engine {
    store: ElementStore,
    history: History,
    selection: Selection,
    pending: Option<HistoryOp>,
}

impl Engine {
    /// Create an engine over an empty document with random element ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Box::new(crate::store::RandomIds))
    }

    /// Create an engine over an empty document with an injected id source.
    #[must_use]
    pub fn with_ids(ids: Box<dyn IdProvider>) -> Self {
        Self {
            store: ElementStore::with_ids(ids),
            history: History::new(),
            selection: Selection::new(),
            pending: None,
        }
    }

    // --- Committing commands ---

    /// Create a new element from `payload` overlaid on kind defaults, commit
    /// a snapshot, and select the new element. Returns a copy of it.
    pub fn add_element(&mut self, kind: ElementKind, payload: &PartialElement) -> Element {
        let element = self.store.add(kind, payload);
        self.history.commit(self.store.snapshot());
        self.selection.set(Some(element.id));
        tracing::debug!(id = %element.id, kind = ?kind, "element added");
        element
    }

    /// Delete the element with `id`, or the current selection when `id` is
    /// `None`. Commits a snapshot and clears the selection if it pointed at
    /// the deleted element. Returns the deleted id.
    ///
    /// # Errors
    ///
    /// `NothingSelected` when called without an id and nothing is selected;
    /// `UnknownElement` when the target id is not in the store. Neither
    /// mutates any state.
    pub fn delete_element(&mut self, id: Option<ElementId>) -> Result<ElementId, CommandError> {
        let target = id
            .or_else(|| self.selection.get())
            .ok_or(CommandError::NothingSelected)?;
        self.store
            .remove(&target)
            .ok_or(CommandError::UnknownElement(target))?;
        self.history.commit(self.store.snapshot());
        self.selection.reconcile(&self.store);
        tracing::debug!(id = %target, "element deleted");
        Ok(target)
    }

    /// Copy the element with `id` (nudged 20 units down-right, stacked on
    /// top), commit a snapshot, and select the copy. Returns the copy.
    ///
    /// # Errors
    ///
    /// `UnknownElement` when `id` is not in the store; no state is mutated.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Result<Element, CommandError> {
        let copy = self
            .store
            .duplicate(id)
            .ok_or(CommandError::UnknownElement(*id))?;
        self.history.commit(self.store.snapshot());
        self.selection.set(Some(copy.id));
        tracing::debug!(source = %id, copy = %copy.id, "element duplicated");
        Ok(copy)
    }

    /// Commit the live collection if it has drifted from the snapshot under
    /// the history cursor. Call once at the end of a transient edit sequence
    /// (drag, resize, rotate) so the whole gesture lands as one undo step.
    /// Returns whether a commit happened.
    pub fn finalize_edit(&mut self) -> bool {
        let snapshot = self.store.snapshot();
        if self.history.current() == Some(&snapshot) {
            return false;
        }
        self.history.commit(snapshot);
        tracing::debug!("transient edits committed");
        true
    }

    // --- Transient commands ---

    /// Merge `fields` into the element with `id` without committing history.
    /// Continuous gesture feedback calls this every frame; see
    /// [`Engine::finalize_edit`].
    ///
    /// # Errors
    ///
    /// `UnknownElement` when `id` is not in the store.
    pub fn update_element(
        &mut self,
        id: &ElementId,
        fields: &PartialElement,
    ) -> Result<(), CommandError> {
        if self.store.update(id, fields) {
            Ok(())
        } else {
            Err(CommandError::UnknownElement(*id))
        }
    }

    // --- History ---

    /// Request an undo. When the cursor can move this parks the operation
    /// and returns [`Action::ConfirmRequested`]; at the start of history it
    /// is a no-op returning [`Action::None`].
    pub fn undo(&mut self) -> Action {
        self.propose(HistoryOp::Undo)
    }

    /// Request a redo. When the cursor can move this parks the operation
    /// and returns [`Action::ConfirmRequested`]; at the end of history it
    /// is a no-op returning [`Action::None`].
    pub fn redo(&mut self) -> Action {
        self.propose(HistoryOp::Redo)
    }

    fn propose(&mut self, op: HistoryOp) -> Action {
        let movable = match op {
            HistoryOp::Undo => self.history.can_undo(),
            HistoryOp::Redo => self.history.can_redo(),
        };
        if !movable {
            return Action::None;
        }
        // A newer request supersedes any still-unanswered one.
        self.pending = Some(op);
        Action::ConfirmRequested { op }
    }

    /// Answer the outstanding [`Action::ConfirmRequested`]. Accepting moves
    /// the cursor, replaces the document with the snapshot now under it, and
    /// clears the selection if its element vanished; declining discards the
    /// parked operation with state unchanged. With no request outstanding
    /// this is a no-op.
    pub fn resolve_confirm(&mut self, accepted: bool) -> Action {
        let Some(op) = self.pending.take() else {
            return Action::None;
        };
        if !accepted {
            tracing::debug!(op = ?op, "history move declined");
            return Action::None;
        }

        let snapshot = match op {
            HistoryOp::Undo => self.history.undo().cloned(),
            HistoryOp::Redo => self.history.redo().cloned(),
        };
        let Some(snapshot) = snapshot else {
            // The boundary moved since the request; nothing to apply.
            return Action::None;
        };

        self.store.restore(snapshot);
        self.selection.reconcile(&self.store);
        tracing::debug!(op = ?op, cursor = self.history.cursor(), "document restored");
        Action::DocumentRestored { op }
    }

    /// The history movement awaiting confirmation, if any.
    #[must_use]
    pub fn pending_confirm(&self) -> Option<HistoryOp> {
        self.pending
    }

    /// Whether the cursor can step back.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether the cursor can step forward.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots in history, including the initial empty one.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current history cursor position.
    #[must_use]
    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    // --- Selection ---

    /// The currently selected element id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selection.get()
    }

    /// Select `id`, or clear with `None`.
    pub fn set_selected(&mut self, id: Option<ElementId>) {
        self.selection.set(id);
    }

    // --- Queries ---

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// All elements in paint order (ascending `z_index`, insertion order
    /// breaking ties).
    #[must_use]
    pub fn elements(&self) -> Vec<&Element> {
        self.store.sorted_elements()
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    // --- Hydration ---

    /// Replace the document with a host-supplied collection, reseeding the
    /// history at it and clearing selection and any parked confirmation.
    pub fn load_document(&mut self, elements: Vec<Element>) {
        self.store.restore(elements);
        self.history.reset(self.store.snapshot());
        self.selection.clear();
        self.pending = None;
        tracing::debug!(count = self.store.len(), "document loaded");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
