//! Element store: the live, ordered collection of canvas elements.
//!
//! The store owns the canonical document state and exposes pure, synchronous
//! mutation primitives — create with defaults, sparse update, remove,
//! duplicate — plus snapshot/restore for the history layer. It never touches
//! history or selection itself; sequencing those is the engine's job.
//!
//! Elements are kept in insertion order, which doubles as the tie-break for
//! equal `z_index` values when the renderer asks for paint order.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::consts;
use crate::element::{Element, ElementId, ElementKind, PartialElement};

/// Source of fresh element identifiers, injected into the store so id
/// generation is uniform across every creation path.
pub trait IdProvider {
    /// Produce an id not yet used in this process.
    fn next_id(&mut self) -> ElementId;
}

/// Collision-resistant random ids (UUID v4). Production default.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&mut self) -> ElementId {
        Uuid::new_v4()
    }
}

/// Deterministic monotonic ids, for tests and replay.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> ElementId {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

/// In-memory store of canvas elements, in insertion order.
pub struct ElementStore {
    elements: Vec<Element>,
    ids: Box<dyn IdProvider>,
}

impl ElementStore {
    /// Create an empty store with random id generation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Box::new(RandomIds))
    }

    /// Create an empty store with an injected id source.
    #[must_use]
    pub fn with_ids(ids: Box<dyn IdProvider>) -> Self {
        Self { elements: Vec::new(), ids }
    }

    /// Create a new element of `kind` and add it to the store.
    ///
    /// The element starts from kind-appropriate defaults (text is 300×100,
    /// everything else 200×200; `z_index` is one past the current count),
    /// gains kind-specific style props not already present in `payload`
    /// (shape fill and variant, text color), and finally has `payload`
    /// overlaid on top, so explicit payload values always win.
    pub fn add(&mut self, kind: ElementKind, payload: &PartialElement) -> Element {
        let (width, height) = match kind {
            ElementKind::Text => (consts::TEXT_DEFAULT_WIDTH, consts::TEXT_DEFAULT_HEIGHT),
            ElementKind::Shape | ElementKind::Image => {
                (consts::ELEMENT_DEFAULT_WIDTH, consts::ELEMENT_DEFAULT_HEIGHT)
            }
        };

        let props = match kind {
            ElementKind::Text => serde_json::json!({
                "color": consts::TEXT_DEFAULT_COLOR,
            }),
            ElementKind::Shape => serde_json::json!({
                "background": consts::SHAPE_DEFAULT_BACKGROUND,
                "shape_type": consts::SHAPE_DEFAULT_TYPE,
            }),
            ElementKind::Image => serde_json::json!({}),
        };

        #[allow(clippy::cast_possible_wrap)]
        let z_index = self.elements.len() as i64 + 1;
        let mut element = Element {
            id: self.ids.next_id(),
            kind,
            x: consts::ELEMENT_DEFAULT_X,
            y: consts::ELEMENT_DEFAULT_Y,
            width,
            height,
            rotation: 0.0,
            z_index,
            opacity: 1.0,
            props,
        };
        element.apply(payload);

        self.elements.push(element.clone());
        element
    }

    /// Apply a sparse update to an existing element. Returns false if the
    /// element doesn't exist.
    pub fn update(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == *id) else {
            return false;
        };
        element.apply(partial);
        true
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == *id)?;
        Some(self.elements.remove(index))
    }

    /// Copy an existing element under a fresh id, nudged 20 world units down
    /// and right and stacked on top. Returns the copy, or `None` if `id` is
    /// not in the store.
    pub fn duplicate(&mut self, id: &ElementId) -> Option<Element> {
        let source = self.elements.iter().find(|e| e.id == *id)?;

        #[allow(clippy::cast_possible_wrap)]
        let z_index = self.elements.len() as i64 + 1;
        let mut copy = source.clone();
        copy.id = self.ids.next_id();
        copy.x += consts::DUPLICATE_OFFSET;
        copy.y += consts::DUPLICATE_OFFSET;
        copy.z_index = z_index;

        self.elements.push(copy.clone());
        Some(copy)
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// Whether an element with `id` is currently in the store.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| e.id == *id)
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// All elements sorted for draw order: ascending `z_index`, insertion
    /// order breaking ties.
    #[must_use]
    pub fn sorted_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort_by_key(|e| e.z_index);
        elements
    }

    /// Deep copy of the current collection, in insertion order. Later store
    /// mutations never affect a snapshot already taken.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// Replace the whole collection with a snapshot.
    pub fn restore(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Number of elements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}
