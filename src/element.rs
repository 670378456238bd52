//! Element model: drawable units, their properties, and sparse updates.
//!
//! This module defines the core data types that describe what is on the
//! canvas (`Element`, `ElementKind`), a sparse-update type for incremental
//! edits (`PartialElement`), and a typed accessor for the open-ended `props`
//! JSON bag (`Props`).
//!
//! Data flows into this layer from the host (payloads handed to the engine,
//! including AI-generated text and image references) and out to the host's
//! renderer, which reads elements in paint order from the store.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts;

/// Unique identifier for a canvas element.
pub type ElementId = Uuid;

/// The kind of a canvas element. Fixed at creation; an element never changes
/// kind afterwards (`PartialElement` carries no kind field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Editable text block.
    Text,
    /// Filled shape; the variant (rectangle, ellipse, ...) lives in `props`.
    Shape,
    /// Bitmap image referenced by a self-describing source string.
    Image,
}

/// A canvas element as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Drawable kind; determines which `props` keys are meaningful.
    pub kind: ElementKind,
    /// Left edge of the bounding box in world coordinates.
    pub x: f64,
    /// Top edge of the bounding box in world coordinates.
    pub y: f64,
    /// Width of the bounding box in world coordinates.
    pub width: f64,
    /// Height of the bounding box in world coordinates.
    pub height: f64,
    /// Clockwise rotation in degrees around the bounding-box center.
    pub rotation: f64,
    /// Stacking order; lower values are drawn beneath higher values. Ties are
    /// broken by insertion order.
    pub z_index: i64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Open-ended per-kind properties (color, background, shape type, text
    /// content, image source, etc.).
    pub props: serde_json::Value,
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialElement {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// New opacity, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

impl Element {
    /// Merge a sparse update into this element. Additive: absent fields are
    /// untouched, a non-object `props` value is ignored, and `null` props
    /// values delete their keys.
    pub fn apply(&mut self, partial: &PartialElement) {
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(w) = partial.width {
            self.width = w;
        }
        if let Some(h) = partial.height {
            self.height = h;
        }
        if let Some(r) = partial.rotation {
            self.rotation = r;
        }
        if let Some(z) = partial.z_index {
            self.z_index = z;
        }
        if let Some(o) = partial.opacity {
            self.opacity = o;
        }
        if let Some(ref props) = partial.props {
            let Some(incoming) = props.as_object() else {
                return;
            };

            if !self.props.is_object() {
                self.props = serde_json::json!({});
            }

            if let Some(existing) = self.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
    }
}

/// Typed access to common props fields from an `Element.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Text color as a CSS color string. Defaults to the dark-slate text
    /// color when absent.
    #[must_use]
    pub fn color(&self) -> &str {
        self.value
            .get("color")
            .and_then(|v| v.as_str())
            .unwrap_or(consts::TEXT_DEFAULT_COLOR)
    }

    /// Fill color as a CSS color string. Defaults to the slate shape fill
    /// when absent.
    #[must_use]
    pub fn background(&self) -> &str {
        self.value
            .get("background")
            .and_then(|v| v.as_str())
            .unwrap_or(consts::SHAPE_DEFAULT_BACKGROUND)
    }

    /// Shape variant name. Defaults to `"rectangle"` when absent.
    #[must_use]
    pub fn shape_type(&self) -> &str {
        self.value
            .get("shape_type")
            .and_then(|v| v.as_str())
            .unwrap_or(consts::SHAPE_DEFAULT_TYPE)
    }

    /// Text content displayed on the element. Empty string when absent.
    #[must_use]
    pub fn content(&self) -> &str {
        self.value
            .get("content")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Image source reference (a self-describing embedded bitmap string).
    /// Empty string when absent.
    #[must_use]
    pub fn source(&self) -> &str {
        self.value
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
