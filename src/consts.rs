//! Shared defaults for new elements.

// ── Geometry ────────────────────────────────────────────────────

/// Default width for a new text element.
pub const TEXT_DEFAULT_WIDTH: f64 = 300.0;

/// Default height for a new text element.
pub const TEXT_DEFAULT_HEIGHT: f64 = 100.0;

/// Default width for a new shape or image element.
pub const ELEMENT_DEFAULT_WIDTH: f64 = 200.0;

/// Default height for a new shape or image element.
pub const ELEMENT_DEFAULT_HEIGHT: f64 = 200.0;

/// Default drop position for a new element, in world coordinates.
pub const ELEMENT_DEFAULT_X: f64 = 100.0;

/// Default drop position for a new element, in world coordinates.
pub const ELEMENT_DEFAULT_Y: f64 = 100.0;

/// Offset applied to both axes when duplicating an element, so the copy is
/// visibly distinct from its source.
pub const DUPLICATE_OFFSET: f64 = 20.0;

// ── Style ───────────────────────────────────────────────────────

/// Default fill for a new shape element (slate-400).
pub const SHAPE_DEFAULT_BACKGROUND: &str = "#94A3B8";

/// Default shape variant for a new shape element.
pub const SHAPE_DEFAULT_TYPE: &str = "rectangle";

/// Default text color for a new text element (dark slate).
pub const TEXT_DEFAULT_COLOR: &str = "#1E293B";
