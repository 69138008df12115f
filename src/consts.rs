//! Shared numeric constants and default colors for the editor.

// ── Handles ─────────────────────────────────────────────────────

/// Distance from the shape's bounding box to each handle anchor.
pub const HANDLE_PADDING: f64 = 20.0;

/// Half the side length of a handle hit-box.
pub const HANDLE_SIZE: f64 = 10.0;

// ── Grid ────────────────────────────────────────────────────────

/// Default spacing between grid lines on both axes.
pub const GRID_SIZE: f64 = HANDLE_SIZE * 5.0;

// ── Colors ──────────────────────────────────────────────────────

/// Stroke for rectangle shapes.
pub const RECTANGLE_STROKE: &str = "#f7a400";

/// Stroke for ellipse shapes.
pub const ELLIPSE_STROKE: &str = "blue";

/// Outline of the handle hit-boxes around a focused shape.
pub const BORDER_STROKE: &str = "#8f3b76";

/// Fill for the handle currently being dragged.
pub const ACTIVE_HANDLE_FILL: &str = "red";

/// Centre cross-hair guide.
pub const GUIDE_CENTER_STROKE: &str = "blue";

/// Line from the pointer-down point to the current pointer.
pub const GUIDE_LINK_STROKE: &str = "#0040ff";

/// Line from the viewport centre to the pointer-down point.
pub const GUIDE_DOWN_STROKE: &str = "#ff0000";

/// Line from the viewport centre to the current pointer.
pub const GUIDE_MOVE_STROKE: &str = "#00b341";

/// Background grid lines.
pub const GRID_STROKE: &str = "#e5e5e5";

// ── Storage ─────────────────────────────────────────────────────

/// Default key under which committed shapes are persisted.
pub const DEFAULT_STORAGE_KEY: &str = "shapes";
