//! Shape element: one rectangle or ellipse, its style, and its resize handles.
//!
//! A [`Shape`] keeps its geometry exactly as the last move/resize produced it
//! and exposes the normalized form through [`Shape::bounds`]. Its [`Border`]
//! is rebuilt on every geometry change, so handle hit-boxes always track the
//! current bounds.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rect};
use crate::handle::{Border, Handle, HandleMetrics};
use crate::render::{self, Style, Surface};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Which outline a shape renders. Geometry is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    #[default]
    Rectangle,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
}

/// Persisted form of a shape: its kind plus the 4-field geometry record.
///
/// Records without a `kind` field load as rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(default)]
    pub kind: ShapeKind,
    #[serde(flatten)]
    pub geometry: Rect,
}

/// A placed (or provisional) shape on the canvas.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    geometry: Rect,
    style: Style,
    active_handle: Option<Handle>,
    border: Border,
}

impl Shape {
    /// Create a shape with the default style for its kind.
    #[must_use]
    pub fn new(kind: ShapeKind, geometry: Rect, metrics: HandleMetrics) -> Self {
        Self::with_style(kind, geometry, Style::for_kind(kind), metrics)
    }

    #[must_use]
    pub fn with_style(kind: ShapeKind, geometry: Rect, style: Style, metrics: HandleMetrics) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            geometry,
            style,
            active_handle: None,
            border: Border::new(geometry, metrics),
        }
    }

    /// Rebuild a shape from its persisted record.
    #[must_use]
    pub fn from_record(record: ShapeRecord, metrics: HandleMetrics) -> Self {
        Self::new(record.kind, record.geometry, metrics)
    }

    #[must_use]
    pub fn record(&self) -> ShapeRecord {
        ShapeRecord { kind: self.kind, geometry: self.geometry }
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Geometry as last written, possibly with negative extents.
    #[must_use]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Normalized geometry.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.geometry.normalized()
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.active_handle
    }

    #[must_use]
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// A committed shape must enclose a positive area.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.bounds().area() > 0.0
    }

    // --- Interaction ---

    /// Whether `p` interacts with this shape.
    ///
    /// A handle hit arms that handle for a following [`Shape::resize`]. A body
    /// hit leaves the shape untouched.
    pub fn hit_test(&mut self, p: Point) -> bool {
        if let Some(handle) = self.border.hit_test(p) {
            self.active_handle = Some(handle);
            return true;
        }
        self.bounds().contains_point(p)
    }

    /// Handle under `p` without arming it.
    #[must_use]
    pub fn handle_at(&self, p: Point) -> Option<Handle> {
        self.border.hit_test(p)
    }

    /// Whether `p` lies inside the shape's bounds.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains_point(p)
    }

    /// Place the normalized origin at `pointer - offset`, keeping the size.
    ///
    /// `offset` is the distance from the normalized origin to the initial
    /// click. The result is always normalized.
    pub fn move_to(&mut self, offset: Point, pointer: Point) {
        let origin = pointer - offset;
        self.set_geometry(Rect { x: origin.x, y: origin.y, ..self.bounds() });
    }

    /// Drag the armed handle to `pointer`.
    ///
    /// `reference` is the geometry captured when the drag started; the corner
    /// opposite the handle stays fixed. Dragging past that corner flips the
    /// shape. Returns `false` and leaves the shape alone when no handle is armed.
    pub fn resize(&mut self, reference: Rect, pointer: Point) -> bool {
        let Some(handle) = self.active_handle else {
            return false;
        };
        let c = reference.corners();
        let (moving, anchor) = match handle {
            Handle::TopLeft => (pointer, c.bottom_right),
            Handle::Top => (Point::new(c.top_left.x, pointer.y), c.bottom_right),
            Handle::TopRight => (pointer, c.bottom_left),
            Handle::Right => (Point::new(pointer.x, c.bottom_right.y), c.top_left),
            Handle::BottomRight => (pointer, c.top_left),
            Handle::Bottom => (Point::new(c.bottom_right.x, pointer.y), c.top_left),
            Handle::BottomLeft => (pointer, c.top_right),
            Handle::Left => (Point::new(pointer.x, c.top_left.y), c.bottom_right),
        };
        self.set_geometry(Rect::from_drag(anchor, moving));
        true
    }

    /// Drop the armed handle. Geometry is unchanged.
    pub fn deselect(&mut self) {
        self.active_handle = None;
    }

    /// Replace the geometry and rebuild the border.
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
        self.border.update(geometry);
    }

    /// Draw the shape; `focus` adds the handle boxes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn draw<S: Surface>(&self, surface: &mut S, focus: bool) -> Result<(), S::Error> {
        render::draw_shape(surface, self, focus)
    }
}
