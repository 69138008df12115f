//! Resize handles: the eight hit-boxes placed around a shape's padded bounds.
//!
//! A [`Border`] is derived from a shape's normalized geometry and rebuilt from
//! scratch whenever that geometry changes. Corner handles sit on the bounding
//! box corners pushed outward by the padding; edge handles sit the same
//! distance beyond each side's midpoint.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HANDLE_PADDING, HANDLE_SIZE};
use crate::geom::{Point, Rect};

/// One of the eight drag points on a shape's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    /// All handles in hit-test order. Earlier entries win when boxes overlap.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
    ];

    /// CSS cursor shown while hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
            Self::Top | Self::Bottom => "ns-resize",
            Self::Left | Self::Right => "ew-resize",
        }
    }

    /// Anchor point of this handle for the normalized `bounds`.
    #[must_use]
    pub fn anchor(self, bounds: Rect, padding: f64) -> Point {
        let Rect { x, y, w, h } = bounds;
        match self {
            Self::TopLeft => Point::new(x - padding, y - padding),
            Self::Top => Point::new(x + w / 2.0, y - padding),
            Self::TopRight => Point::new(x + w + padding, y - padding),
            Self::Right => Point::new(x + w + padding, y + h / 2.0),
            Self::BottomRight => Point::new(x + w + padding, y + h + padding),
            Self::Bottom => Point::new(x + w / 2.0, y + h + padding),
            Self::BottomLeft => Point::new(x - padding, y + h + padding),
            Self::Left => Point::new(x - padding, y + h / 2.0),
        }
    }
}

/// Placement metrics shared by every border in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMetrics {
    /// Distance from the bounding box to each handle anchor.
    pub padding: f64,
    /// Half the side length of each square hit-box.
    pub half_size: f64,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self { padding: HANDLE_PADDING, half_size: HANDLE_SIZE }
    }
}

/// A single handle's anchor and its square hit-box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBox {
    pub handle: Handle,
    pub anchor: Point,
    pub rect: Rect,
}

impl HandleBox {
    /// Corner points of the hit-box, clockwise from top-left, for outlining.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        self.rect.corners().points()
    }
}

/// The eight handle hit-boxes around a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    metrics: HandleMetrics,
    boxes: [HandleBox; 8],
}

impl Border {
    #[must_use]
    pub fn new(geometry: Rect, metrics: HandleMetrics) -> Self {
        Self { metrics, boxes: build_boxes(geometry, metrics) }
    }

    /// Rebuild every hit-box for new geometry.
    pub fn update(&mut self, geometry: Rect) {
        self.boxes = build_boxes(geometry, self.metrics);
    }

    /// The first handle (in [`Handle::ALL`] order) whose box contains `p`.
    #[must_use]
    pub fn hit_test(&self, p: Point) -> Option<Handle> {
        self.boxes
            .iter()
            .find(|b| b.rect.contains_point(p))
            .map(|b| b.handle)
    }

    #[must_use]
    pub fn boxes(&self) -> &[HandleBox; 8] {
        &self.boxes
    }

    #[must_use]
    pub fn get(&self, handle: Handle) -> &HandleBox {
        // `boxes` is built in `Handle::ALL` order, so the discriminant indexes it.
        &self.boxes[handle as usize]
    }
}

fn build_boxes(geometry: Rect, metrics: HandleMetrics) -> [HandleBox; 8] {
    let bounds = geometry.normalized();
    Handle::ALL.map(|handle| {
        let anchor = handle.anchor(bounds, metrics.padding);
        HandleBox { handle, anchor, rect: Rect::square_around(anchor, metrics.half_size) }
    })
}
