//! Geometry primitives: points, axis-aligned rectangles, and inscribed ellipses.
//!
//! A [`Rect`] may be "raw" while a drag is in progress: dragging up or left
//! produces negative width or height. Every consumer that hit-tests, builds
//! handles, or renders works on [`Rect::normalized`], where `x`/`y` is the
//! top-left corner and both extents are non-negative.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rectangle geometry `{x, y, w, h}`.
///
/// Serializes as the plain 4-field record used by persisted shape lists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The four corners of a normalized rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Corners {
    /// Corners clockwise from the top-left.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A zero-sized rectangle at `p`.
    #[must_use]
    pub fn at(p: Point) -> Self {
        Self::new(p.x, p.y, 0.0, 0.0)
    }

    /// Rectangle spanned by a drag from `down` to `current`, already normalized.
    #[must_use]
    pub fn from_drag(down: Point, current: Point) -> Self {
        Self::new(down.x, down.y, current.x - down.x, current.y - down.y).normalized()
    }

    /// Canonical form: top-left origin and non-negative extents.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut out = self;
        if out.w < 0.0 {
            out.x += out.w;
            out.w = out.w.abs();
        }
        if out.h < 0.0 {
            out.y += out.h;
            out.h = out.h.abs();
        }
        out
    }

    /// Inclusive containment on every edge. Expects a normalized rectangle.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        (self.w * self.h).abs()
    }

    /// Corners of the normalized rectangle.
    #[must_use]
    pub fn corners(&self) -> Corners {
        let r = self.normalized();
        Corners {
            top_left: Point::new(r.x, r.y),
            top_right: Point::new(r.x + r.w, r.y),
            bottom_right: Point::new(r.x + r.w, r.y + r.h),
            bottom_left: Point::new(r.x, r.y + r.h),
        }
    }

    /// Square of half-size `half` centred on `center`.
    #[must_use]
    pub fn square_around(center: Point, half: f64) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }
}

/// Ellipse described by centre and radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    /// The ellipse inscribed in `rect` (normalized first).
    #[must_use]
    pub fn inscribed(rect: Rect) -> Self {
        let r = rect.normalized();
        let c = r.center();
        Self { cx: c.x, cy: c.y, rx: r.w / 2.0, ry: r.h / 2.0 }
    }
}
