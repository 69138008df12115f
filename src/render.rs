//! Rendering: draws the scene onto a [`Surface`].
//!
//! This module is the only place that issues drawing calls. It receives
//! read-only views of the scene and its shapes and produces pixels. It never
//! mutates editor state.
//!
//! All fallible surface calls propagate errors via `Result<(), S::Error>`.
//! With the `web` feature, [`web_sys::CanvasRenderingContext2d`] implements
//! [`Surface`] with `JsValue` errors.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::GridConfig;
use crate::consts::{
    ACTIVE_HANDLE_FILL, BORDER_STROKE, ELLIPSE_STROKE, GRID_STROKE, GUIDE_CENTER_STROKE, GUIDE_DOWN_STROKE,
    GUIDE_LINK_STROKE, GUIDE_MOVE_STROKE, RECTANGLE_STROKE,
};
use crate::geom::{Ellipse, Point, Rect};
use crate::scene::Scene;
use crate::shape::{Shape, ShapeKind};

/// Stroke and fill colors for a drawing call. `None` skips that pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    /// Stroke with a dash pattern instead of a solid line.
    pub dashed: bool,
}

impl Style {
    #[must_use]
    pub fn stroked(color: &str) -> Self {
        Self { stroke: Some(color.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn filled(color: &str) -> Self {
        Self { fill: Some(color.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    /// Default style for newly created shapes of `kind`.
    #[must_use]
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::stroked(RECTANGLE_STROKE),
            ShapeKind::Ellipse => Self::stroked(ELLIPSE_STROKE),
        }
    }
}

/// A 2D drawing target supplied by the host.
pub trait Surface {
    type Error;

    /// Erase everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface cannot be cleared.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill and/or stroke an axis-aligned rectangle.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if drawing fails.
    fn rect(&mut self, rect: Rect, style: &Style) -> Result<(), Self::Error>;

    /// Fill and/or stroke an ellipse.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if drawing fails.
    fn ellipse(&mut self, ellipse: Ellipse, style: &Style) -> Result<(), Self::Error>;

    /// Fill and/or stroke the closed polygon through `points`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if drawing fails.
    fn polyline(&mut self, points: &[Point], style: &Style) -> Result<(), Self::Error>;

    /// Stroke a single segment.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if drawing fails.
    fn line(&mut self, from: Point, to: Point, style: &Style) -> Result<(), Self::Error>;
}

/// Draw the full scene: grid, guides, committed shapes, then the shape being
/// created.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene) -> Result<(), S::Error> {
    surface.clear()?;

    let grid = scene.config().grid;
    if let (true, Some(viewport)) = (grid.visible, scene.viewport()) {
        draw_grid(surface, viewport, grid)?;
    }

    if scene.config().guide_lines {
        draw_guides(surface, scene.viewport(), scene.down_point(), scene.move_point())?;
    }

    let selected = scene.selected();
    for shape in scene.shapes() {
        draw_shape(surface, shape, selected == Some(shape.id()))?;
    }

    if let Some(provisional) = scene.provisional() {
        draw_shape(surface, provisional, false)?;
    }

    Ok(())
}

// =============================================================
// Shapes
// =============================================================

/// Draw one shape, plus its handle boxes when `focus` is set.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, focus: bool) -> Result<(), S::Error> {
    if focus {
        draw_border(surface, shape)?;
    }

    match shape.kind() {
        ShapeKind::Rectangle => surface.rect(shape.bounds(), shape.style()),
        ShapeKind::Ellipse => {
            let ellipse = Ellipse::inscribed(shape.bounds());
            if ellipse.rx <= 0.0 || ellipse.ry <= 0.0 {
                return Ok(());
            }
            surface.ellipse(ellipse, shape.style())
        }
    }
}

fn draw_border<S: Surface>(surface: &mut S, shape: &Shape) -> Result<(), S::Error> {
    let outline = Style::stroked(BORDER_STROKE);
    for hb in shape.border().boxes() {
        surface.polyline(&hb.points(), &outline)?;
    }

    if let Some(active) = shape.active_handle() {
        let hb = shape.border().get(active);
        surface.polyline(&hb.points(), &Style::filled(ACTIVE_HANDLE_FILL))?;
    }
    Ok(())
}

// =============================================================
// Guides
// =============================================================

/// Vertical lines every `grid.horizontal_size` and horizontal lines every
/// `grid.vertical_size`, starting at the viewport origin.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_grid<S: Surface>(surface: &mut S, viewport: (f64, f64), grid: GridConfig) -> Result<(), S::Error> {
    let (w, h) = viewport;
    let style = Style::stroked(GRID_STROKE);

    for x in grid_offsets(grid.horizontal_size, w) {
        surface.line(Point::new(x, 0.0), Point::new(x, h), &style)?;
    }
    for y in grid_offsets(grid.vertical_size, h) {
        surface.line(Point::new(0.0, y), Point::new(w, y), &style)?;
    }
    Ok(())
}

/// Multiples of `step` in `0..=extent`. Empty for a non-positive step.
fn grid_offsets(step: f64, extent: f64) -> impl Iterator<Item = f64> {
    let usable = step.is_finite() && step > 0.0;
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(move |&v| usable && v <= extent)
}

/// Centre cross-hair plus lines tracing the current drag.
///
/// The cross-hair and centre lines need the viewport size; the down→move
/// link needs both pointer positions.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_guides<S: Surface>(
    surface: &mut S,
    viewport: Option<(f64, f64)>,
    down: Option<Point>,
    current: Option<Point>,
) -> Result<(), S::Error> {
    let center = viewport.map(|(w, h)| Point::new(w / 2.0, h / 2.0));

    if let (Some((w, h)), Some(c)) = (viewport, center) {
        let style = Style::stroked(GUIDE_CENTER_STROKE).dashed();
        surface.line(Point::new(0.0, c.y), Point::new(w, c.y), &style)?;
        surface.line(Point::new(c.x, 0.0), Point::new(c.x, h), &style)?;
    }

    let (Some(down), Some(current)) = (down, current) else {
        return Ok(());
    };

    surface.line(down, current, &Style::stroked(GUIDE_LINK_STROKE))?;
    if let Some(c) = center {
        surface.line(c, down, &Style::stroked(GUIDE_DOWN_STROKE))?;
        surface.line(c, current, &Style::stroked(GUIDE_MOVE_STROKE))?;
    }
    Ok(())
}

// =============================================================
// Browser canvas
// =============================================================

#[cfg(feature = "web")]
mod canvas2d {
    use std::f64::consts::PI;

    use wasm_bindgen::JsValue;
    use web_sys::CanvasRenderingContext2d;

    use super::{Style, Surface};
    use crate::geom::{Ellipse, Point, Rect};

    /// Dash segment length in CSS pixels.
    const DASH_PX: f64 = 6.0;

    impl Surface for CanvasRenderingContext2d {
        type Error = JsValue;

        fn clear(&mut self) -> Result<(), JsValue> {
            if let Some(canvas) = self.canvas() {
                self.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            }
            Ok(())
        }

        fn rect(&mut self, rect: Rect, style: &Style) -> Result<(), JsValue> {
            self.save();
            apply_style(self, style)?;
            if style.fill.is_some() {
                self.fill_rect(rect.x, rect.y, rect.w, rect.h);
            }
            if style.stroke.is_some() {
                self.stroke_rect(rect.x, rect.y, rect.w, rect.h);
            }
            self.restore();
            Ok(())
        }

        fn ellipse(&mut self, ellipse: Ellipse, style: &Style) -> Result<(), JsValue> {
            self.save();
            apply_style(self, style)?;
            self.begin_path();
            CanvasRenderingContext2d::ellipse(self, ellipse.cx, ellipse.cy, ellipse.rx, ellipse.ry, 0.0, 0.0, 2.0 * PI)?;
            paint(self, style);
            self.restore();
            Ok(())
        }

        fn polyline(&mut self, points: &[Point], style: &Style) -> Result<(), JsValue> {
            let Some((first, rest)) = points.split_first() else {
                return Ok(());
            };
            self.save();
            apply_style(self, style)?;
            self.begin_path();
            self.move_to(first.x, first.y);
            for p in rest {
                self.line_to(p.x, p.y);
            }
            self.close_path();
            paint(self, style);
            self.restore();
            Ok(())
        }

        fn line(&mut self, from: Point, to: Point, style: &Style) -> Result<(), JsValue> {
            self.save();
            apply_style(self, style)?;
            self.begin_path();
            self.move_to(from.x, from.y);
            self.line_to(to.x, to.y);
            self.stroke();
            self.restore();
            Ok(())
        }
    }

    fn apply_style(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
        let dash = js_sys::Array::new();
        if style.dashed {
            dash.push(&DASH_PX.into());
            dash.push(&DASH_PX.into());
        }
        ctx.set_line_dash(&dash)?;
        ctx.set_line_width(1.0);
        if let Some(fill) = &style.fill {
            ctx.set_fill_style_str(fill);
        }
        if let Some(stroke) = &style.stroke {
            ctx.set_stroke_style_str(stroke);
        }
        Ok(())
    }

    /// Fill then stroke the current path according to `style`.
    fn paint(ctx: &CanvasRenderingContext2d, style: &Style) {
        if style.fill.is_some() {
            ctx.fill();
        }
        if style.stroke.is_some() {
            ctx.stroke();
        }
    }
}
