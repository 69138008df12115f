//! Scene: the shape list, the selection, and the pointer-driven state machine.
//!
//! DESIGN
//! ======
//! Pointer handlers only record state: `pointer_down` decides the action and
//! captures reference geometry, `pointer_move` stores the latest pointer, and
//! `pointer_up` commits or discards. Geometry is recomputed in `update`, which
//! the host calls once per frame before `draw`, so the work is throttled to
//! the render loop rather than the raw event rate.
//!
//! The scene is the only writer of its shapes. Callers get shared references
//! and plain [`SceneEvent`]s; UI bindings are layered on top by the host.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::config::EditorConfig;
use crate::geom::{Point, Rect};
use crate::input::{Action, Cursor, InputState, SceneEvent, Tool};
use crate::render::{self, Surface};
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeRecord};

pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    input: InputState,
    pointer_move: Option<Point>,
    tool: Tool,
    config: EditorConfig,
    viewport: Option<(f64, f64)>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Scene {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            input: InputState::Idle,
            pointer_move: None,
            tool: Tool::Draw(config.default_kind),
            config,
            viewport: None,
        }
    }

    // --- Configuration ---

    /// Switch to drawing `kind` on the next drag over empty canvas.
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.set_tool(Tool::Draw(kind));
    }

    /// Choose the active tool. Takes effect on the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        tracing::debug!(?tool, "tool changed");
        self.tool = tool;
    }

    /// Viewport size in canvas units, used for centre guide lines.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Some((width, height));
    }

    /// Replace all shapes with persisted records. Records without area are
    /// skipped. Any gesture in progress is abandoned.
    pub fn load(&mut self, records: Vec<ShapeRecord>) {
        let metrics = self.config.metrics();
        let total = records.len();
        self.shapes = records
            .into_iter()
            .map(|r| Shape::from_record(r, metrics))
            .filter(Shape::is_valid)
            .collect();
        self.selected = None;
        self.input = InputState::Idle;
        self.pointer_move = None;
        tracing::debug!(loaded = self.shapes.len(), skipped = total - self.shapes.len(), "scene loaded");
    }

    // --- Pointer events ---

    /// Start a gesture at `p`: resize or move the first shape hit. On empty
    /// canvas a draw tool starts a new shape; the select tool only clears the
    /// selection.
    pub fn pointer_down(&mut self, p: Point) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        let previous = self.selected;

        if let Some(shape) = self.selected_shape_mut() {
            shape.deselect();
        }
        self.selected = None;

        // A Create that never saw pointer-up is superseded here.
        self.input = InputState::Idle;
        self.pointer_move = None;

        if let Some(idx) = self.shapes.iter_mut().position(|s| s.hit_test(p)) {
            let shape = &self.shapes[idx];
            let id = shape.id();
            let reference = shape.bounds();
            self.input = if shape.active_handle().is_some() {
                InputState::Resizing { id, down: p, reference }
            } else {
                InputState::Moving { id, down: p, reference }
            };
            self.selected = Some(id);
        } else if let Some(kind) = self.tool.kind() {
            let shape = Shape::new(kind, Rect::at(p), self.config.metrics());
            self.input = InputState::Creating { down: p, shape };
        }

        if self.input.is_idle() {
            tracing::debug!(x = p.x, y = p.y, "pointer down on empty canvas with select tool");
        } else {
            let action = self.input.action();
            tracing::debug!(?action, x = p.x, y = p.y, "pointer down");
            events.push(SceneEvent::ActionChanged(action));
        }
        if self.selected != previous {
            events.push(SceneEvent::SelectionChanged(self.selected));
        }
        events
    }

    /// Record the pointer position. Ignored unless a pointer is down.
    pub fn pointer_move(&mut self, p: Point) {
        if !self.input.is_idle() {
            self.pointer_move = Some(p);
        }
    }

    /// Finish the gesture: commit a valid new shape, or settle a move/resize.
    pub fn pointer_up(&mut self) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        let input = std::mem::take(&mut self.input);
        self.pointer_move = None;

        if input.action() != Action::Create {
            events.push(SceneEvent::ActionChanged(Action::Create));
        }

        match input {
            InputState::Idle => {}
            InputState::Creating { shape, .. } => {
                if shape.is_valid() {
                    let id = shape.id();
                    let geometry = shape.geometry();
                    tracing::debug!(%id, ?geometry, "shape committed");
                    self.shapes.push(shape);
                    events.push(SceneEvent::ShapeCommitted { id, geometry });
                } else {
                    tracing::debug!("zero-area shape discarded");
                    events.push(SceneEvent::ShapeDiscarded);
                }
                if self.selected.take().is_some() {
                    events.push(SceneEvent::SelectionChanged(None));
                }
            }
            InputState::Moving { id, reference, .. } | InputState::Resizing { id, reference, .. } => {
                if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
                    shape.deselect();
                    let geometry = shape.geometry();
                    if shape.bounds() != reference {
                        tracing::debug!(%id, ?geometry, "shape updated");
                        events.push(SceneEvent::ShapeUpdated { id, geometry });
                    }
                }
            }
        }
        events
    }

    // --- Frame ---

    /// Apply the latest pointer position to the active gesture. Returns
    /// whether any geometry changed.
    pub fn update(&mut self) -> bool {
        let Some(current) = self.pointer_move else {
            return false;
        };

        match &mut self.input {
            InputState::Idle => false,
            InputState::Creating { down, shape } => {
                let next = Rect::from_drag(*down, current);
                let changed = next != shape.geometry();
                shape.set_geometry(next);
                changed
            }
            InputState::Moving { id, down, reference } => {
                let offset = *down - reference.origin();
                let id = *id;
                self.shapes.iter_mut().find(|s| s.id() == id).is_some_and(|shape| {
                    let before = shape.bounds();
                    shape.move_to(offset, current);
                    shape.bounds() != before
                })
            }
            InputState::Resizing { id, reference, .. } => {
                let (id, reference) = (*id, *reference);
                self.shapes.iter_mut().find(|s| s.id() == id).is_some_and(|shape| {
                    let before = shape.bounds();
                    shape.resize(reference, current) && shape.bounds() != before
                })
            }
        }
    }

    /// Draw the scene onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, self)
    }

    // --- Queries ---

    /// Cursor hint for hovering at `p`. Does not arm any handle.
    #[must_use]
    pub fn cursor_at(&self, p: Point) -> Cursor {
        for shape in &self.shapes {
            if let Some(handle) = shape.handle_at(p) {
                return Cursor::Resize(handle);
            }
            if shape.contains(p) {
                return Cursor::Move;
            }
        }
        match self.tool {
            Tool::Select => Cursor::Default,
            Tool::Draw(_) => Cursor::Crosshair,
        }
    }

    /// Committed shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    #[must_use]
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape(id))
    }

    /// The shape being created, while a Create gesture is in progress.
    #[must_use]
    pub fn provisional(&self) -> Option<&Shape> {
        match &self.input {
            InputState::Creating { shape, .. } => Some(shape),
            _ => None,
        }
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.input.action()
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Kind drawn on empty canvas; `None` under the select tool.
    #[must_use]
    pub fn kind(&self) -> Option<ShapeKind> {
        self.tool.kind()
    }

    /// Where the active gesture started.
    #[must_use]
    pub fn down_point(&self) -> Option<Point> {
        self.input.down()
    }

    /// Latest pointer position recorded during the active gesture.
    #[must_use]
    pub fn move_point(&self) -> Option<Point> {
        self.pointer_move
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Option<(f64, f64)> {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Persistable records for every committed shape, in order.
    #[must_use]
    pub fn records(&self) -> Vec<ShapeRecord> {
        self.shapes.iter().map(Shape::record).collect()
    }

    fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.shapes.iter_mut().find(|s| s.id() == id)
    }
}
