//! Input model: the action being performed, the gesture state machine, and the
//! events and cursor hints handed back to the host.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. Each variant carries the context needed to recompute geometry
//! on every frame and to commit or discard the result on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};
use crate::handle::Handle;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// The tool chosen in the host's tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Pick, move and resize shapes. A press on empty canvas only clears the
    /// selection.
    Select,
    /// Same as `Select` over shapes; a press on empty canvas draws a new shape
    /// of this kind.
    Draw(ShapeKind),
}

impl Default for Tool {
    fn default() -> Self {
        Self::Draw(ShapeKind::default())
    }
}

impl Tool {
    /// Kind of shape a drag on empty canvas creates, if any.
    #[must_use]
    pub fn kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Draw(kind) => Some(kind),
        }
    }
}

/// What the current (or next) drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Draw a new shape. Also the resting state between gestures.
    #[default]
    Create,
    /// Translate the selected shape.
    Move,
    /// Drag one of the selected shape's handles.
    Resize,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No pointer is down.
    #[default]
    Idle,
    /// The user is drawing a new shape from `down`.
    Creating {
        /// Where the pointer went down; the fixed corner of the drag.
        down: Point,
        /// The provisional shape, committed on release if it has area.
        shape: Shape,
    },
    /// The user is moving an existing shape.
    Moving {
        /// Id of the shape being moved.
        id: ShapeId,
        /// Where the pointer went down.
        down: Point,
        /// Normalized geometry at pointer-down.
        reference: Rect,
    },
    /// The user is resizing an existing shape by one of its handles.
    Resizing {
        /// Id of the shape being resized.
        id: ShapeId,
        /// Where the pointer went down.
        down: Point,
        /// Normalized geometry at pointer-down; its corners are the resize anchors.
        reference: Rect,
    },
}

impl InputState {
    /// The action this gesture performs. `Idle` reports `Create`.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Idle | Self::Creating { .. } => Action::Create,
            Self::Moving { .. } => Action::Move,
            Self::Resizing { .. } => Action::Resize,
        }
    }

    /// Where the pointer went down, if a gesture is active.
    #[must_use]
    pub fn down(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Creating { down, .. } | Self::Moving { down, .. } | Self::Resizing { down, .. } => Some(*down),
        }
    }

    /// Geometry captured at pointer-down for move/resize gestures.
    #[must_use]
    pub fn reference(&self) -> Option<Rect> {
        match self {
            Self::Moving { reference, .. } | Self::Resizing { reference, .. } => Some(*reference),
            Self::Idle | Self::Creating { .. } => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Cursor hint for the host while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Empty canvas under the select tool: a press here clears the selection.
    Default,
    /// Empty canvas under a draw tool: a drag here creates a shape.
    Crosshair,
    /// Over a shape body: a drag here moves it.
    Move,
    /// Over a handle: a drag here resizes.
    Resize(Handle),
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Crosshair => "crosshair",
            Self::Move => "move",
            Self::Resize(handle) => handle.cursor(),
        }
    }
}

/// Notifications returned from pointer handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The scene entered a new action.
    ActionChanged(Action),
    /// The selected shape changed (or was cleared).
    SelectionChanged(Option<ShapeId>),
    /// A provisional shape was appended to the shape list.
    ShapeCommitted { id: ShapeId, geometry: Rect },
    /// A provisional shape without area was dropped.
    ShapeDiscarded,
    /// A committed shape was moved or resized.
    ShapeUpdated { id: ShapeId, geometry: Rect },
}

impl SceneEvent {
    /// Whether the committed shape list changed and should be persisted.
    #[must_use]
    pub fn changes_shapes(&self) -> bool {
        matches!(self, Self::ShapeCommitted { .. } | Self::ShapeUpdated { .. })
    }
}
