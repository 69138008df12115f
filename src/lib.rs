//! Interactive shape editor for a 2D drawing surface.
//!
//! A user draws rectangles and ellipses by dragging on empty canvas, moves a
//! shape by dragging its body, and resizes it by dragging one of eight handles
//! around its bounding box. The crate owns the editing state and the drawing
//! logic; the host supplies pointer events, a per-frame tick, and a
//! [`render::Surface`] to draw on. With the `web` feature the crate binds to a
//! browser `<canvas>` and persists shapes to `localStorage`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Scene plus persistence, and the browser `Engine` under `web` |
//! | [`scene`] | Shape list, selection, and the pointer state machine |
//! | [`shape`] | A drawable shape with its border, hit-testing and resize |
//! | [`handle`] | The eight resize handles and their hit boxes |
//! | [`input`] | Tools, actions, gesture state, cursor hints and scene events |
//! | [`geom`] | Points, rectangles and ellipses |
//! | [`render`] | The `Surface` trait and all drawing code |
//! | [`store`] | Key/value persistence of the shape list |
//! | [`config`] | Editor configuration from defaults, env or JSON |
//! | [`consts`] | Shared numeric and color constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod handle;
pub mod input;
pub mod render;
pub mod scene;
pub mod shape;
pub mod store;

pub use config::EditorConfig;
pub use geom::{Point, Rect};
pub use input::{Action, Cursor, SceneEvent, Tool};
pub use scene::Scene;
pub use shape::{Shape, ShapeKind, ShapeRecord};
