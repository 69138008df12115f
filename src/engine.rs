#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::EditorConfig;
use crate::geom::Point;
use crate::input::{Cursor, SceneEvent, Tool};
use crate::scene::Scene;
use crate::shape::ShapeKind;
use crate::store::{KeyValueStore, ShapeStore, StoreError};

/// Core engine state: the scene plus its persistence, without any canvas.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore<B> {
    pub scene: Scene,
    store: Option<ShapeStore<B>>,
}

impl<B: KeyValueStore> EngineCore<B> {
    /// Build a scene from `config` with no persistence.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { scene: Scene::new(config), store: None }
    }

    /// Build a scene from `config` and hydrate it from `backend`.
    #[must_use]
    pub fn with_store(config: EditorConfig, backend: B) -> Self {
        let store = ShapeStore::new(backend, config.storage_key.clone());
        let mut scene = Scene::new(config);
        scene.load(store.load());
        Self { scene, store: Some(store) }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, p: Point) -> Vec<SceneEvent> {
        self.scene.pointer_down(p)
    }

    pub fn on_pointer_move(&mut self, p: Point) {
        self.scene.pointer_move(p);
    }

    /// Finish the gesture and persist the shape list if it changed.
    pub fn on_pointer_up(&mut self) -> Vec<SceneEvent> {
        let events = self.scene.pointer_up();
        if events.iter().any(SceneEvent::changes_shapes) {
            if let Err(e) = self.save() {
                tracing::warn!(error = %e, "failed to persist shapes");
            }
        }
        events
    }

    // --- Tool ---

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.scene.set_kind(kind);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.scene.set_tool(tool);
    }

    // --- Persistence ---

    /// Write every committed shape to the store. No-op without a store.
    ///
    /// # Errors
    ///
    /// Returns the store's error if serialization or the backend write fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let Some(store) = self.store.as_mut() else {
            return Ok(());
        };
        store.save(&self.scene.records())
    }

    #[must_use]
    pub fn store(&self) -> Option<&ShapeStore<B>> {
        self.store.as_ref()
    }

    // --- Queries ---

    #[must_use]
    pub fn cursor_at(&self, p: Point) -> Cursor {
        self.scene.cursor_at(p)
    }
}

#[cfg(feature = "web")]
pub use web::Engine;

#[cfg(feature = "web")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::EngineCore;
    use crate::config::EditorConfig;
    use crate::geom::Point;
    use crate::input::{Cursor, SceneEvent, Tool};
    use crate::shape::ShapeKind;
    use crate::store::LocalStorage;

    /// The full canvas engine. Wraps `EngineCore` and owns the browser canvas.
    pub struct Engine {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        pub core: EngineCore<LocalStorage>,
    }

    impl Engine {
        /// Bind to `canvas`, configure from `config`, and load persisted shapes.
        /// Without `localStorage` the engine runs unpersisted.
        ///
        /// # Errors
        ///
        /// Returns `Err` if the canvas has no 2D context.
        pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, JsValue> {
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()?;

            let mut core = match LocalStorage::open() {
                Ok(storage) => EngineCore::with_store(config, storage),
                Err(e) => {
                    tracing::warn!(error = %e, "localStorage unavailable; shapes will not persist");
                    EngineCore::new(config)
                }
            };
            core.scene.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));

            Ok(Self { canvas, ctx, core })
        }

        // --- Delegated input events ---

        pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Vec<SceneEvent> {
            self.core.on_pointer_down(Point::new(x, y))
        }

        pub fn on_pointer_move(&mut self, x: f64, y: f64) {
            self.core.on_pointer_move(Point::new(x, y));
        }

        pub fn on_pointer_up(&mut self) -> Vec<SceneEvent> {
            self.core.on_pointer_up()
        }

        pub fn set_kind(&mut self, kind: ShapeKind) {
            self.core.set_kind(kind);
        }

        pub fn set_tool(&mut self, tool: Tool) {
            self.core.set_tool(tool);
        }

        /// Track a resized canvas element.
        pub fn resize(&mut self) {
            let (w, h) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
            self.core.scene.set_viewport(w, h);
        }

        // --- Render ---

        /// One animation tick: apply pending pointer input, then redraw.
        ///
        /// # Errors
        ///
        /// Returns `Err` if a canvas call fails.
        pub fn frame(&mut self) -> Result<(), JsValue> {
            self.core.scene.update();
            self.core.scene.draw(&mut self.ctx)
        }

        // --- Delegated queries ---

        #[must_use]
        pub fn cursor_at(&self, x: f64, y: f64) -> Cursor {
            self.core.cursor_at(Point::new(x, y))
        }
    }
}
