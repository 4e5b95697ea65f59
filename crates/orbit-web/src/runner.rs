// runner.rs
//
// Owns the one repeating interval that drives an animation run. The tick
// closure lives in the runner for as long as the interval can fire; the
// interval handle is cleared exactly once, either when every orbit settles
// or on external stop.

use orbit_engine::{AnimationDriver, OrbitScene, SceneConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::dom::DomTree;

/// Animation tick period in milliseconds.
pub const TICK_INTERVAL_MS: i32 = 100;

pub struct OrbitRunner {
    tree: DomTree,
    driver: AnimationDriver,
    interval_id: Option<i32>,
    /// Kept alive while the interval exists; dropping it would invalidate
    /// the JS callback.
    _tick_closure: Option<Closure<dyn FnMut()>>,
}

impl OrbitRunner {
    /// Build the scene under the element with id `mount_id`.
    pub fn create(mount_id: &str, config: &SceneConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let mount_element = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {mount_id:?}")))?;

        let mut tree = DomTree::new(document);
        let mount = tree.adopt(mount_element);
        let scene = OrbitScene::create(&mut tree, mount, config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            tree,
            driver: AnimationDriver::new(scene),
            interval_id: None,
            _tick_closure: None,
        })
    }

    /// Adopt the scheduled interval. Called once right after scheduling.
    pub fn set_interval(&mut self, id: i32, closure: Closure<dyn FnMut()>) {
        self.interval_id = Some(id);
        self._tick_closure = Some(closure);
    }

    /// Run one tick; cancels the interval the first time the driver reports
    /// every orbit settled.
    pub fn tick(&mut self) {
        if !self.driver.tick(&mut self.tree) {
            self.cancel();
        }
    }

    /// Clear the interval if it is still scheduled. The closure stays
    /// allocated (it may be the code currently executing) and is freed when
    /// the runner is dropped.
    pub fn cancel(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
            log::info!("orbits: interval cleared");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.driver.is_finished()
    }
}
