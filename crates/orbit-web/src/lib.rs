pub mod dom;
pub mod runner;

pub use dom::DomTree;
pub use runner::{OrbitRunner, TICK_INTERVAL_MS};

use std::cell::RefCell;

use orbit_engine::SceneConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static RUNNER: RefCell<Option<OrbitRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut OrbitRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Build a scene under `mount_id` and start its interval timer. A previous
/// run, if any, is cancelled first.
pub fn start_scene(mount_id: &str, config: &SceneConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    stop_scene();

    let runner = OrbitRunner::create(mount_id, config)?;
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    let closure = Closure::wrap(Box::new(|| {
        with_runner(|r| r.tick());
    }) as Box<dyn FnMut()>);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TICK_INTERVAL_MS,
    )?;
    with_runner(|r| r.set_interval(id, closure));

    log::info!("orbits: started under #{mount_id}, tick every {TICK_INTERVAL_MS} ms");
    Ok(())
}

/// Cancel the current run and drop its runner.
pub fn stop_scene() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.cancel();
        }
    });
}

#[wasm_bindgen]
pub fn orbits_start(mount_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config =
        SceneConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_scene(mount_id, &config)
}

#[wasm_bindgen]
pub fn orbits_stop() {
    stop_scene();
}
