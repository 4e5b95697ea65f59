use wasm_bindgen::prelude::*;

pub mod config;

/// Render the three-orbit stats scene under the element with id `mount_id`
/// and start the sweep animation.
#[wasm_bindgen]
pub fn showcase_start(mount_id: &str) -> Result<(), JsValue> {
    orbit_web::start_scene(mount_id, &config::scene_config())?;
    log::info!("showcase: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn showcase_stop() {
    orbit_web::stop_scene();
}
