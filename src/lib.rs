//! Interactive particle portrait for a portfolio hero section.
//!
//! `core` is host-independent and builds everywhere; the rest is the browser
//! front-end and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod asset;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use mount::ParticlePortrait;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portrait-particles ready");
    Ok(())
}
