//! Browser entry point: panic hook, console logging, mount.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting Pass Lab site");

    leptos::mount::mount_to_body(App);
}
