pub mod app;
pub mod dom;
pub mod layout;
pub mod nav;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();
    log::set_max_level(log::LevelFilter::Debug);
}
