pub mod notifications;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = notifications::dom::bind_tabs() {
        log::error!("failed to bind notification tabs: {:?}", err);
    }
}
