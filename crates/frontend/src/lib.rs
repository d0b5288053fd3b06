pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::BrowserConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the configured level is applied below
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = BrowserConfig::from_location();
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("pipeline browser starting, api base '{}'", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
