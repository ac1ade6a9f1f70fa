pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match shared::config::read_site_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::log_level(&config));
    console_error_panic_hook::set_once();

    if let Some(err) = config_error {
        log::warn!("ignoring #site-config: {}", err);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
