mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{AppConfig, MOUNT_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    utils::logger::init(config.ui.log_level());
    if let Some(err) = config_error {
        log::warn!("invalid config.toml, using defaults: {err}");
    }
    log::info!("backend at {}", config.backend.api_base);

    let Some(root) = document().get_element_by_id(MOUNT_ELEMENT_ID) else {
        log::error!("missing #{MOUNT_ELEMENT_ID} element");
        return;
    };
    let root = root.unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
