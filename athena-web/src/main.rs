//! Athena Marketplace - Leptos Frontend
//!
//! Browsing site with injected-wallet connect. Routing, the connection
//! lifecycle and the page content live in `athena-core`.

use athena_core::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::dom;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Config first: it carries the log level
    let config = dom::read_site_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.level().ok())
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = config.unwrap_or_else(|e| {
        log::warn!("{}; using default site config", e);
        SiteConfig::default()
    });
    log::info!("{} marketplace starting", config.brand);

    dom::hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
