//! DOM helpers: host-page config, viewport width, loading screen, title.

use athena_core::{ConfigError, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "athena-config";
const LOADING_ELEMENT_ID: &str = "leptos-loading";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Read the embedded site config. A missing element yields the defaults.
pub fn read_site_config() -> Result<SiteConfig, ConfigError> {
    let raw = document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) => SiteConfig::from_json(&raw),
        None => Ok(SiteConfig::default()),
    }
}

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

/// Hide the static loading screen shipped in index.html.
pub fn hide_loading_screen() {
    let Some(element) = document().and_then(|doc| doc.get_element_by_id(LOADING_ELEMENT_ID)) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    if let Err(e) = element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {:?}", e);
    }
}
