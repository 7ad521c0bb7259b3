#![cfg(target_arch = "wasm32")]
use crate::site::html::Node;
use crate::site::overlay::{self as overlay_config, OverlayConfig};
use crate::site::page::{self, PageView};
use crate::site::scene::SplineViewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod overlay;
mod params;
mod scene;
mod site;

fn resolve_overlay(window: &web::Window) -> OverlayConfig {
    match params::page_params(window) {
        Ok(p) => overlay_config::resolve(&p),
        Err(e) => {
            log::warn!("query parameters unavailable, using defaults: {}", e);
            OverlayConfig::default()
        }
    }
}

/// Attach the interactive pieces. None of them is required for the page to
/// be readable, so failures are logged and skipped.
fn wire_events(document: &web::Document) {
    if let Err(e) = events::wire_menu(document) {
        log::warn!("[nav] menu not wired: {}", e);
    }
    if let Err(e) = events::wire_contact_form(document) {
        log::warn!("[form] contact form not wired: {}", e);
    }
    if let Err(e) = events::wire_reveal(document) {
        log::warn!("[reveal] reveal animations not wired: {}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::require_document()?;
    let root = dom::element_by_id(&document, constants::APP_ROOT_ID)?;

    let config = resolve_overlay(&window);
    log::debug!("[overlay] {:?}", config);

    let viewer: scene::SharedViewer = Rc::new(RefCell::new(SplineViewer::default()));
    let view = PageView {
        overlay: &config,
        year: dom::current_year(),
    };
    let tree: Node = page::compose(&view, &*viewer.borrow());
    root.set_inner_html(&tree.to_html());

    overlay::apply(&document, &config)?;
    wire_events(&document);

    scene::spawn_loader(document, viewer, constants::SPLINE_VIEWER_MODULE_URL);
    Ok(())
}
