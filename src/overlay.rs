use crate::constants::OVERLAY_LAYER_ID;
use crate::dom::{self, DomError};
use crate::site::overlay::OverlayConfig;
use web_sys as web;

/// Apply the resolved overlay style to the layer. A no-op when the overlay is
/// disabled, since composition leaves the layer out.
///
/// Values go through `CSSStyleDeclaration.setProperty`, so a blend mode the
/// browser does not understand is dropped by the browser rather than here.
pub fn apply(document: &web::Document, config: &OverlayConfig) -> Result<(), DomError> {
    if !config.enabled {
        return Ok(());
    }
    let layer = dom::html_element_by_id(document, OVERLAY_LAYER_ID)?;
    let style = layer.style();
    for (name, value) in config.style_properties() {
        style.set_property(name, &value)?;
    }
    Ok(())
}
