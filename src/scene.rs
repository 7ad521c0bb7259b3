use crate::dom::{self, DomError};
use crate::site::html::Node;
use crate::site::scene::{
    scene_view, SizeHints, SplineViewer, SCENE_HOST_ATTR, SCENE_STYLE_ATTR,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Shared handle to the viewer so callbacks see the same loading state.
pub type SharedViewer = Rc<RefCell<SplineViewer>>;

/// Append the viewer's module script and resolve once it has evaluated.
/// There is no timeout; a network failure surfaces as `DomError::Js`.
pub async fn load_module(document: &web::Document, src: &str) -> Result<(), DomError> {
    let script = document
        .create_element("script")?
        .dyn_into::<web::HtmlScriptElement>()
        .map_err(|_| DomError::Js("script element cast failed".to_string()))?;
    script.set_type("module");
    script.set_src(src);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    let head = document
        .head()
        .ok_or_else(|| DomError::MissingElement("head".to_string()))?;
    head.append_child(&script)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Re-render every scene host through the viewer's current state.
pub fn hydrate_hosts(document: &web::Document, viewer: &SplineViewer) -> Result<usize, DomError> {
    let selector = format!("[{}]", SCENE_HOST_ATTR);
    let hosts = dom::query_all(document, &selector)?;
    for host in &hosts {
        let Some(scene) = host.get_attribute(SCENE_HOST_ATTR) else {
            continue;
        };
        let hints = host
            .get_attribute(SCENE_STYLE_ATTR)
            .map(|s| SizeHints::from_style(&s))
            .unwrap_or_else(SizeHints::fill);
        host.set_inner_html(&Node::from(scene_view(viewer, &scene, &hints)).to_html());
    }
    Ok(hosts.len())
}

/// Load the viewer module in the background, then swap spinners for scenes.
pub fn spawn_loader(document: web::Document, viewer: SharedViewer, src: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        let started = Instant::now();
        if let Err(e) = load_module(&document, src).await {
            log::warn!("[scene] viewer module failed to load: {}", e);
            return;
        }
        if !viewer.borrow_mut().module.mark_ready() {
            return;
        }
        log::info!(
            "[scene] viewer ready after {} ms",
            started.elapsed().as_millis()
        );
        let ready = *viewer.borrow();
        match hydrate_hosts(&document, &ready) {
            Ok(n) => log::debug!("[scene] hydrated {} scene host(s)", n),
            Err(e) => log::warn!("[scene] hydrate failed: {}", e),
        }
    });
}
