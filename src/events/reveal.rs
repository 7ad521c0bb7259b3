use crate::constants::{IN_VIEW_CLASS, REVEAL_CLASS, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn show(el: &web::Element) {
    _ = el.class_list().add_1(IN_VIEW_CLASS);
}

/// Fade `.reveal` elements in the first time they scroll into view.
/// Without IntersectionObserver support everything is shown immediately.
pub fn wire_reveal(document: &web::Document) -> Result<(), DomError> {
    let targets = dom::query_all(document, &format!(".{}", REVEAL_CLASS))?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    show(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            targets.iter().for_each(show);
            return Ok(());
        }
    };
    callback.forget();

    for t in &targets {
        observer.observe(t);
    }
    log::debug!("[reveal] observing {} element(s)", targets.len());
    Ok(())
}
