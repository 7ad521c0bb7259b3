use crate::constants::CONTACT_FORM_ID;
use crate::dom::{self, DomError};
use web_sys as web;

/// The contact form is presentational: submissions are swallowed.
pub fn wire_contact_form(document: &web::Document) -> Result<(), DomError> {
    let form = dom::element_by_id(document, CONTACT_FORM_ID)?;
    dom::add_event_listener(&form, "submit", |ev: web::Event| {
        ev.prevent_default();
        log::debug!("[form] submit intercepted");
    })
}
