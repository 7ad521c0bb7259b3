use crate::constants::{MENU_BUTTON_ID, MOBILE_NAV_ID, NAV_ICON_SIZE};
use crate::dom::{self, DomError};
use crate::site::html::Node;
use crate::site::nav::MenuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply(document: &web::Document, menu: MenuState) {
    if let Some(nav) = document.get_element_by_id(MOBILE_NAV_ID) {
        if menu.open {
            _ = nav.remove_attribute("hidden");
        } else {
            _ = nav.set_attribute("hidden", "");
        }
    }
    if let Some(button) = document.get_element_by_id(MENU_BUTTON_ID) {
        _ = button.set_attribute("aria-expanded", menu.aria_expanded());
        button.set_inner_html(&Node::from(menu.button_icon().render(NAV_ICON_SIZE)).to_html());
    }
}

/// Mobile menu: the button toggles it, following any of its links closes it.
pub fn wire_menu(document: &web::Document) -> Result<(), DomError> {
    let menu = Rc::new(RefCell::new(MenuState::default()));

    let menu_toggle = menu.clone();
    let doc_toggle = document.clone();
    dom::add_click_listener(document, MENU_BUTTON_ID, move || {
        let state = {
            let mut m = menu_toggle.borrow_mut();
            m.toggle();
            *m
        };
        apply(&doc_toggle, state);
    })?;

    let links = dom::query_all(document, &format!("#{} a", MOBILE_NAV_ID))?;
    for link in links {
        let menu_close = menu.clone();
        let doc_close = document.clone();
        dom::add_event_listener(&link, "click", move |_ev: web::Event| {
            let state = {
                let mut m = menu_close.borrow_mut();
                m.close();
                *m
            };
            apply(&doc_close, state);
        })?;
    }
    Ok(())
}
