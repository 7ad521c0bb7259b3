// Host-side tests for the mobile menu state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod html {
        include!("../src/site/html.rs");
    }
    pub mod icons {
        include!("../src/site/icons.rs");
    }
    pub mod nav {
        include!("../src/site/nav.rs");
    }
}

use site::icons::Icon;
use site::nav::MenuState;

#[test]
fn toggle_flips_and_close_is_idempotent() {
    let mut m = MenuState::default();
    assert!(!m.open);
    m.toggle();
    assert!(m.open);
    assert_eq!(m.button_icon(), Icon::Close);
    assert_eq!(m.aria_expanded(), "true");
    m.close();
    assert!(!m.open);
    m.close();
    assert!(!m.open);
    assert_eq!(m.button_icon(), Icon::Menu);
    assert_eq!(m.aria_expanded(), "false");
}

#[test]
fn icon_references_sprite_symbol() {
    let html = site::html::Node::from(Icon::Github.render(18)).to_html();
    assert_eq!(
        html,
        r#"<svg class="icon icon-github" width="18" height="18" aria-hidden="true"><use href="icons.svg#github"></use></svg>"#
    );
}
