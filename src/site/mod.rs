// Pure page model: no web-sys, so host tests can include these files directly.
pub mod content;
pub mod html;
pub mod icons;
pub mod nav;
pub mod overlay;
pub mod page;
pub mod scene;
