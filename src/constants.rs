/// DOM hooks, asset locations and animation tuning shared by page
/// composition and the browser host.
///
/// Keeping these together means the markup and the code that wires it agree
/// on every id and class name.
// Mount point provided by static/index.html
pub const APP_ROOT_ID: &str = "app";

// Element ids emitted by page composition
pub const OVERLAY_LAYER_ID: &str = "scene-overlay";
pub const MENU_BUTTON_ID: &str = "menu-toggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";
pub const CONTACT_FORM_ID: &str = "contact-form";

// Reveal-on-scroll
pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const REVEAL_THRESHOLD: f64 = 0.2; // fraction of the element that must be visible
pub const REVEAL_STAGGER_SEC: f32 = 0.05; // per-card delay in the highlights grid

// Ambient aura scene behind the hero
pub const AURA_SCENE_URL: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";
pub const AURA_LAYER_OPACITY: f32 = 0.7;

// ES module that defines the <spline-viewer> custom element
pub const SPLINE_VIEWER_MODULE_URL: &str =
    "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

// Icon sizes (px)
pub const NAV_ICON_SIZE: u32 = 18;
pub const LINK_ICON_SIZE: u32 = 16;
pub const HIGHLIGHT_ICON_SIZE: u32 = 22;
pub const TAGLINE_ICON_SIZE: u32 = 14;
