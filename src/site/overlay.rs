use std::collections::{BTreeMap, HashMap};

// Query-string tuning for the decorative robot overlay above the hero aura.

pub const KEY_ENABLED: &str = "robot";
pub const KEY_SCENE_URL: &str = "robotUrl";
pub const KEY_SCALE: &str = "robotScale";
pub const KEY_OPACITY: &str = "robotOpacity";
pub const KEY_OFFSET_X: &str = "robotX";
pub const KEY_OFFSET_Y: &str = "robotY";
pub const KEY_BLEND: &str = "robotBlend";

/// Literal value of the `robot` key that switches the overlay off.
pub const DISABLE_VALUE: &str = "0";

pub const DEFAULT_SCENE_URL: &str =
    "https://prod.spline.design/Ogq0nP1mJr1nqjQz/scene.splinecode";
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_OPACITY: f64 = 0.6;
pub const DEFAULT_OFFSET: f64 = 0.0;
pub const DEFAULT_BLEND: &str = "screen";

/// Read-only bag of optional string parameters.
pub trait ParamSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl ParamSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// First matching pair wins, like `URLSearchParams::get`.
impl ParamSource for [(&str, &str)] {
    fn get(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub scene_url: String,
    pub scale: f64,
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Forwarded verbatim to `mix-blend-mode`.
    pub blend_mode: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scene_url: DEFAULT_SCENE_URL.to_string(),
            scale: DEFAULT_SCALE,
            opacity: DEFAULT_OPACITY,
            offset_x: DEFAULT_OFFSET,
            offset_y: DEFAULT_OFFSET,
            blend_mode: DEFAULT_BLEND.to_string(),
        }
    }
}

/// Resolve the overlay configuration. Total: malformed values fall back to defaults.
pub fn resolve<P: ParamSource + ?Sized>(params: &P) -> OverlayConfig {
    let non_empty = |key: &str| params.get(key).filter(|v| !v.is_empty());
    let number = |key: &str, default: f64| {
        params
            .get(key)
            .and_then(|v| parse_decimal_prefix(&v))
            .unwrap_or(default)
    };

    OverlayConfig {
        enabled: params.get(KEY_ENABLED).as_deref() != Some(DISABLE_VALUE),
        scene_url: non_empty(KEY_SCENE_URL).unwrap_or_else(|| DEFAULT_SCENE_URL.to_string()),
        scale: number(KEY_SCALE, DEFAULT_SCALE),
        opacity: number(KEY_OPACITY, DEFAULT_OPACITY),
        offset_x: number(KEY_OFFSET_X, DEFAULT_OFFSET),
        offset_y: number(KEY_OFFSET_Y, DEFAULT_OFFSET),
        blend_mode: non_empty(KEY_BLEND).unwrap_or_else(|| DEFAULT_BLEND.to_string()),
    }
}

/// Parse the longest decimal prefix of `s` after leading whitespace,
/// so `"2.5px"` reads as 2.5. Returns `None` when there is no digit to read
/// or the value is not finite.
pub fn parse_decimal_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    // Exponent only counts when at least one digit follows it.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    s[..i].parse::<f64>().ok().filter(|v| v.is_finite())
}

impl OverlayConfig {
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }

    /// CSS declarations for the overlay layer, in application order.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("opacity", self.opacity.to_string()),
            ("mix-blend-mode", self.blend_mode.clone()),
            ("transform", self.transform_css()),
            ("transform-origin", "center center".to_string()),
        ]
    }
}
