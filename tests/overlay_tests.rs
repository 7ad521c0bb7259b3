// Host-side tests for the overlay query-parameter resolver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod overlay {
    include!("../src/site/overlay.rs");
}

use overlay::*;
use std::collections::{BTreeMap, HashMap};

fn bag(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_bag_resolves_to_defaults() {
    let cfg = resolve(&bag(&[]));
    assert_eq!(cfg, OverlayConfig::default());
    assert!(cfg.enabled);
    assert_eq!(cfg.scene_url, DEFAULT_SCENE_URL);
    assert_eq!(cfg.scale, 1.0);
    assert_eq!(cfg.opacity, 0.6);
    assert_eq!(cfg.offset_x, 0.0);
    assert_eq!(cfg.offset_y, 0.0);
    assert_eq!(cfg.blend_mode, "screen");
}

#[test]
fn unrelated_keys_are_ignored() {
    let cfg = resolve(&bag(&[("utm_source", "x"), ("scale", "3")]));
    assert_eq!(cfg, OverlayConfig::default());
}

#[test]
fn only_literal_zero_disables() {
    assert!(!resolve(&bag(&[(KEY_ENABLED, "0")])).enabled);
    assert!(resolve(&bag(&[(KEY_ENABLED, "1")])).enabled);
    assert!(resolve(&bag(&[(KEY_ENABLED, "")])).enabled);
    assert!(resolve(&bag(&[(KEY_ENABLED, "false")])).enabled);
    assert!(resolve(&bag(&[(KEY_ENABLED, "00")])).enabled);
    assert!(resolve(&bag(&[(KEY_ENABLED, " 0")])).enabled);
}

#[test]
fn scene_url_override_and_empty_fallback() {
    let custom = "https://prod.spline.design/custom/scene.splinecode";
    assert_eq!(resolve(&bag(&[(KEY_SCENE_URL, custom)])).scene_url, custom);
    assert_eq!(
        resolve(&bag(&[(KEY_SCENE_URL, "")])).scene_url,
        DEFAULT_SCENE_URL
    );
}

#[test]
fn numeric_fields_parse_or_fall_back() {
    assert_eq!(resolve(&bag(&[(KEY_SCALE, "2.5")])).scale, 2.5);
    assert_eq!(resolve(&bag(&[(KEY_SCALE, "not-a-number")])).scale, 1.0);
    assert_eq!(resolve(&bag(&[(KEY_SCALE, "")])).scale, 1.0);
    assert_eq!(resolve(&bag(&[(KEY_OPACITY, "abc")])).opacity, 0.6);
    assert_eq!(resolve(&bag(&[(KEY_OFFSET_X, "-40")])).offset_x, -40.0);
    assert_eq!(resolve(&bag(&[(KEY_OFFSET_Y, "12.75")])).offset_y, 12.75);
}

#[test]
fn numeric_fields_have_no_bounds() {
    let cfg = resolve(&bag(&[(KEY_SCALE, "-3"), (KEY_OPACITY, "7")]));
    assert_eq!(cfg.scale, -3.0);
    assert_eq!(cfg.opacity, 7.0);
}

#[test]
fn decimal_prefix_parsing() {
    assert_eq!(parse_decimal_prefix("2.5px"), Some(2.5));
    assert_eq!(parse_decimal_prefix("  3"), Some(3.0));
    assert_eq!(parse_decimal_prefix(".5"), Some(0.5));
    assert_eq!(parse_decimal_prefix("-.25"), Some(-0.25));
    assert_eq!(parse_decimal_prefix("+4"), Some(4.0));
    assert_eq!(parse_decimal_prefix("1."), Some(1.0));
    assert_eq!(parse_decimal_prefix("1e2"), Some(100.0));
    assert_eq!(parse_decimal_prefix("1e"), Some(1.0));
    assert_eq!(parse_decimal_prefix("1e+"), Some(1.0));
    assert_eq!(parse_decimal_prefix("2.5.1"), Some(2.5));
    assert_eq!(parse_decimal_prefix(""), None);
    assert_eq!(parse_decimal_prefix("."), None);
    assert_eq!(parse_decimal_prefix("-"), None);
    assert_eq!(parse_decimal_prefix("px2"), None);
    assert_eq!(parse_decimal_prefix("NaN"), None);
    assert_eq!(parse_decimal_prefix("Infinity"), None);
    assert_eq!(parse_decimal_prefix("1e999"), None);
}

#[test]
fn blend_mode_is_forwarded_verbatim() {
    assert_eq!(
        resolve(&bag(&[(KEY_BLEND, "multiply")])).blend_mode,
        "multiply"
    );
    assert_eq!(
        resolve(&bag(&[(KEY_BLEND, "not-a-mode")])).blend_mode,
        "not-a-mode"
    );
    assert_eq!(resolve(&bag(&[(KEY_BLEND, "")])).blend_mode, "screen");
}

#[test]
fn resolve_is_idempotent() {
    let input = bag(&[
        (KEY_SCALE, "1.7"),
        (KEY_OPACITY, "0.33"),
        (KEY_OFFSET_X, "garbage"),
        (KEY_BLEND, "overlay"),
    ]);
    let a = resolve(&input);
    let b = resolve(&input);
    assert_eq!(a, b);
    assert_eq!(a.scale.to_bits(), b.scale.to_bits());
    assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
    assert_eq!(a.offset_x.to_bits(), b.offset_x.to_bits());
}

#[test]
fn end_to_end_partial_tuning() {
    let cfg = resolve(&bag(&[
        (KEY_SCALE, "1.2"),
        (KEY_OPACITY, "0.4"),
        (KEY_BLEND, "multiply"),
    ]));
    assert_eq!(
        cfg,
        OverlayConfig {
            enabled: true,
            scene_url: DEFAULT_SCENE_URL.to_string(),
            scale: 1.2,
            opacity: 0.4,
            offset_x: 0.0,
            offset_y: 0.0,
            blend_mode: "multiply".to_string(),
        }
    );
}

#[test]
fn slice_source_uses_first_value() {
    let pairs = [(KEY_SCALE, "2"), (KEY_SCALE, "9")];
    assert_eq!(resolve(&pairs[..]).scale, 2.0);
}

#[test]
fn btree_source_matches_hash_source() {
    let mut tree = BTreeMap::new();
    tree.insert(KEY_OPACITY.to_string(), "0.9".to_string());
    tree.insert(KEY_ENABLED.to_string(), "0".to_string());
    let hashed = bag(&[(KEY_OPACITY, "0.9"), (KEY_ENABLED, "0")]);
    assert_eq!(resolve(&tree), resolve(&hashed));
}

#[test]
fn css_declarations_follow_config() {
    let cfg = resolve(&bag(&[
        (KEY_SCALE, "1.5"),
        (KEY_OFFSET_X, "10"),
        (KEY_OFFSET_Y, "-20.5"),
        (KEY_BLEND, "lighten"),
    ]));
    assert_eq!(cfg.transform_css(), "translate3d(10px, -20.5px, 0) scale(1.5)");
    assert_eq!(
        cfg.style_properties(),
        vec![
            ("opacity", "0.6".to_string()),
            ("mix-blend-mode", "lighten".to_string()),
            ("transform", "translate3d(10px, -20.5px, 0) scale(1.5)".to_string()),
            ("transform-origin", "center center".to_string()),
        ]
    );
}

#[test]
fn default_transform_prints_integers_plainly() {
    assert_eq!(
        OverlayConfig::default().transform_css(),
        "translate3d(0px, 0px, 0) scale(1)"
    );
}
