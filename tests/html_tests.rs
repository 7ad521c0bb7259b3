// Host-side tests for the markup tree and its serializer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod html {
    include!("../src/site/html.rs");
}

use html::*;

#[test]
fn serializes_nested_elements_in_order() {
    let node: Node = el("div")
        .class("a b")
        .id("root")
        .child(el("span").text("hi"))
        .text(" there")
        .into();
    assert_eq!(
        node.to_html(),
        r#"<div class="a b" id="root"><span>hi</span> there</div>"#
    );
}

#[test]
fn escapes_text_and_attribute_values() {
    let node: Node = el("a")
        .attr("href", "/?q=\"x\"&y=<z>")
        .text("<script>alert('x') & more</script>")
        .into();
    assert_eq!(
        node.to_html(),
        "<a href=\"/?q=&quot;x&quot;&amp;y=&lt;z&gt;\">&lt;script&gt;alert('x') &amp; more&lt;/script&gt;</a>"
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    let node: Node = el("input").attr("type", "email").into();
    assert_eq!(node.to_html(), r#"<input type="email">"#);
    let node: Node = el("textarea").attr("rows", "4").into();
    assert_eq!(node.to_html(), r#"<textarea rows="4"></textarea>"#);
}

#[test]
fn boolean_attributes_have_no_value() {
    let node: Node = el("nav").flag("hidden").into();
    assert_eq!(node.to_html(), "<nav hidden></nav>");
}

#[test]
fn lookup_helpers() {
    let node: Node = el("div")
        .child(el("p").id("first").class("x reveal").text("one"))
        .child(el("p").id("second").text("two"))
        .into();
    let first = node.find_by_id("first").expect("first");
    assert!(first.has_class("reveal"));
    assert!(!first.has_class("rev"));
    assert_eq!(first.get_attr("id"), Some("first"));
    assert!(node.find_by_id("missing").is_none());
    assert_eq!(node.text_content(), "onetwo");

    let mut count = 0;
    node.walk(&mut |_| count += 1);
    assert_eq!(count, 3);
}
