use crate::constants::{
    AURA_LAYER_OPACITY, AURA_SCENE_URL, CONTACT_FORM_ID, HIGHLIGHT_ICON_SIZE, LINK_ICON_SIZE,
    MENU_BUTTON_ID, MOBILE_NAV_ID, NAV_ICON_SIZE, OVERLAY_LAYER_ID, REVEAL_CLASS,
    REVEAL_STAGGER_SEC, TAGLINE_ICON_SIZE,
};
use crate::site::content::{
    ContactLink, Highlight, NavLink, ProjectRecord, ABOUT_POINTS, ABOUT_TEXT, BRAND,
    CONTACT_LINKS, FOOTER_LINKS, HERO_BLURB, HERO_HEADLINE, HERO_TAGLINE, HIGHLIGHTS, NAV_LINKS,
    ORBS, OWNER_NAME, PROJECTS, SKILLS, SOCIAL_LINKS,
};
use crate::site::html::{el, text, Element, Node};
use crate::site::icons::Icon;
use crate::site::nav::MenuState;
use crate::site::overlay::OverlayConfig;
use crate::site::scene::{scene_host, SceneRenderer, SizeHints};

/// Everything the page depends on besides static content.
#[derive(Clone, Debug)]
pub struct PageView<'a> {
    pub overlay: &'a OverlayConfig,
    pub year: i32,
}

/// Build the whole page. Pure: same inputs, same tree.
pub fn compose(view: &PageView<'_>, renderer: &dyn SceneRenderer) -> Node {
    el("div")
        .class("page")
        .child(navbar())
        .child(hero(view.overlay, renderer))
        .child(highlights())
        .child(work())
        .child(skills())
        .child(about())
        .child(contact())
        .child(footer(view.year))
        .into()
}

fn reveal(e: Element, delay_sec: f32) -> Element {
    let e = if delay_sec > 0.0 {
        e.attr("style", format!("transition-delay:{}s", delay_sec))
    } else {
        e
    };
    let class = e.get_attr("class").unwrap_or_default().to_string();
    set_class(e, format!("{} {}", class, REVEAL_CLASS).trim().to_string())
}

fn set_class(mut e: Element, class: String) -> Element {
    e.attrs.retain(|(n, _)| *n != "class");
    e.class(class)
}

fn section(id: Option<&'static str>, class: &str) -> Element {
    let s = el("section").class(format!("section {}", class).trim().to_string());
    match id {
        Some(id) => s.id(id),
        None => s,
    }
}

#[inline]
fn container() -> Element {
    el("div").class("container")
}

fn link(l: &ContactLink, content: impl IntoIterator<Item = Node>) -> Element {
    let a = el("a").attr("href", l.href);
    let a = if l.external {
        a.attr("target", "_blank").attr("rel", "noreferrer")
    } else {
        a
    };
    a.children(content)
}

fn nav_links(links: &[NavLink]) -> Vec<Node> {
    links
        .iter()
        .map(|l| Node::from(el("a").attr("href", l.href).class("nav-link").text(l.label)))
        .collect()
}

fn social_icons() -> Element {
    el("div").class("social").children(SOCIAL_LINKS.iter().map(|l| {
        link(l, [Node::from(l.icon.render(NAV_ICON_SIZE))]).attr("aria-label", l.label)
    }))
}

fn navbar() -> Element {
    let menu = MenuState::default();
    el("header")
        .class("navbar")
        .child(
            el("div")
                .class("container navbar-inner")
                .child(
                    el("a")
                        .attr("href", "#home")
                        .class("brand")
                        .child(el("span").class("brand-gradient").text(BRAND)),
                )
                .child(
                    el("nav")
                        .class("nav-desktop")
                        .children(nav_links(NAV_LINKS))
                        .child(social_icons()),
                )
                .child(
                    el("button")
                        .id(MENU_BUTTON_ID)
                        .class("menu-toggle")
                        .attr("type", "button")
                        .attr("aria-label", "Toggle menu")
                        .attr("aria-controls", MOBILE_NAV_ID)
                        .attr("aria-expanded", menu.aria_expanded())
                        .child(menu.button_icon().render(NAV_ICON_SIZE)),
                ),
        )
        .child(
            el("nav")
                .id(MOBILE_NAV_ID)
                .class("nav-mobile")
                .flag("hidden")
                .child(
                    el("div")
                        .class("nav-mobile-inner")
                        .children(nav_links(NAV_LINKS))
                        .child(social_icons()),
                ),
        )
}

fn hero(overlay: &OverlayConfig, renderer: &dyn SceneRenderer) -> Element {
    let hints = SizeHints::fill();
    let aura = el("div")
        .class("layer")
        .attr("style", format!("opacity:{}", AURA_LAYER_OPACITY))
        .child(scene_host(renderer, AURA_SCENE_URL, &hints));

    let mut backdrop = el("div").class("hero-backdrop").child(aura);
    if overlay.enabled {
        // Styled by the host through the CSSOM.
        backdrop = backdrop.child(
            el("div")
                .id(OVERLAY_LAYER_ID)
                .class("layer no-pointer")
                .child(scene_host(renderer, &overlay.scene_url, &hints)),
        );
    }
    let backdrop = backdrop.child(motion_background());

    let intro = el("div")
        .class("hero-intro enter")
        .child(
            el("div")
                .class("pill")
                .child(Icon::Sparkles.render(TAGLINE_ICON_SIZE))
                .text(HERO_TAGLINE),
        )
        .child(el("h1").class("hero-title").text(HERO_HEADLINE))
        .child(el("p").class("hero-blurb").text(HERO_BLURB))
        .child(
            el("div")
                .class("cta-row")
                .child(el("a").attr("href", "#work").class("btn btn-solid").text("See my work"))
                .child(el("a").attr("href", "#contact").class("btn btn-ghost").text("Get in touch")),
        );

    section(Some("home"), "hero")
        .child(backdrop)
        .child(container().child(intro))
}

fn motion_background() -> Element {
    el("div")
        .class("motion-bg no-pointer")
        .child(el("div").class("veil veil-linear"))
        .child(el("div").class("veil veil-radial"))
        .children(ORBS.iter().map(|o| {
            el("div").class(format!("orb {}", o.tint)).attr(
                "style",
                format!(
                    "left:{};top:{};width:{}px;height:{}px;animation-duration:{}s;animation-delay:{}s",
                    o.x, o.y, o.size_px, o.size_px, o.duration_sec, o.delay_sec
                ),
            )
        }))
        .child(el("div").class("dot-grid"))
}

fn highlight_card(h: &Highlight, index: usize) -> Element {
    reveal(
        el("div")
            .class("card glass")
            .child(el("div").class("card-glow"))
            .child(
                el("div")
                    .class("card-body")
                    .child(h.icon.render(HIGHLIGHT_ICON_SIZE))
                    .child(el("h3").text(h.title))
                    .child(el("p").text(h.description)),
            ),
        index as f32 * REVEAL_STAGGER_SEC,
    )
}

fn highlights() -> Element {
    section(None, "highlights").child(
        el("div")
            .class("container grid-3")
            .children(HIGHLIGHTS.iter().enumerate().map(|(i, h)| highlight_card(h, i))),
    )
}

pub fn badge(label: &str) -> Element {
    el("span").class("badge").text(label)
}

pub fn project_card(p: &ProjectRecord) -> Element {
    reveal(
        el("a")
            .attr("href", p.link)
            .attr("target", "_blank")
            .attr("rel", "noreferrer")
            .class("project-card")
            .child(el("div").class("project-hover"))
            .child(
                el("div")
                    .class("project-body")
                    .child(el("div").class("tags").children(p.tags.iter().map(|t| badge(t))))
                    .child(el("h3").text(p.title))
                    .child(el("p").text(p.description)),
            ),
        0.0,
    )
}

fn work() -> Element {
    section(Some("work"), "").child(
        container()
            .child(
                el("div")
                    .class("section-head")
                    .child(el("h2").text("Selected Work"))
                    .child(
                        el("div")
                            .class("section-aside")
                            .child(Icon::Cpu.render(LINK_ICON_SIZE))
                            .child(el("span").text("Real projects, clean delivery")),
                    ),
            )
            .child(el("div").class("grid-3").children(PROJECTS.iter().map(project_card))),
    )
}

fn skills() -> Element {
    section(Some("skills"), "").child(
        container()
            .child(el("h2").text("Core Skills"))
            .child(el("div").class("badges").children(SKILLS.iter().map(|s| badge(s)))),
    )
}

fn about() -> Element {
    section(Some("about"), "").child(
        el("div")
            .class("container grid-2")
            .child(reveal(
                el("div")
                    .child(el("h2").text("About Me"))
                    .child(el("p").text(ABOUT_TEXT)),
                0.0,
            ))
            .child(reveal(
                el("div").class("about-panel").child(
                    el("div").class("glass panel").child(
                        el("ul")
                            .class("points")
                            .children(ABOUT_POINTS.iter().map(|p| el("li").text(*p))),
                    ),
                ),
                0.1,
            )),
    )
}

fn field(label: &'static str, control: Element) -> Element {
    el("div")
        .class("field")
        .child(el("label").child(el("span").text(label)).child(control))
}

/// Presentational only: the host swallows `submit`.
pub fn contact_form() -> Element {
    el("form")
        .id(CONTACT_FORM_ID)
        .class("contact-form")
        .flag("novalidate")
        .child(field(
            "Name",
            el("input").attr("name", "name").attr("placeholder", "Your name"),
        ))
        .child(field(
            "Email",
            el("input")
                .attr("type", "email")
                .attr("name", "email")
                .attr("placeholder", "you@example.com"),
        ))
        .child(field(
            "Message",
            el("textarea")
                .attr("name", "message")
                .attr("rows", "4")
                .attr("placeholder", "Tell me about your project..."),
        ))
        .child(
            el("button")
                .attr("type", "submit")
                .class("btn btn-solid")
                .text("Send message"),
        )
}

fn contact() -> Element {
    section(Some("contact"), "").child(
        container()
            .child(el("h2").text("Let\u{2019}s build something"))
            .child(
                el("div")
                    .class("grid-2")
                    .child(el("div").class("glass panel").child(contact_form()))
                    .child(
                        el("div")
                            .class("glass panel")
                            .child(el("p").text("Prefer email or socials?"))
                            .child(el("div").class("contact-links").children(
                                CONTACT_LINKS.iter().map(|l| {
                                    link(
                                        l,
                                        [Node::from(l.icon.render(LINK_ICON_SIZE)), text(l.label)],
                                    )
                                    .class("contact-link")
                                }),
                            )),
                    ),
            ),
    )
}

fn footer(year: i32) -> Element {
    el("footer").class("footer").child(
        el("div")
            .class("container footer-inner")
            .child(el("p").text(format!(
                "\u{a9} {} {}. All rights reserved.",
                year, OWNER_NAME
            )))
            .child(el("div").class("footer-links").children(nav_links(FOOTER_LINKS))),
    )
}
