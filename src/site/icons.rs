use crate::site::html::{el, Element};

// Glyphs live in `static/icons.svg` as <symbol> elements keyed by `Icon::name`.

pub const SPRITE_PATH: &str = "icons.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Menu,
    Close,
    Cpu,
    Bot,
    Database,
    Globe,
    Sparkles,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Cpu => "cpu",
            Icon::Bot => "bot",
            Icon::Database => "database",
            Icon::Globe => "globe",
            Icon::Sparkles => "sparkles",
        }
    }

    pub fn render(self, size: u32) -> Element {
        el("svg")
            .class(format!("icon icon-{}", self.name()))
            .attr("width", size.to_string())
            .attr("height", size.to_string())
            .attr("aria-hidden", "true")
            .child(el("use").attr("href", format!("{}#{}", SPRITE_PATH, self.name())))
    }
}
