use crate::site::icons::Icon;

// Static page content. Everything here is fixed at compile time.

pub const BRAND: &str = "Developer Portfolio";
pub const OWNER_NAME: &str = "Your Name";

pub const HERO_TAGLINE: &str =
    "Building AI agents \u{2022} Full\u{2011}stack apps \u{2022} Aspiring data scientist";
pub const HERO_HEADLINE: &str =
    "Crafting intelligent products with a modern, minimal, and futuristic touch";
pub const HERO_BLURB: &str = "I design and ship end\u{2011}to\u{2011}end experiences \u{2014} from conversational agents and data pipelines to responsive web apps. Clean code, clear results.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Conversational AI Agent",
        tags: &["AI Agent", "RAG", "LangChain"],
        description: "Voice-enabled assistant with retrieval-augmented generation and tool-use for browsing and data tasks.",
        link: "https://github.com/",
    },
    ProjectRecord {
        title: "Full\u{2011}Stack SaaS Starter",
        tags: &["React", "FastAPI", "Auth", "Stripe"],
        description: "Production-ready boilerplate with authentication, billing, dashboards, and responsive UI.",
        link: "https://github.com/",
    },
    ProjectRecord {
        title: "ML Pipeline \u{2013} MLOps",
        tags: &["Python", "scikit\u{2011}learn", "Airflow"],
        description: "Automated training, evaluation, and deployment pipeline with experiment tracking.",
        link: "https://github.com/",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Bot,
        title: "AI Agents",
        description: "Autonomous tools with memory, tool\u{2011}use, and robust evaluation.",
    },
    Highlight {
        icon: Icon::Globe,
        title: "Full\u{2011}Stack Apps",
        description: "Fast, scalable web experiences with modern patterns.",
    },
    Highlight {
        icon: Icon::Database,
        title: "Data Science",
        description: "From exploration to deployment with reproducible pipelines.",
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "Vite",
    "Tailwind",
    "FastAPI",
    "Python",
    "Pandas",
    "scikit\u{2011}learn",
    "Postgres",
    "MongoDB",
    "LangChain",
    "OpenAI",
    "RAG",
    "MLOps",
];

pub const ABOUT_TEXT: &str = "I build intelligent, user\u{2011}centric software. My focus is on shipping agents that reason and act, scalable APIs, and data pipelines that turn raw information into insight. I care about clarity, performance, and delightful UX.";

pub const ABOUT_POINTS: &[&str] = &[
    "3+ years building web products and prototypes",
    "Passion for ML, agents, and data visualization",
    "Comfortable across frontend, backend, and infra",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Top", href: "#home" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with `rel="noreferrer"`.
    pub external: bool,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: Icon::Mail,
        label: "hello@example.com",
        href: "mailto:hello@example.com",
        external: false,
    },
    ContactLink {
        icon: Icon::Github,
        label: "github.com/username",
        href: "https://github.com/",
        external: true,
    },
    ContactLink {
        icon: Icon::Linkedin,
        label: "linkedin.com/in/username",
        href: "https://linkedin.com/",
        external: true,
    },
];

/// Icon-only links shown in the navbar.
pub const SOCIAL_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/",
        external: true,
    },
    ContactLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/",
        external: true,
    },
    ContactLink {
        icon: Icon::Mail,
        label: "Email",
        href: "#contact",
        external: false,
    },
];

/// Floating blurred orb in the hero background. Positions are CSS lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub x: &'static str,
    pub y: &'static str,
    pub size_px: u32,
    /// Gradient colour class, see `static/style.css`.
    pub tint: &'static str,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

pub const ORBS: &[Orb] = &[
    Orb {
        x: "10%",
        y: "20%",
        size_px: 220,
        tint: "orb-purple",
        duration_sec: 6.0,
        delay_sec: 0.0,
    },
    Orb {
        x: "80%",
        y: "30%",
        size_px: 180,
        tint: "orb-blue",
        duration_sec: 7.0,
        delay_sec: 0.6,
    },
    Orb {
        x: "50%",
        y: "70%",
        size_px: 260,
        tint: "orb-orange",
        duration_sec: 8.0,
        delay_sec: 1.2,
    },
];
