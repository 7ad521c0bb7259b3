use crate::site::html::{el, Element};

// Third-party 3D scene embeds. The viewer module loads lazily; slots show a
// spinner until it is ready.

/// Attribute carrying the scene URL on every host element.
pub const SCENE_HOST_ATTR: &str = "data-scene";
/// Attribute carrying the serialized size hints on every host element.
pub const SCENE_STYLE_ATTR: &str = "data-scene-style";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneLoad {
    #[default]
    Loading,
    Ready,
}

/// Loading state of the viewer module. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneModule {
    state: SceneLoad,
}

impl SceneModule {
    pub fn state(&self) -> SceneLoad {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SceneLoad::Ready
    }

    /// Returns true only on the call that performed the transition.
    pub fn mark_ready(&mut self) -> bool {
        let was_loading = self.state == SceneLoad::Loading;
        self.state = SceneLoad::Ready;
        was_loading
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SizeHints {
    pub width: String,
    pub height: String,
}

impl SizeHints {
    pub fn fill() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
        }
    }

    pub fn to_style(&self) -> String {
        format!("width:{};height:{}", self.width, self.height)
    }

    /// Inverse of `to_style`; unknown declarations are ignored.
    pub fn from_style(style: &str) -> Self {
        let mut hints = Self::fill();
        for decl in style.split(';') {
            if let Some((k, v)) = decl.split_once(':') {
                match k.trim() {
                    "width" => hints.width = v.trim().to_string(),
                    "height" => hints.height = v.trim().to_string(),
                    _ => {}
                }
            }
        }
        hints
    }
}

/// Capability that turns a scene identifier into a visual subtree.
pub trait SceneRenderer {
    fn is_ready(&self) -> bool;
    fn render(&self, scene: &str, hints: &SizeHints) -> Element;
}

pub fn placeholder() -> Element {
    el("div")
        .class("scene-loading")
        .attr("role", "status")
        .attr("aria-label", "Loading scene")
        .child(el("div").class("spinner"))
}

/// Contents of a scene slot for the renderer's current state.
pub fn scene_view(renderer: &dyn SceneRenderer, scene: &str, hints: &SizeHints) -> Element {
    if renderer.is_ready() {
        renderer.render(scene, hints)
    } else {
        placeholder()
    }
}

/// Host element that the browser re-renders once the viewer is ready.
pub fn scene_host(renderer: &dyn SceneRenderer, scene: &str, hints: &SizeHints) -> Element {
    el("div")
        .class("scene-host")
        .attr(SCENE_HOST_ATTR, scene)
        .attr(SCENE_STYLE_ATTR, hints.to_style())
        .child(scene_view(renderer, scene, hints))
}

/// Renders `<spline-viewer>` custom elements from the viewer ES module.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplineViewer {
    pub module: SceneModule,
}

impl SceneRenderer for SplineViewer {
    fn is_ready(&self) -> bool {
        self.module.is_ready()
    }

    fn render(&self, scene: &str, hints: &SizeHints) -> Element {
        el("spline-viewer")
            .attr("url", scene)
            .attr("style", hints.to_style())
    }
}
