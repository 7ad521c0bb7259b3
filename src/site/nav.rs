use crate::site::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[inline]
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon shown on the toggle button: the action a click will perform.
    pub fn button_icon(self) -> Icon {
        if self.open {
            Icon::Close
        } else {
            Icon::Menu
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
