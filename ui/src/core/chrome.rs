//! Header scroll state, mobile menu, and in-page anchor handling.

use crate::core::config::{DARK_MODE_CLASS, SCROLLED_CLASS, SCROLL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl ChromeState {
    /// Record a scroll offset. Returns whether the `scrolled` flag changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Mobile-nav links only ever close the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Body scrolling stays locked while either overlay is up.
    pub fn body_locked(&self, modal_open: bool) -> bool {
        modal_open || self.menu_open
    }
}

/// Element id an in-page link points at, e.g. `"#gallery"` -> `"gallery"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Class list for the app root element.
pub fn root_class(dark: bool, scrolled: bool) -> String {
    let mut class = String::from("page-root");
    if dark {
        class.push(' ');
        class.push_str(DARK_MODE_CLASS);
    }
    if scrolled {
        class.push(' ');
        class.push_str(SCROLLED_CLASS);
    }
    class
}
