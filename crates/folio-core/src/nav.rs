//! Navigation bar behaviour.

/// Vertical scroll, in pixels, after which the navbar switches to its
/// compact "scrolled" style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Element id referenced by an in-page anchor.
///
/// Returns `None` for a bare `#` and for anything that is not a fragment
/// link. Hash routes such as `#/projects` are not anchors.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.starts_with('/') {
        None
    } else {
        Some(id)
    }
}

/// Document scroll position that puts an element just below the fixed navbar.
///
/// `element_top` is the element's viewport-relative top (from
/// `getBoundingClientRect`).
pub fn scroll_target(element_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    element_top + scroll_y - nav_height
}
