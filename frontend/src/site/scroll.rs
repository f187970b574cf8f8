pub const SCROLLED_THRESHOLD: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
pub const NAV_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub hidden: bool,
    pub scrolled: bool,
}

/// Remembers the previous scroll position so the navbar can hide while
/// scrolling down and come back when scrolling up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_y: f64,
    state: NavState,
}

impl ScrollTracker {
    pub fn observe(&mut self, y: f64) -> NavState {
        let y = y.max(0.0);
        if y > self.last_y && y > NAV_HEIGHT {
            self.state.hidden = true;
        } else if y < self.last_y {
            self.state.hidden = false;
        }
        self.state.scrolled = y > SCROLLED_THRESHOLD;
        self.last_y = y;
        self.state
    }
}

pub fn back_to_top_visible(y: f64) -> bool {
    y > BACK_TO_TOP_THRESHOLD
}

/// In-page anchor target, if `href` is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
