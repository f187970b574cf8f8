pub const SWIPE_THRESHOLD: f64 = 50.0;
const EDGE_TOLERANCE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Prev),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::Prev => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Snapshot of the track's scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl CarouselMetrics {
    fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn can_go_prev(&self) -> bool {
        self.scroll_left > EDGE_TOLERANCE
    }

    pub fn can_go_next(&self) -> bool {
        self.scroll_left < self.max_scroll() - EDGE_TOLERANCE
    }

    /// `scrollLeft / (scrollWidth - clientWidth)` in [0, 1].
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_left / max).clamp(0.0, 1.0)
    }

    /// Where one step in `direction` lands, kept inside the track.
    pub fn target(&self, direction: Direction, step: f64) -> f64 {
        (self.scroll_left + direction.sign() * step).clamp(0.0, self.max_scroll())
    }
}

/// Horizontal touch gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Swipe {
    start_x: Option<f64>,
}

impl Swipe {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finger moved left → next card, right → previous. Short drags are taps.
    pub fn finish(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= SWIPE_THRESHOLD {
            None
        } else if delta > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_left: f64) -> CarouselMetrics {
        CarouselMetrics {
            scroll_left,
            scroll_width: 1600.0,
            client_width: 400.0,
        }
    }

    #[test]
    fn controls_follow_the_edges() {
        assert!(!at(0.0).can_go_prev());
        assert!(at(0.0).can_go_next());
        assert!(at(600.0).can_go_prev());
        assert!(at(600.0).can_go_next());
        assert!(at(1200.0).can_go_prev());
        assert!(!at(1200.0).can_go_next());
        assert!(!at(1199.5).can_go_next());
    }

    #[test]
    fn progress_is_proportional() {
        assert_eq!(at(0.0).progress(), 0.0);
        assert_eq!(at(300.0).progress(), 0.25);
        assert_eq!(at(1200.0).progress(), 1.0);
    }

    #[test]
    fn no_overflow_means_no_progress_and_no_controls() {
        let metrics = CarouselMetrics {
            scroll_left: 0.0,
            scroll_width: 400.0,
            client_width: 400.0,
        };
        assert_eq!(metrics.progress(), 0.0);
        assert!(!metrics.can_go_prev());
        assert!(!metrics.can_go_next());
    }

    #[test]
    fn steps_are_clamped() {
        assert_eq!(at(100.0).target(Direction::Prev, 350.0), 0.0);
        assert_eq!(at(100.0).target(Direction::Next, 350.0), 450.0);
        assert_eq!(at(1000.0).target(Direction::Next, 350.0), 1200.0);
    }

    #[test]
    fn swipes_need_fifty_pixels() {
        let mut swipe = Swipe::default();
        swipe.start(300.0);
        assert_eq!(swipe.finish(260.0), None);

        swipe.start(300.0);
        assert_eq!(swipe.finish(200.0), Some(Direction::Next));

        swipe.start(100.0);
        assert_eq!(swipe.finish(180.0), Some(Direction::Prev));

        assert_eq!(swipe.finish(0.0), None);
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Prev));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
