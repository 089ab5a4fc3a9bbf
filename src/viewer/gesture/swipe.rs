// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe interpreter for navigating between images.
//!
//! A swipe is only recognised for a gesture that started with one finger
//! while the image was at its base scale, and that never gained a second
//! finger before release.

use crate::domain::viewer::SwipeThreshold;
use iced_core::Point;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next image.
    Next,
    /// Finger travelled right: show the previous image.
    Previous,
}

/// Tracks one candidate swipe from touch-down to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: f32,
    last_x: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn start(position: Point) -> Self {
        Self {
            start_x: position.x,
            last_x: position.x,
        }
    }

    pub fn track(&mut self, position: Point) {
        self.last_x = position.x;
    }

    /// Resolves the swipe on release.
    #[must_use]
    pub fn finish(self, threshold: SwipeThreshold) -> Option<SwipeDirection> {
        let travel = self.start_x - self.last_x;
        if travel.abs() < threshold.value() {
            return None;
        }
        if travel > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_travel_is_not_a_swipe() {
        let mut swipe = SwipeTracker::start(Point::new(100.0, 0.0));
        swipe.track(Point::new(60.0, 0.0));
        assert_eq!(swipe.finish(SwipeThreshold::new(50.0)), None);
    }

    #[test]
    fn leftward_travel_goes_next() {
        let mut swipe = SwipeTracker::start(Point::new(200.0, 0.0));
        swipe.track(Point::new(120.0, 40.0));
        assert_eq!(
            swipe.finish(SwipeThreshold::new(50.0)),
            Some(SwipeDirection::Next)
        );
    }

    #[test]
    fn rightward_travel_goes_previous() {
        let mut swipe = SwipeTracker::start(Point::new(0.0, 0.0));
        swipe.track(Point::new(50.0, 0.0));
        assert_eq!(
            swipe.finish(SwipeThreshold::new(50.0)),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn vertical_travel_is_ignored() {
        let mut swipe = SwipeTracker::start(Point::new(100.0, 0.0));
        swipe.track(Point::new(100.0, 400.0));
        assert_eq!(swipe.finish(SwipeThreshold::default()), None);
    }
}
