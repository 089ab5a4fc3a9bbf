// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch-to-zoom interpreter.

use crate::config::defaults::MIN_PINCH_DISTANCE;
use crate::domain::viewer::Scale;
use iced_core::Point;

/// Snapshot taken when two fingers touch down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    /// Distance between the two fingers at gesture start.
    pub initial_distance: f32,
    /// Scale at gesture start.
    pub initial_scale: Scale,
    /// Midpoint of the two fingers at gesture start.
    pub anchor: Point,
}

impl PinchGesture {
    /// Starts a pinch from two contact points.
    #[must_use]
    pub fn start(a: Point, b: Point, scale: Scale) -> Self {
        Self {
            initial_distance: a.distance(b),
            initial_scale: scale,
            anchor: midpoint(a, b),
        }
    }

    /// Computes the scale for the current finger positions.
    ///
    /// Returns `None` while the pinch is inert: when the fingers started
    /// (almost) on top of each other no meaningful ratio exists.
    #[must_use]
    pub fn update(&self, a: Point, b: Point) -> Option<Scale> {
        if self.initial_distance < MIN_PINCH_DISTANCE {
            return None;
        }
        let ratio = a.distance(b) / self.initial_distance;
        Some(self.initial_scale.scaled_by(ratio))
    }
}

/// Midpoint between two points.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
