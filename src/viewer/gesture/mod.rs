// SPDX-License-Identifier: MPL-2.0
//! Gesture interpreters, disambiguated by the number of contact points.
//!
//! - two points: [`pinch`] drives the scale
//! - one point: [`pan`] drives the offset
//! - one point at base scale: [`swipe`] may navigate on release
//!
//! [`touch`] turns host finger events into the ordered point list the
//! interpreters consume.

pub mod pan;
pub mod pinch;
pub mod swipe;
pub mod touch;

pub use pan::PanGesture;
pub use pinch::PinchGesture;
pub use swipe::{SwipeDirection, SwipeTracker};
pub use touch::{ContactChange, Contacts};

use iced_core::Point;

/// Gesture currently driving the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Pinch(PinchGesture),
    Pan(PanGesture),
}

impl Gesture {
    /// Returns whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Position the gesture is anchored at: drag start for a pan,
    /// finger midpoint for a pinch.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Pinch(pinch) => Some(pinch.anchor),
            Self::Pan(pan) => Some(pan.start_position),
        }
    }
}
