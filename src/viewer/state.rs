// SPDX-License-Identifier: MPL-2.0
//! Viewer state
//!
//! Scale, pan offset, active image and the gesture in progress. A fresh
//! value is built every time a viewer opens and dropped when it closes, so
//! nothing leaks between unrelated image sets.

use super::gesture::{Gesture, SwipeTracker};
use crate::domain::viewer::Scale;
use iced_core::{Point, Vector};

/// Manages the transform and gesture state of one open viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    /// Current zoom scale (guaranteed valid by type).
    pub scale: Scale,

    /// Current pan offset from the centered position, in pixels.
    pub offset: Vector,

    /// Index of the displayed image.
    pub active_index: usize,

    /// Pinch or pan currently in progress.
    pub gesture: Gesture,

    /// Candidate swipe, armed only for a one-finger gesture at base scale.
    pub swipe: Option<SwipeTracker>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ViewerState {
    /// State for a freshly opened viewer showing `index`.
    #[must_use]
    pub fn new(active_index: usize) -> Self {
        Self {
            scale: Scale::default(),
            offset: Vector::new(0.0, 0.0),
            active_index,
            gesture: Gesture::Idle,
            swipe: None,
        }
    }

    /// Restores the identity transform and drops any gesture in progress.
    pub fn reset_transform(&mut self) {
        self.scale = Scale::default();
        self.offset = Vector::new(0.0, 0.0);
        self.clear_gesture();
    }

    /// Clears transient gesture-tracking fields, keeping scale and offset.
    pub fn clear_gesture(&mut self) {
        self.gesture = Gesture::Idle;
        self.swipe = None;
    }

    /// Returns whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Pan(_))
    }

    /// Returns the anchor of the current gesture, if any.
    #[must_use]
    pub fn gesture_anchor(&self) -> Option<Point> {
        self.gesture.anchor()
    }

    /// Returns whether the transform is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_identity() && self.offset == Vector::new(0.0, 0.0)
    }
}
