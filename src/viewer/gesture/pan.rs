// SPDX-License-Identifier: MPL-2.0
//! Single-finger (or mouse) drag interpreter.
//!
//! Unlike a scrollable, the offset moves with the pointer: dragging right
//! moves the image right.

use iced_core::{Point, Vector};

/// Snapshot taken when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Pointer position where the drag started.
    pub start_position: Point,
    /// Image offset when the drag started.
    pub start_offset: Vector,
}

impl PanGesture {
    /// Starts a drag at `position` with the image at `offset`.
    #[must_use]
    pub fn start(position: Point, offset: Vector) -> Self {
        Self {
            start_position: position,
            start_offset: offset,
        }
    }

    /// Unclamped offset for the current pointer position.
    #[must_use]
    pub fn update(&self, current_position: Point) -> Vector {
        self.start_offset + (current_position - self.start_position)
    }
}
