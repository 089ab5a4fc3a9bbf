// SPDX-License-Identifier: MPL-2.0
//! Pan bounds for a scaled image inside a fixed-size viewport.
//!
//! The image is centered in the viewport and scaled around its center, so
//! the offset on each axis may range over half of the overflow:
//! `max = max(0, (base · scale − container) / 2)`.

use crate::domain::viewer::Scale;
use iced_core::{Size, Vector};

/// Symmetric offset limits: the offset must lie in `[-max, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub max_x: f32,
    pub max_y: f32,
}

impl PanBounds {
    /// Bounds that only admit a zero offset.
    pub const LOCKED: Self = Self {
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Computes the bounds for `image` (base size) shown at `scale` in `viewport`.
    ///
    /// Panning is only allowed while the image is zoomed in past its base size;
    /// at `scale <= 1` the bounds are locked to zero.
    #[must_use]
    pub fn compute(viewport: Size, image: Size, scale: Scale) -> Self {
        if !scale.is_zoomed_in() {
            return Self::LOCKED;
        }

        let factor = scale.value();
        Self {
            max_x: half_overflow(image.width * factor, viewport.width),
            max_y: half_overflow(image.height * factor, viewport.height),
        }
    }

    /// Clamps each axis of `offset` independently into the bounds.
    #[must_use]
    pub fn clamp(self, offset: Vector) -> Vector {
        Vector::new(
            clamp_axis(offset.x, self.max_x),
            clamp_axis(offset.y, self.max_y),
        )
    }
}

fn half_overflow(scaled: f32, container: f32) -> f32 {
    let overflow = (scaled - container) / 2.0;
    if overflow.is_finite() {
        overflow.max(0.0)
    } else {
        0.0
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    let max = max.max(0.0);
    value.clamp(-max, max)
}
