// SPDX-License-Identifier: MPL-2.0
//! Viewer newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_SCALE, DEFAULT_SWIPE_THRESHOLD, DEFAULT_ZOOM_FACTOR, MAX_SCALE, MAX_SWIPE_THRESHOLD,
    MAX_ZOOM_FACTOR, MIN_SCALE, MIN_SWIPE_THRESHOLD, MIN_ZOOM_FACTOR,
};

// =============================================================================
// Scale
// =============================================================================

/// Zoom scale, guaranteed to be within valid range (0.5–5.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites. Non-finite input
/// (NaN from a degenerate ratio) falls back to the default scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Returns whether the image is shown at its base size.
    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.0 - DEFAULT_SCALE).abs() < f32::EPSILON
    }

    /// Returns whether the image is enlarged past its base size.
    #[must_use]
    pub fn is_zoomed_in(self) -> bool {
        self.0 > DEFAULT_SCALE + f32::EPSILON
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    /// Increases the scale by one step.
    #[must_use]
    pub fn zoom_in(self, step: ZoomFactor) -> Self {
        self.scaled_by(step.value())
    }

    /// Decreases the scale by one step.
    #[must_use]
    pub fn zoom_out(self, step: ZoomFactor) -> Self {
        self.scaled_by(step.value().recip())
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Multiplicative zoom step, guaranteed to be within valid range (1.01–4.0).
///
/// Zooming in multiplies the scale by the factor, zooming out divides by it,
/// so one step in and one step out return to the original scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel for a swipe, in pixels (10–400).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

// =============================================================================
// Tests
// =============================================================================
