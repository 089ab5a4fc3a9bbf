// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom scale bounds for the viewer
//! - **Zoom step**: Multiplicative factors for buttons and the mouse wheel
//! - **Gestures**: Swipe and pinch thresholds
//! - **Images**: Placeholder substituted for images that fail to load

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of an image when it is first displayed (1.0 = base size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed scale.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 5.0;

// ==========================================================================
// Zoom Step Defaults
// ==========================================================================

/// Default multiplicative step for zoom in/out buttons.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.25;

/// Default multiplicative step per mouse wheel notch.
pub const DEFAULT_WHEEL_FACTOR: f32 = 1.1;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 1.01;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 4.0;

/// Pixel scroll distance treated as one wheel notch.
pub const PIXELS_PER_WHEEL_LINE: f32 = 50.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel (in pixels) for a swipe to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

/// Pinch distances below this (in pixels) make the pinch inert.
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Image shown in place of one that failed to load.
pub const DEFAULT_PLACEHOLDER_URL: &str = "images/catalog/default.jpg";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);

    // Zoom factor validation
    assert!(MIN_ZOOM_FACTOR > 1.0);
    assert!(MAX_ZOOM_FACTOR > MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR <= MAX_ZOOM_FACTOR);
    assert!(DEFAULT_WHEEL_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_WHEEL_FACTOR <= MAX_ZOOM_FACTOR);
    assert!(PIXELS_PER_WHEEL_LINE > 0.0);

    // Gesture validation
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
    assert!(MIN_PINCH_DISTANCE > 0.0);
};
