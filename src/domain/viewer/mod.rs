// SPDX-License-Identifier: MPL-2.0
//! Viewer domain types.
//!
//! Value objects for the image viewer that are independent of any
//! presentation framework.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{Scale, SwipeThreshold, ZoomFactor};
