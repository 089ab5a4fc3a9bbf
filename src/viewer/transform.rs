// SPDX-License-Identifier: MPL-2.0
//! Render transform for the displayed image.
//!
//! The host applies the transform around the image center: first translate
//! by the pan offset, then scale.

use crate::domain::viewer::Scale;
use iced_core::Vector;
use std::fmt;

/// Translate + scale to apply to the image element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: Vector::new(0.0, 0.0),
        scale: 1.0,
    };

    #[must_use]
    pub fn new(offset: Vector, scale: Scale) -> Self {
        Self {
            translate: offset,
            scale: scale.value(),
        }
    }

    /// CSS `transform` property value, e.g. `translate(12px, -3.5px) scale(2)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            format_number(self.translate.x),
            format_number(self.translate.y),
            format_number(self.scale)
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Formats a number for display (three decimals at most, trailing zeros removed)
#[must_use]
pub fn format_number(value: f32) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    // Values that round to zero from below would print "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
