// SPDX-License-Identifier: MPL-2.0
//! Image list entries.

use serde::{Deserialize, Serialize};

/// One image of a gallery: where to load it from and its alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageEntry {
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// Entry shown in place of an image that failed to load.
    ///
    /// The alt text is left empty so assistive technology skips it.
    #[must_use]
    pub fn placeholder(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: String::new(),
        }
    }

    /// Returns whether the entry has a usable URL.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
