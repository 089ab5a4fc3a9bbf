// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest module for loading the ordered image list a viewer shows.
//!
//! A manifest is a TOML file with one `[[images]]` table per image:
//!
//! ```toml
//! [[images]]
//! url = "images/catalog/panel-01.jpg"
//! alt = "Control cabinet, front view"
//!
//! [[images]]
//! url = "images/catalog/panel-02.jpg"
//! ```
//!
//! Entries with a blank URL are replaced by the placeholder entry so the
//! viewer never has to deal with them.

use crate::domain::gallery::ImageEntry;
use crate::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered list of images, as supplied to a viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    images: Vec<ImageEntry>,
}

impl Gallery {
    /// Builds a gallery from entries, rejecting an empty list.
    pub fn new(images: Vec<ImageEntry>, placeholder_url: &str) -> Result<Self> {
        if images.is_empty() {
            return Err(ManifestError::Empty.into());
        }

        let images = images
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.has_url() {
                    entry
                } else {
                    tracing::warn!(index, "manifest entry without url, using placeholder");
                    ImageEntry::placeholder(placeholder_url)
                }
            })
            .collect();

        Ok(Self { images })
    }

    /// Parses a manifest from TOML text.
    pub fn from_toml_str(content: &str, placeholder_url: &str) -> Result<Self> {
        let raw: Gallery = toml::from_str(content)
            .map_err(|err| ManifestError::Parse(err.message().to_string()))?;
        Self::new(raw.images, placeholder_url)
    }

    /// Reads and parses a manifest file.
    pub fn load_from_path(path: &Path, placeholder_url: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let gallery = Self::from_toml_str(&content, placeholder_url)?;
        tracing::debug!(path = %path.display(), count = gallery.len(), "loaded gallery manifest");
        Ok(gallery)
    }

    /// Writes the gallery as a manifest file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the gallery has no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the images in display order.
    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Consumes the gallery, returning its images.
    #[must_use]
    pub fn into_images(self) -> Vec<ImageEntry> {
        self.images
    }
}
