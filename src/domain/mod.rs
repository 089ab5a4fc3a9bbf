// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the viewer, the gallery manifest
//! and the configuration.
//!
//! # Modules
//!
//! - [`gallery`]: Image list entries ([`ImageEntry`](gallery::ImageEntry))
//! - [`viewer`]: Viewer value objects ([`Scale`](viewer::Scale),
//!   [`ZoomFactor`](viewer::ZoomFactor), [`SwipeThreshold`](viewer::SwipeThreshold))

pub mod gallery;
pub mod viewer;
