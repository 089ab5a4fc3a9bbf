// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a headless lightbox engine for image galleries.
//!
//! It owns the state of one open image viewer (zoom scale, pan offset, active
//! image, gesture in progress) and turns pointer, touch, wheel and keyboard
//! input into clamped state updates and a render transform. Drawing is left
//! to the host.
//!
//! ```
//! use gallery_lens::config::ViewerSettings;
//! use gallery_lens::domain::gallery::ImageEntry;
//! use gallery_lens::viewer::Viewer;
//! use iced_core::{Point, Size};
//!
//! let images = vec![ImageEntry::new("panel.jpg", "Control panel")];
//! let mut viewer = Viewer::open(images, 0, Size::new(300.0, 300.0), ViewerSettings::default())
//!     .expect("at least one image");
//! viewer.image_loaded(Size::new(600.0, 600.0));
//! viewer.zoom_by(2.0);
//! viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
//! viewer.on_gesture_move(&[Point::new(1000.0, 1000.0)]);
//! viewer.on_gesture_end();
//!
//! assert_eq!(viewer.transform().to_css(), "translate(450px, 450px) scale(2)");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod replay;
pub mod viewer;

#[cfg(test)]
mod test_utils;
