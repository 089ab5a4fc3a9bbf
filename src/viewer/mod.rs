// SPDX-License-Identifier: MPL-2.0
//! Gesture-driven image viewer.
//!
//! Renders one image at a time inside a fixed-size viewport and lets the
//! user zoom (pinch, wheel, buttons) and pan (drag) it, with the offset
//! clamped so the scaled image never uncovers the viewport beyond its own
//! edge, and with the transform reset whenever the displayed image changes.

pub mod bounds;
pub mod component;
pub mod gesture;
pub mod state;
pub mod transform;

// Re-export commonly used types for convenience
pub use bounds::PanBounds;
pub use component::{Effect, Message, Viewer};
pub use gesture::SwipeDirection;
pub use state::ViewerState;
pub use transform::Transform;
