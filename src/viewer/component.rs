// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The host forwards input as [`Message`]s (or calls the gesture methods
//! directly) and applies the returned [`Effect`]: re-render with a new
//! [`Transform`], load another image, show the placeholder, or close.

use super::bounds::PanBounds;
use super::gesture::{
    ContactChange, Contacts, Gesture, PanGesture, PinchGesture, SwipeDirection, SwipeTracker,
};
use super::state::ViewerState;
use super::transform::Transform;
use crate::config::defaults::PIXELS_PER_WHEEL_LINE;
use crate::config::ViewerSettings;
use crate::domain::gallery::ImageEntry;
use crate::domain::viewer::Scale;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use iced_core::keyboard::{self, key::Named};
use iced_core::{mouse, touch, Point, Size, Vector};

/// Messages the host forwards to the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw finger event from the host's touch input.
    Touch(touch::Event),
    /// Primary mouse button pressed over the image.
    MousePressed(Point),
    /// Cursor moved (only matters while the button is held).
    CursorMoved(Point),
    /// Primary mouse button released.
    MouseReleased,
    /// Mouse wheel scrolled over the image.
    WheelScrolled(mouse::ScrollDelta),
    /// Key pressed while the viewer has focus.
    KeyPressed(keyboard::Key),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    NavigateNext,
    NavigatePrevious,
    /// Jump to a specific image (e.g. a thumbnail click).
    GoTo(usize),
    /// Container was resized.
    ViewportResized(Size),
    /// Active image finished loading at this displayed base size.
    ImageLoaded(Size),
    /// Active image failed to load.
    ImageFailed,
    Close,
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Re-render the image with this transform.
    TransformChanged(Transform),
    /// Show another image; the transform is back to identity.
    ImageChanged { index: usize, image: ImageEntry },
    /// Replace the broken image with this placeholder entry.
    ShowPlaceholder(ImageEntry),
    /// Close the viewer and drop it.
    Close,
}

/// One open image viewer.
///
/// Construct a new one every time the lightbox opens; it owns its state
/// and is simply dropped on close.
#[derive(Debug, Clone)]
pub struct Viewer {
    images: Vec<ImageEntry>,
    state: ViewerState,
    viewport: Size,
    image_size: Option<Size>,
    settings: ViewerSettings,
    contacts: Contacts,
    /// Last cursor position while the primary button is held.
    pressed_cursor: Option<Point>,
}

impl Viewer {
    /// Opens a viewer on `images` at `start_index` (wrapped modulo length).
    ///
    /// Returns `None` for an empty image list.
    #[must_use]
    pub fn open(
        images: Vec<ImageEntry>,
        start_index: usize,
        viewport: Size,
        settings: ViewerSettings,
    ) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = start_index % images.len();
        tracing::debug!(count = images.len(), index, "viewer opened");
        Some(Self {
            images,
            state: ViewerState::new(index),
            viewport,
            image_size: None,
            settings,
            contacts: Contacts::default(),
            pressed_cursor: None,
        })
    }

    /// Opens a viewer on a loaded gallery manifest.
    #[must_use]
    pub fn from_gallery(
        gallery: Gallery,
        start_index: usize,
        viewport: Size,
        settings: ViewerSettings,
    ) -> Option<Self> {
        Self::open(gallery.into_images(), start_index, viewport, settings)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Shows the image at `index` (wrapped modulo length) with the identity
    /// transform. Returns the effective index.
    pub fn set_image(&mut self, index: usize) -> usize {
        let index = index % self.images.len();
        self.state.active_index = index;
        self.state.reset_transform();
        self.image_size = None;
        tracing::debug!(index, url = %self.images[index].url, "image selected");
        index
    }

    /// Advances to the next image, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.set_image(self.state.active_index + 1)
    }

    /// Goes back to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> usize {
        let len = self.images.len();
        self.set_image(self.state.active_index + len - 1)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begins a gesture with the given contact points.
    ///
    /// Two points start a pinch, one point starts a drag (and arms a swipe
    /// when the image is at base scale). Other counts are ignored.
    pub fn on_gesture_start(&mut self, points: &[Point]) {
        self.begin(points, true);
    }

    /// Updates the gesture in progress.
    ///
    /// When the number of points no longer matches the gesture in progress,
    /// that gesture ends and a new one starts from the current state.
    pub fn on_gesture_move(&mut self, points: &[Point]) {
        match (self.state.gesture, points) {
            (Gesture::Pinch(pinch), [a, b]) => {
                if let Some(scale) = pinch.update(*a, *b) {
                    self.apply_scale(scale);
                }
            }
            (Gesture::Pan(pan), [point]) => {
                if let Some(swipe) = self.state.swipe.as_mut() {
                    swipe.track(*point);
                }
                let offset = pan.update(*point);
                self.state.offset = self.bounds().clamp(offset);
            }
            (Gesture::Idle, []) => {}
            _ => self.restart(points),
        }
    }

    /// Ends the gesture in progress. Scale and offset are kept.
    ///
    /// Returns the navigation performed if the gesture was a swipe.
    pub fn on_gesture_end(&mut self) -> Option<SwipeDirection> {
        let swipe = self.state.swipe.take();
        if !self.state.gesture.is_idle() {
            tracing::debug!(scale = self.state.scale.value(), "gesture ended");
        }
        self.state.clear_gesture();

        let direction = swipe
            .filter(|_| self.state.scale.is_identity())
            .and_then(|swipe| swipe.finish(self.settings.swipe_threshold))?;
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        };
        Some(direction)
    }

    fn begin(&mut self, points: &[Point], allow_swipe: bool) {
        self.state.clear_gesture();
        match points {
            [a, b] => {
                self.state.gesture = Gesture::Pinch(PinchGesture::start(*a, *b, self.state.scale));
                tracing::debug!(scale = self.state.scale.value(), "pinch started");
            }
            [point] => {
                self.state.gesture = Gesture::Pan(PanGesture::start(*point, self.state.offset));
                if allow_swipe && self.state.scale.is_identity() {
                    self.state.swipe = Some(SwipeTracker::start(*point));
                }
                tracing::debug!(x = point.x, y = point.y, "drag started");
            }
            _ => {}
        }
    }

    /// Continues with a different number of contacts; never swipes.
    fn restart(&mut self, points: &[Point]) {
        self.begin(points, false);
    }

    /// Re-anchors the gesture in progress on the current scale and offset.
    ///
    /// Without known pointer positions the gesture is dropped; the next move
    /// starts a new one from wherever the pointer is.
    fn reanchor(&mut self) {
        if self.state.gesture.is_idle() {
            return;
        }
        let points = match self.pressed_cursor {
            Some(cursor) => vec![cursor],
            None => self.contacts.points(),
        };
        if points.is_empty() {
            self.state.clear_gesture();
        } else {
            self.restart(&points);
        }
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// Multiplies the scale by `factor`. Non-positive or non-finite factors
    /// are ignored.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.apply_scale(self.state.scale.scaled_by(factor));
        self.reanchor();
    }

    /// Zooms in by one configured step.
    pub fn zoom_in(&mut self) {
        if self.state.scale.is_max() {
            return;
        }
        self.apply_scale(self.state.scale.zoom_in(self.settings.zoom_step));
        self.reanchor();
    }

    /// Zooms out by one configured step.
    pub fn zoom_out(&mut self) {
        if self.state.scale.is_min() {
            return;
        }
        self.apply_scale(self.state.scale.zoom_out(self.settings.zoom_step));
        self.reanchor();
    }

    /// Restores scale 1 and a centered image.
    pub fn reset_zoom(&mut self) {
        self.state.scale = Scale::default();
        self.state.offset = Vector::new(0.0, 0.0);
        self.reanchor();
    }

    /// Zooms by one wheel step per notch; scrolling up zooms in.
    pub fn on_wheel(&mut self, delta: mouse::ScrollDelta) {
        let notches = match delta {
            mouse::ScrollDelta::Lines { y, .. } => y,
            mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_WHEEL_LINE,
        };
        if notches == 0.0 || !notches.is_finite() {
            return;
        }
        self.zoom_by(self.settings.wheel_step.value().powf(notches));
    }

    /// Sets a new scale, keeping the same image point under the viewport
    /// center, then clamps the offset.
    fn apply_scale(&mut self, scale: Scale) {
        let previous = self.state.scale.value();
        self.state.scale = scale;
        let ratio = scale.value() / previous;
        self.state.offset = self.bounds().clamp(self.state.offset * ratio);
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// Records the displayed base size of the active image.
    pub fn image_loaded(&mut self, size: Size) {
        self.image_size = Some(size);
        self.state.offset = self.bounds().clamp(self.state.offset);
    }

    /// Substitutes the placeholder for the active image and returns it.
    pub fn image_failed(&mut self) -> &ImageEntry {
        let index = self.state.active_index;
        tracing::warn!(index, url = %self.images[index].url, "image failed to load, showing placeholder");
        self.images[index] = ImageEntry::placeholder(self.settings.placeholder_url.clone());
        self.image_size = None;
        self.state.reset_transform();
        &self.images[index]
    }

    /// Updates the container size and re-clamps the offset.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.state.offset = self.bounds().clamp(self.state.offset);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Transform to apply to the image element.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.state.offset, self.state.scale)
    }

    /// Current pan limits.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        match self.image_size {
            Some(image) => PanBounds::compute(self.viewport, image, self.state.scale),
            None => PanBounds::LOCKED,
        }
    }

    /// `(current, total)` with `current` 1-based, for the counter display.
    #[must_use]
    pub fn counter(&self) -> (usize, usize) {
        (self.state.active_index + 1, self.images.len())
    }

    /// Localized counter text, e.g. `3 / 12`.
    #[must_use]
    pub fn counter_label(&self, i18n: &I18n) -> String {
        let (current, total) = self.counter();
        i18n.tr_with_args(
            "viewer-counter",
            &[("current", &current.to_string()), ("total", &total.to_string())],
        )
    }

    #[must_use]
    pub fn current_image(&self) -> &ImageEntry {
        &self.images[self.state.active_index]
    }

    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.state.offset
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    // =========================================================================
    // Message handling
    // =========================================================================

    /// Handle a viewer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let index_before = self.state.active_index;
        let transform_before = self.transform();

        match msg {
            Message::Touch(event) => self.on_touch(&event),
            Message::MousePressed(position) => {
                if self.contacts.is_empty() {
                    self.pressed_cursor = Some(position);
                    self.begin(&[position], false);
                }
            }
            Message::CursorMoved(position) => {
                if self.pressed_cursor.is_some() {
                    self.pressed_cursor = Some(position);
                    self.on_gesture_move(&[position]);
                }
            }
            Message::MouseReleased => {
                if self.pressed_cursor.take().is_some() {
                    self.on_gesture_end();
                }
            }
            Message::WheelScrolled(delta) => self.on_wheel(delta),
            Message::KeyPressed(key) => return self.on_key(&key),
            Message::ZoomIn => self.zoom_in(),
            Message::ZoomOut => self.zoom_out(),
            Message::ResetZoom => self.reset_zoom(),
            Message::NavigateNext => {
                self.next();
            }
            Message::NavigatePrevious => {
                self.previous();
            }
            Message::GoTo(index) => {
                self.set_image(index);
            }
            Message::ViewportResized(size) => self.resize(size),
            Message::ImageLoaded(size) => self.image_loaded(size),
            Message::ImageFailed => return Effect::ShowPlaceholder(self.image_failed().clone()),
            Message::Close => return self.close(),
        }

        self.effect_since(index_before, transform_before)
    }

    fn on_touch(&mut self, event: &touch::Event) {
        if self.pressed_cursor.is_some() {
            return;
        }
        match self.contacts.apply(event) {
            ContactChange::Added => {
                let points = self.contacts.points();
                if points.len() == 1 {
                    self.on_gesture_start(&points);
                } else {
                    self.restart(&points);
                }
            }
            ContactChange::Moved => self.on_gesture_move(&self.contacts.points()),
            ContactChange::Lifted(position) => {
                if self.contacts.is_empty() {
                    if let Some(swipe) = self.state.swipe.as_mut() {
                        swipe.track(position);
                    }
                    self.on_gesture_end();
                } else {
                    self.restart(&self.contacts.points());
                }
            }
            ContactChange::Lost => {
                if self.contacts.is_empty() {
                    tracing::debug!("touch cancelled");
                    self.state.clear_gesture();
                } else {
                    self.restart(&self.contacts.points());
                }
            }
            ContactChange::Ignored => {}
        }
    }

    fn on_key(&mut self, key: &keyboard::Key) -> Effect {
        let index_before = self.state.active_index;
        let transform_before = self.transform();

        match key.as_ref() {
            keyboard::Key::Named(Named::ArrowRight) => {
                self.next();
            }
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.previous();
            }
            keyboard::Key::Named(Named::Escape) => return self.close(),
            keyboard::Key::Character("+" | "=") => self.zoom_in(),
            keyboard::Key::Character("-") => self.zoom_out(),
            keyboard::Key::Character("0") => self.reset_zoom(),
            _ => {}
        }

        self.effect_since(index_before, transform_before)
    }

    fn close(&mut self) -> Effect {
        tracing::debug!(index = self.state.active_index, "viewer closing");
        self.contacts.clear();
        self.pressed_cursor = None;
        self.state.clear_gesture();
        Effect::Close
    }

    fn effect_since(&self, index_before: usize, transform_before: Transform) -> Effect {
        if self.state.active_index != index_before {
            return Effect::ImageChanged {
                index: self.state.active_index,
                image: self.current_image().clone(),
            };
        }
        let transform = self.transform();
        if transform != transform_before {
            Effect::TransformChanged(transform)
        } else {
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{MAX_SCALE, MIN_SCALE};
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::touch::Finger;

    fn images(count: usize) -> Vec<ImageEntry> {
        (0..count)
            .map(|i| ImageEntry::new(format!("img-{i}.jpg"), format!("Image {i}")))
            .collect()
    }

    /// 300x300 viewport showing a loaded 600x600 image.
    fn viewer(count: usize) -> Viewer {
        let mut viewer = Viewer::open(
            images(count),
            0,
            Size::new(300.0, 300.0),
            ViewerSettings::default(),
        )
        .expect("non-empty list");
        viewer.image_loaded(Size::new(600.0, 600.0));
        viewer
    }

    fn finger(id: u64) -> Finger {
        Finger(id)
    }

    #[test]
    fn open_rejects_empty_list() {
        assert!(Viewer::open(Vec::new(), 0, Size::new(1.0, 1.0), ViewerSettings::default()).is_none());
    }

    #[test]
    fn open_wraps_start_index() {
        let viewer = Viewer::open(images(3), 7, Size::new(1.0, 1.0), ViewerSettings::default())
            .expect("non-empty list");
        assert_eq!(viewer.active_index(), 1);
        assert_eq!(viewer.counter(), (2, 3));
    }

    #[test]
    fn set_image_resets_transform() {
        let mut viewer = viewer(3);
        viewer.zoom_by(2.0);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(100.0, 50.0)]);
        assert!(!viewer.state().is_identity());

        assert_eq!(viewer.set_image(5), 2);
        assert!(viewer.state().is_identity());
        assert!(viewer.state().gesture.is_idle());
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut viewer = viewer(3);
        assert_eq!(viewer.previous(), 2);
        assert_eq!(viewer.next(), 0);
        assert_eq!(viewer.next(), 1);
    }

    #[test]
    fn pinch_scales_and_end_keeps_scale() {
        let mut viewer = viewer(1);
        viewer.on_gesture_start(&[Point::new(100.0, 150.0), Point::new(200.0, 150.0)]);
        assert_eq!(viewer.state().gesture_anchor(), Some(Point::new(150.0, 150.0)));

        viewer.on_gesture_move(&[Point::new(50.0, 150.0), Point::new(250.0, 150.0)]);
        assert_abs_diff_eq!(viewer.scale().value(), 2.0);

        assert!(viewer.on_gesture_end().is_none());
        assert_abs_diff_eq!(viewer.scale().value(), 2.0);
        assert!(viewer.state().gesture_anchor().is_none());
    }

    #[test]
    fn pinch_clamps_to_range() {
        let mut viewer = viewer(1);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(0.0, 0.0), Point::new(10_000.0, 0.0)]);
        assert_eq!(viewer.scale().value(), MAX_SCALE);

        viewer.on_gesture_move(&[Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
        assert_eq!(viewer.scale().value(), MIN_SCALE);
    }

    #[test]
    fn drag_is_clamped_when_zoomed() {
        let mut viewer = viewer(1);
        viewer.zoom_by(2.0);

        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        assert!(viewer.state().is_dragging());
        viewer.on_gesture_move(&[Point::new(1000.0, 1000.0)]);

        assert_eq!(viewer.offset(), Vector::new(450.0, 450.0));
    }

    #[test]
    fn drag_is_disabled_at_base_scale() {
        let mut viewer = viewer(1);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(20.0, 30.0)]);
        assert_eq!(viewer.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn zooming_out_reclamps_offset() {
        let mut viewer = viewer(1);
        viewer.zoom_by(4.0);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(900.0, 0.0)]);
        viewer.on_gesture_end();
        assert_eq!(viewer.offset(), Vector::new(900.0, 0.0));

        viewer.zoom_by(0.5);
        // 2x: offset halves to 450, exactly the new limit
        assert_eq!(viewer.offset(), Vector::new(450.0, 0.0));

        viewer.zoom_by(0.5);
        assert_eq!(viewer.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn reset_zoom_is_exact_identity() {
        let mut viewer = viewer(1);
        viewer.zoom_by(3.3);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(-77.0, 31.0)]);
        viewer.reset_zoom();

        assert_eq!(viewer.scale(), Scale::new(1.0));
        assert_eq!(viewer.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn invalid_zoom_factor_is_ignored() {
        let mut viewer = viewer(1);
        viewer.zoom_by(0.0);
        viewer.zoom_by(-2.0);
        viewer.zoom_by(f32::NAN);
        assert!(viewer.scale().is_identity());
    }

    #[test]
    fn wheel_up_zooms_in() {
        let mut viewer = viewer(1);
        viewer.on_wheel(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 });
        assert_abs_diff_eq!(viewer.scale().value(), 1.1, epsilon = 1e-6);

        viewer.on_wheel(mouse::ScrollDelta::Pixels { x: 0.0, y: -50.0 });
        assert_abs_diff_eq!(viewer.scale().value(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn swipe_left_navigates_next() {
        let mut viewer = viewer(3);
        viewer.on_gesture_start(&[Point::new(200.0, 100.0)]);
        viewer.on_gesture_move(&[Point::new(100.0, 100.0)]);
        assert_eq!(viewer.on_gesture_end(), Some(SwipeDirection::Next));
        assert_eq!(viewer.active_index(), 1);
    }

    #[test]
    fn swipe_is_disabled_when_zoomed() {
        let mut viewer = viewer(3);
        viewer.zoom_in();
        viewer.on_gesture_start(&[Point::new(200.0, 100.0)]);
        viewer.on_gesture_move(&[Point::new(0.0, 100.0)]);
        assert_eq!(viewer.on_gesture_end(), None);
        assert_eq!(viewer.active_index(), 0);
    }

    #[test]
    fn pinch_released_to_one_finger_pans_without_swiping() {
        let mut viewer = viewer(3);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(100.0, 100.0),
        }));
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(2),
            position: Point::new(200.0, 100.0),
        }));
        assert!(matches!(viewer.state().gesture, Gesture::Pinch(_)));

        viewer.handle(Message::Touch(touch::Event::FingerLifted {
            id: finger(2),
            position: Point::new(200.0, 100.0),
        }));
        assert!(viewer.state().is_dragging());
        assert!(viewer.state().swipe.is_none());

        viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(1),
            position: Point::new(-200.0, 100.0),
        }));
        let effect = viewer.handle(Message::Touch(touch::Event::FingerLifted {
            id: finger(1),
            position: Point::new(-200.0, 100.0),
        }));

        assert_eq!(effect, Effect::None);
        assert_eq!(viewer.active_index(), 0);
    }

    #[test]
    fn touch_swipe_produces_image_changed() {
        let mut viewer = viewer(3);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(0.0, 0.0),
        }));
        viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(1),
            position: Point::new(80.0, 0.0),
        }));
        let effect = viewer.handle(Message::Touch(touch::Event::FingerLifted {
            id: finger(1),
            position: Point::new(80.0, 0.0),
        }));

        assert_eq!(
            effect,
            Effect::ImageChanged {
                index: 2,
                image: ImageEntry::new("img-2.jpg", "Image 2"),
            }
        );
    }

    #[test]
    fn mouse_drag_pans_but_never_swipes() {
        let mut viewer = viewer(3);
        viewer.handle(Message::MousePressed(Point::new(200.0, 0.0)));
        viewer.handle(Message::CursorMoved(Point::new(0.0, 0.0)));
        let effect = viewer.handle(Message::MouseReleased);
        assert_eq!(effect, Effect::None);
        assert_eq!(viewer.active_index(), 0);

        viewer.handle(Message::ZoomIn);
        viewer.handle(Message::ZoomIn);
        viewer.handle(Message::ZoomIn);
        viewer.handle(Message::MousePressed(Point::new(0.0, 0.0)));
        let effect = viewer.handle(Message::CursorMoved(Point::new(10.0, 0.0)));
        assert!(matches!(effect, Effect::TransformChanged(_)));
    }

    #[test]
    fn cursor_moves_without_press_are_ignored() {
        let mut viewer = viewer(1);
        viewer.zoom_by(2.0);
        let effect = viewer.handle(Message::CursorMoved(Point::new(50.0, 50.0)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn keyboard_navigation_and_close() {
        let mut viewer = viewer(2);
        let effect = viewer.handle(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        assert!(matches!(effect, Effect::ImageChanged { index: 1, .. }));

        let effect = viewer.handle(Message::KeyPressed(keyboard::Key::Character("+".into())));
        assert!(matches!(effect, Effect::TransformChanged(_)));

        let effect = viewer.handle(Message::KeyPressed(keyboard::Key::Character("0".into())));
        assert_eq!(effect, Effect::TransformChanged(Transform::IDENTITY));

        let effect = viewer.handle(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert_eq!(effect, Effect::Close);
    }

    #[test]
    fn image_failed_substitutes_placeholder() {
        let mut viewer = viewer(2);
        viewer.zoom_by(2.0);
        let effect = viewer.handle(Message::ImageFailed);

        let placeholder = ImageEntry::placeholder(ViewerSettings::default().placeholder_url);
        assert_eq!(effect, Effect::ShowPlaceholder(placeholder.clone()));
        assert_eq!(viewer.current_image(), &placeholder);
        assert!(viewer.state().is_identity());
        assert_eq!(viewer.images()[1], ImageEntry::new("img-1.jpg", "Image 1"));
    }

    #[test]
    fn offset_stays_locked_until_image_size_known() {
        let mut viewer = Viewer::open(images(1), 0, Size::new(300.0, 300.0), ViewerSettings::default())
            .expect("non-empty list");
        viewer.zoom_by(2.0);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(100.0, 100.0)]);
        assert_eq!(viewer.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut viewer = viewer(1);
        viewer.zoom_by(2.0);
        viewer.on_gesture_start(&[Point::new(0.0, 0.0)]);
        viewer.on_gesture_move(&[Point::new(450.0, 450.0)]);
        viewer.on_gesture_end();

        let effect = viewer.handle(Message::ViewportResized(Size::new(900.0, 1200.0)));
        // 1200x1200 scaled image: max 150 horizontally, 0 vertically
        assert_eq!(viewer.offset(), Vector::new(150.0, 0.0));
        assert!(matches!(effect, Effect::TransformChanged(_)));
    }

    #[test]
    fn cancelled_touch_never_swipes() {
        let mut viewer = viewer(3);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(200.0, 0.0),
        }));
        viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(1),
            position: Point::new(50.0, 0.0),
        }));
        let effect = viewer.handle(Message::Touch(touch::Event::FingerLost {
            id: finger(1),
            position: Point::new(50.0, 0.0),
        }));

        assert_eq!(effect, Effect::None);
        assert_eq!(viewer.active_index(), 0);
        assert!(viewer.state().gesture.is_idle());
        assert!(viewer.state().swipe.is_none());
    }

    #[test]
    fn lift_position_completes_swipe() {
        let mut viewer = viewer(3);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(200.0, 0.0),
        }));
        let effect = viewer.handle(Message::Touch(touch::Event::FingerLifted {
            id: finger(1),
            position: Point::new(50.0, 0.0),
        }));

        assert!(matches!(effect, Effect::ImageChanged { index: 1, .. }));
        assert_eq!(viewer.active_index(), 1);
    }

    #[test]
    fn wheel_during_mouse_drag_keeps_drag_continuous() {
        let mut viewer = viewer(1);
        viewer.zoom_by(2.0);
        viewer.handle(Message::MousePressed(Point::new(0.0, 0.0)));
        viewer.handle(Message::CursorMoved(Point::new(100.0, 0.0)));
        assert_abs_diff_eq!(viewer.offset().x, 100.0);

        viewer.handle(Message::WheelScrolled(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }));
        assert_abs_diff_eq!(viewer.offset().x, 110.0, epsilon = 1e-3);
        assert!(viewer.state().is_dragging());

        viewer.handle(Message::CursorMoved(Point::new(101.0, 0.0)));
        assert_abs_diff_eq!(viewer.offset().x, 111.0, epsilon = 1e-3);
    }

    #[test]
    fn reset_during_pinch_is_not_undone_by_next_move() {
        let mut viewer = viewer(1);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(100.0, 150.0),
        }));
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(2),
            position: Point::new(200.0, 150.0),
        }));
        viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(2),
            position: Point::new(300.0, 150.0),
        }));
        assert_abs_diff_eq!(viewer.scale().value(), 2.0);

        let effect = viewer.handle(Message::KeyPressed(keyboard::Key::Character("0".into())));
        assert_eq!(effect, Effect::TransformChanged(Transform::IDENTITY));
        assert!(matches!(viewer.state().gesture, Gesture::Pinch(_)));

        viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(2),
            position: Point::new(400.0, 150.0),
        }));
        // distance 200 -> 300 relative to the reset scale
        assert_abs_diff_eq!(viewer.scale().value(), 1.5, epsilon = 1e-6);
    }

    #[test]
    fn zoom_in_at_max_keeps_gesture() {
        let mut viewer = viewer(1);
        viewer.zoom_by(10.0);
        assert!(viewer.scale().is_max());
        viewer.on_gesture_start(&[Point::new(10.0, 20.0)]);

        viewer.zoom_in();

        assert!(viewer.state().is_dragging());
        assert_eq!(viewer.state().gesture_anchor(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn touch_during_mouse_drag_is_ignored() {
        let mut viewer = viewer(3);
        viewer.zoom_by(2.0);
        viewer.handle(Message::MousePressed(Point::new(0.0, 0.0)));

        let effect = viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(50.0, 50.0),
        }));
        assert_eq!(effect, Effect::None);
        assert!(viewer.state().is_dragging());

        viewer.handle(Message::CursorMoved(Point::new(30.0, 0.0)));
        assert_eq!(viewer.offset(), Vector::new(30.0, 0.0));
    }

    #[test]
    fn close_drops_gesture_and_contacts() {
        let mut viewer = viewer(2);
        viewer.zoom_by(2.0);
        viewer.handle(Message::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(0.0, 0.0),
        }));

        assert_eq!(viewer.handle(Message::Close), Effect::Close);
        assert!(viewer.state().gesture.is_idle());

        let effect = viewer.handle(Message::Touch(touch::Event::FingerMoved {
            id: finger(1),
            position: Point::new(40.0, 0.0),
        }));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn counter_label_uses_translation() {
        let viewer = viewer(4);
        let i18n = I18n::with_locale("en-US");
        assert_eq!(viewer.counter_label(&i18n), "1 / 4");
    }
}
