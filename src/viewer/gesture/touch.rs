// SPDX-License-Identifier: MPL-2.0
//! Tracks active contact points from host touch events.

use iced_core::touch::{self, Finger};
use iced_core::Point;

/// How the set of contacts changed after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactChange {
    /// A finger touched down.
    Added,
    /// A known finger moved.
    Moved,
    /// A finger was lifted at this position.
    Lifted(Point),
    /// The host cancelled a finger.
    Lost,
    /// Event for an unknown finger, or a duplicate press.
    Ignored,
}

/// Active contact points, in touch-down order.
#[derive(Debug, Clone, Default)]
pub struct Contacts {
    fingers: Vec<(Finger, Point)>,
}

impl Contacts {
    /// Applies one host touch event.
    pub fn apply(&mut self, event: &touch::Event) -> ContactChange {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.position_of(*id).is_some() {
                    return ContactChange::Ignored;
                }
                self.fingers.push((*id, *position));
                ContactChange::Added
            }
            touch::Event::FingerMoved { id, position } => {
                match self.fingers.iter_mut().find(|(finger, _)| finger == id) {
                    Some((_, current)) => {
                        *current = *position;
                        ContactChange::Moved
                    }
                    None => ContactChange::Ignored,
                }
            }
            touch::Event::FingerLifted { id, position } => {
                if self.remove(*id) {
                    ContactChange::Lifted(*position)
                } else {
                    ContactChange::Ignored
                }
            }
            touch::Event::FingerLost { id, .. } => {
                if self.remove(*id) {
                    ContactChange::Lost
                } else {
                    ContactChange::Ignored
                }
            }
        }
    }

    fn remove(&mut self, id: Finger) -> bool {
        let before = self.fingers.len();
        self.fingers.retain(|(finger, _)| *finger != id);
        self.fingers.len() < before
    }

    /// Current contact positions, in touch-down order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, position)| *position).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    pub fn clear(&mut self) {
        self.fingers.clear();
    }

    fn position_of(&self, id: Finger) -> Option<Point> {
        self.fingers
            .iter()
            .find(|(finger, _)| *finger == id)
            .map(|(_, position)| *position)
    }
}
