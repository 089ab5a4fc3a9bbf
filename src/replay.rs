// SPDX-License-Identifier: MPL-2.0
//! Gesture scripts: recorded input replayed against a [`Viewer`].
//!
//! A script is a TOML file with one `[[steps]]` table per input event:
//!
//! ```toml
//! [[steps]]
//! kind = "loaded"
//! width = 600.0
//! height = 600.0
//!
//! [[steps]]
//! kind = "press"
//! finger = 1
//! x = 100.0
//! y = 150.0
//!
//! [[steps]]
//! kind = "key"
//! key = "ArrowRight"
//! ```
//!
//! `press` / `move` / `release` without a `finger` are mouse events.
//! A touch `release` must give the `x`/`y` where the finger lifted.

use crate::error::{Error, ManifestError, Result};
use crate::viewer::{Effect, Message, Transform, Viewer};
use iced_core::keyboard::{self, key::Named};
use iced_core::touch::{self, Finger};
use iced_core::{mouse, Point, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    Press {
        x: f32,
        y: f32,
        #[serde(default)]
        finger: Option<u64>,
    },
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        finger: Option<u64>,
    },
    /// A touch release needs the lift position; a mouse release ignores it.
    Release {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
        #[serde(default)]
        finger: Option<u64>,
    },
    Wheel {
        lines: f32,
    },
    Key {
        key: String,
    },
    ZoomIn,
    ZoomOut,
    Reset,
    Next,
    Previous,
    GoTo {
        index: usize,
    },
    Loaded {
        width: f32,
        height: f32,
    },
    Failed,
    Resize {
        width: f32,
        height: f32,
    },
    Close,
}

impl Step {
    /// Converts the step into the viewer message it stands for.
    pub fn to_message(&self) -> std::result::Result<Message, String> {
        let message = match self {
            Step::Press { x, y, finger } => {
                let position = Point::new(*x, *y);
                match finger {
                    Some(id) => Message::Touch(touch::Event::FingerPressed {
                        id: Finger(*id),
                        position,
                    }),
                    None => Message::MousePressed(position),
                }
            }
            Step::Move { x, y, finger } => {
                let position = Point::new(*x, *y);
                match finger {
                    Some(id) => Message::Touch(touch::Event::FingerMoved {
                        id: Finger(*id),
                        position,
                    }),
                    None => Message::CursorMoved(position),
                }
            }
            Step::Release { x, y, finger } => match (finger, x, y) {
                (Some(id), Some(x), Some(y)) => Message::Touch(touch::Event::FingerLifted {
                    id: Finger(*id),
                    position: Point::new(*x, *y),
                }),
                (Some(_), _, _) => return Err("touch release needs x and y".to_string()),
                (None, _, _) => Message::MouseReleased,
            },
            Step::Wheel { lines } => {
                Message::WheelScrolled(mouse::ScrollDelta::Lines { x: 0.0, y: *lines })
            }
            Step::Key { key } => Message::KeyPressed(parse_key(key)?),
            Step::ZoomIn => Message::ZoomIn,
            Step::ZoomOut => Message::ZoomOut,
            Step::Reset => Message::ResetZoom,
            Step::Next => Message::NavigateNext,
            Step::Previous => Message::NavigatePrevious,
            Step::GoTo { index } => Message::GoTo(*index),
            Step::Loaded { width, height } => {
                Message::ImageLoaded(positive_size(*width, *height)?)
            }
            Step::Failed => Message::ImageFailed,
            Step::Resize { width, height } => {
                Message::ViewportResized(positive_size(*width, *height)?)
            }
            Step::Close => Message::Close,
        };
        Ok(message)
    }
}

fn parse_key(key: &str) -> std::result::Result<keyboard::Key, String> {
    match key {
        "ArrowLeft" => Ok(keyboard::Key::Named(Named::ArrowLeft)),
        "ArrowRight" => Ok(keyboard::Key::Named(Named::ArrowRight)),
        "Escape" => Ok(keyboard::Key::Named(Named::Escape)),
        other if other.chars().count() == 1 => Ok(keyboard::Key::Character(other.into())),
        other => Err(format!("unknown key '{other}'")),
    }
}

fn positive_size(width: f32, height: f32) -> std::result::Result<Size, String> {
    if width > 0.0 && height > 0.0 {
        Ok(Size::new(width, height))
    } else {
        Err(format!("size must be positive, got {width}x{height}"))
    }
}

/// Ordered list of recorded steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|err| Error::from(ManifestError::Parse(err.message().to_string())))
    }

    /// Reads and parses a script file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Converts every step, failing on the first malformed one.
    pub fn messages(&self) -> Result<Vec<Message>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                step.to_message()
                    .map_err(|reason| Error::from(ManifestError::InvalidStep(index, reason)))
            })
            .collect()
    }
}

/// Viewer state observed after one replayed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step: usize,
    pub effect: Effect,
    pub counter: (usize, usize),
    pub transform: Transform,
}

/// Replays `script` against `viewer`, stopping after a close.
pub fn replay(viewer: &mut Viewer, script: &Script) -> Result<Vec<Frame>> {
    let messages = script.messages()?;
    let mut frames = Vec::with_capacity(messages.len());

    for (step, message) in messages.into_iter().enumerate() {
        let effect = viewer.handle(message);
        let closed = effect == Effect::Close;
        frames.push(Frame {
            step,
            effect,
            counter: viewer.counter(),
            transform: viewer.transform(),
        });
        if closed {
            tracing::debug!(step, "script closed the viewer");
            break;
        }
    }

    Ok(frames)
}
