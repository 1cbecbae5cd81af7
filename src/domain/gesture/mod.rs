// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Raw input events as seen by the gesture interpreter, plus the validated
//! thresholds that tune it. Framework events are translated into these types
//! at the edge (see `ui::lightbox::events`).

pub mod newtypes;

use std::time::Duration;

pub use newtypes::{AxisDominance, GestureThresholds, SwipeDistance, WheelDistance};

/// Identity of a pointer taking part in a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The system mouse cursor.
    Mouse,
    /// A finger on a touch surface.
    Touch(u64),
}

/// What the pointer landed on when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The slide container or backdrop; a plain tap here closes the lightbox.
    SlideSurface,
    /// Buttons, custom controls or anything outside the slide surface.
    Chrome,
}

/// Position in window coordinates (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Signed displacement from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Position) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Pointer press, release, leave or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub position: Position,
    pub target: PointerTarget,
}

impl PointerInput {
    #[must_use]
    pub fn new(id: PointerId, position: Position, target: PointerTarget) -> Self {
        Self {
            id,
            position,
            target,
        }
    }
}

/// Wheel or trackpad scroll sample.
///
/// Deltas follow the DOM convention: positive `delta_x` scrolls towards the
/// right (next slide), positive `delta_y` scrolls down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_x: f32,
    pub delta_y: f32,
    /// Monotonic time of the event, relative to an arbitrary origin.
    pub timestamp: Duration,
}

impl WheelInput {
    #[must_use]
    pub fn new(delta_x: f32, delta_y: f32, timestamp: Duration) -> Self {
        Self {
            delta_x,
            delta_y,
            timestamp,
        }
    }
}

/// Keys the lightbox cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any other key; ignored by the interpreter.
    Other,
}

impl KeyCode {
    /// Parses a DOM-style key name (`"Escape"`, `"ArrowLeft"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// A raw input event fed to the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    KeyDown(KeyCode),
    PointerDown(PointerInput),
    PointerUp(PointerInput),
    PointerLeave(PointerInput),
    PointerCancel(PointerInput),
    Wheel(WheelInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_from_is_signed() {
        let start = Position::new(100.0, 100.0);
        assert_eq!(Position::new(40.0, 130.0).delta_from(start), (-60.0, 30.0));
    }

    #[test]
    fn key_names_map_to_codes() {
        assert_eq!(KeyCode::from_name("Escape"), KeyCode::Escape);
        assert_eq!(KeyCode::from_name("Esc"), KeyCode::Escape);
        assert_eq!(KeyCode::from_name("ArrowLeft"), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_name("ArrowRight"), KeyCode::ArrowRight);
        assert_eq!(KeyCode::from_name("ArrowUp"), KeyCode::Other);
        assert_eq!(KeyCode::from_name("a"), KeyCode::Other);
    }
}
