// SPDX-License-Identifier: MPL-2.0
//! Translation of Iced runtime events into gesture events.
//!
//! Iced reports mouse buttons without a position and wheel deltas in content
//! direction, so the adapter keeps the last cursor position, converts line
//! deltas to pixels and flips wheel signs to the "scroll towards" convention
//! the interpreter expects.

use crate::domain::gesture::{
    GestureEvent, KeyCode, PointerId, PointerInput, PointerTarget, Position, WheelInput,
};
use iced_core::{keyboard, mouse, touch, Event, Point, Rectangle};
use std::time::Instant;

impl From<&keyboard::Key> for KeyCode {
    fn from(key: &keyboard::Key) -> Self {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => KeyCode::Escape,
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => KeyCode::ArrowLeft,
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => KeyCode::ArrowRight,
            _ => KeyCode::Other,
        }
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Position::new(point.x, point.y)
    }
}

/// Stateful translator from [`iced_core::Event`] to [`GestureEvent`].
#[derive(Debug, Clone)]
pub struct EventAdapter {
    origin: Instant,
    line_height: f32,
    cursor: Option<Point>,
    surface: Option<Rectangle>,
    chrome: Vec<Rectangle>,
}

impl EventAdapter {
    /// Creates an adapter whose wheel timestamps count from `origin`.
    #[must_use]
    pub fn new(origin: Instant, line_height: f32) -> Self {
        Self {
            origin,
            line_height,
            cursor: None,
            surface: None,
            chrome: Vec::new(),
        }
    }

    /// Bounds of the slide surface. Until set, the whole window counts as
    /// slide surface.
    pub fn set_surface(&mut self, bounds: Rectangle) {
        self.surface = Some(bounds);
    }

    /// Bounds of interactive chrome (buttons, custom controls) laid over the
    /// slide surface. Presses inside them never count as slide taps.
    pub fn set_chrome(&mut self, bounds: impl IntoIterator<Item = Rectangle>) {
        self.chrome = bounds.into_iter().collect();
    }

    /// Last known cursor position.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Translates one runtime event. Returns `None` for events that carry no
    /// gesture information.
    pub fn translate(&mut self, event: &Event, now: Instant) -> Option<GestureEvent> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(GestureEvent::KeyDown(KeyCode::from(key)))
            }
            Event::Mouse(mouse_event) => self.translate_mouse(mouse_event, now),
            Event::Touch(touch_event) => self.translate_touch(touch_event),
            _ => None,
        }
    }

    fn translate_mouse(&mut self, event: &mouse::Event, now: Instant) -> Option<GestureEvent> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let input = self.pointer_input(PointerId::Mouse, self.cursor?);
                Some(GestureEvent::PointerDown(input))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let input = self.pointer_input(PointerId::Mouse, self.cursor?);
                Some(GestureEvent::PointerUp(input))
            }
            mouse::Event::CursorLeft => {
                let position = self.cursor.take()?;
                Some(GestureEvent::PointerLeave(
                    self.pointer_input(PointerId::Mouse, position),
                ))
            }
            mouse::Event::WheelScrolled { delta } => {
                let (delta_x, delta_y) = self.wheel_delta(delta);
                Some(GestureEvent::Wheel(WheelInput::new(
                    delta_x,
                    delta_y,
                    now.saturating_duration_since(self.origin),
                )))
            }
            _ => None,
        }
    }

    fn translate_touch(&self, event: &touch::Event) -> Option<GestureEvent> {
        match event {
            touch::Event::FingerPressed { id, position } => Some(GestureEvent::PointerDown(
                self.pointer_input(PointerId::Touch(id.0), *position),
            )),
            touch::Event::FingerLifted { id, position } => Some(GestureEvent::PointerUp(
                self.pointer_input(PointerId::Touch(id.0), *position),
            )),
            touch::Event::FingerLost { id, position } => Some(GestureEvent::PointerCancel(
                self.pointer_input(PointerId::Touch(id.0), *position),
            )),
            touch::Event::FingerMoved { .. } => None,
        }
    }

    fn pointer_input(&self, id: PointerId, point: Point) -> PointerInput {
        PointerInput::new(id, point.into(), self.classify(point))
    }

    fn classify(&self, point: Point) -> PointerTarget {
        let on_surface = self.surface.is_none_or(|surface| surface.contains(point));
        let on_chrome = self.chrome.iter().any(|bounds| bounds.contains(point));

        if on_surface && !on_chrome {
            PointerTarget::SlideSurface
        } else {
            PointerTarget::Chrome
        }
    }

    /// Converts a wheel delta to pixels in "scroll towards" direction.
    fn wheel_delta(&self, delta: &mouse::ScrollDelta) -> (f32, f32) {
        let (x, y) = match *delta {
            mouse::ScrollDelta::Lines { x, y } => (x * self.line_height, y * self.line_height),
            mouse::ScrollDelta::Pixels { x, y } => (x, y),
        };
        (-x, -y)
    }
}
