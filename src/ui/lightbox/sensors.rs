// SPDX-License-Identifier: MPL-2.0
//! Gesture interpreter.
//!
//! Decodes raw key, pointer and wheel events into at most one
//! [`NavigationIntent`] per coherent gesture.
//!
//! | Input | Intent |
//! |-------|--------|
//! | `Escape` / `ArrowLeft` / `ArrowRight` | close / previous / next |
//! | Horizontal drag past the swipe distance | right → previous, left → next |
//! | Vertical drag past the swipe distance | close |
//! | Tap on the slide surface | close |
//! | Horizontal wheel burst past the wheel distance | left → previous, right → next |

use crate::domain::gesture::{
    GestureEvent, GestureThresholds, KeyCode, PointerInput, PointerTarget, WheelInput,
};
use crate::domain::lightbox::NavigationIntent;
use crate::ui::state::{PointerRelease, PointerTracker, PressOutcome, WheelTracker};

/// Stateful decoder from raw input to navigation intents.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    thresholds: GestureThresholds,
    pointer: PointerTracker,
    wheel: WheelTracker,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            pointer: PointerTracker::default(),
            wheel: WheelTracker::default(),
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Dispatches a raw event to the matching handler.
    pub fn handle(&mut self, event: GestureEvent) -> Option<NavigationIntent> {
        match event {
            GestureEvent::KeyDown(key) => self.on_key_down(key),
            GestureEvent::PointerDown(input) => self.on_pointer_down(input),
            GestureEvent::PointerUp(input) => self.on_pointer_up(input),
            GestureEvent::PointerLeave(input) => self.on_pointer_leave(input),
            GestureEvent::PointerCancel(input) => self.on_pointer_cancel(input),
            GestureEvent::Wheel(input) => self.on_wheel(input),
        }
    }

    pub fn on_key_down(&mut self, key: KeyCode) -> Option<NavigationIntent> {
        match key {
            KeyCode::Escape => Some(NavigationIntent::Close),
            KeyCode::ArrowLeft => Some(NavigationIntent::Previous),
            KeyCode::ArrowRight => Some(NavigationIntent::Next),
            KeyCode::Other => None,
        }
    }

    /// Starts tracking a pointer. A second concurrent pointer cancels the
    /// gesture so pinches are never read as swipes. Never yields an intent.
    pub fn on_pointer_down(&mut self, input: PointerInput) -> Option<NavigationIntent> {
        if self.pointer.press(input) == PressOutcome::Cancelled {
            tracing::debug!(pointer = ?input.id, "multi-touch detected, gesture cancelled");
        }
        None
    }

    pub fn on_pointer_up(&mut self, input: PointerInput) -> Option<NavigationIntent> {
        let release = self.pointer.release(input.id, input.position)?;
        let intent = self.classify_release(release);
        if let Some(intent) = intent {
            tracing::debug!(?intent, dx = release.delta_x, dy = release.delta_y, "pointer gesture");
        }
        intent
    }

    pub fn on_pointer_leave(&mut self, input: PointerInput) -> Option<NavigationIntent> {
        self.on_pointer_up(input)
    }

    pub fn on_pointer_cancel(&mut self, input: PointerInput) -> Option<NavigationIntent> {
        self.on_pointer_up(input)
    }

    pub fn on_wheel(&mut self, input: WheelInput) -> Option<NavigationIntent> {
        let direction = self.wheel.feed(input, &self.thresholds)?;
        tracing::debug!(?direction, "wheel gesture");
        Some(direction.into())
    }

    /// Forgets any gesture in progress, e.g. when the lightbox closes.
    pub fn reset(&mut self) {
        self.pointer.clear();
        self.wheel.reset();
    }

    fn classify_release(&self, release: PointerRelease) -> Option<NavigationIntent> {
        let distance = self.thresholds.swipe_distance.value();
        let dominance = self.thresholds.axis_dominance;
        let delta_x = release.delta_x.abs();
        let delta_y = release.delta_y.abs();

        if delta_x > distance && dominance.dominates(delta_x, delta_y) {
            return Some(if release.delta_x > 0.0 {
                NavigationIntent::Previous
            } else {
                NavigationIntent::Next
            });
        }

        let vertical_swipe = delta_y > distance && dominance.dominates(delta_y, delta_x);
        if vertical_swipe || release.target == PointerTarget::SlideSurface {
            return Some(NavigationIntent::Close);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gesture::{PointerId, Position};
    use std::time::Duration;

    fn pointer(id: PointerId, x: f32, y: f32, target: PointerTarget) -> PointerInput {
        PointerInput::new(id, Position::new(x, y), target)
    }

    fn swipe(
        interpreter: &mut GestureInterpreter,
        target: PointerTarget,
        dx: f32,
        dy: f32,
    ) -> Option<NavigationIntent> {
        interpreter.on_pointer_down(pointer(PointerId::Touch(1), 400.0, 300.0, target));
        interpreter.on_pointer_up(pointer(PointerId::Touch(1), 400.0 + dx, 300.0 + dy, target))
    }

    #[test]
    fn keys_map_to_intents() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            interpreter.on_key_down(KeyCode::Escape),
            Some(NavigationIntent::Close)
        );
        assert_eq!(
            interpreter.on_key_down(KeyCode::ArrowLeft),
            Some(NavigationIntent::Previous)
        );
        assert_eq!(
            interpreter.on_key_down(KeyCode::ArrowRight),
            Some(NavigationIntent::Next)
        );
        assert_eq!(interpreter.on_key_down(KeyCode::Other), None);
    }

    #[test]
    fn swipe_right_goes_to_previous() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::SlideSurface, 100.0, 0.0),
            Some(NavigationIntent::Previous)
        );
    }

    #[test]
    fn swipe_left_goes_to_next() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::SlideSurface, -100.0, 0.0),
            Some(NavigationIntent::Next)
        );
    }

    #[test]
    fn horizontal_swipe_on_chrome_still_navigates() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, -100.0, 10.0),
            Some(NavigationIntent::Next)
        );
    }

    #[test]
    fn vertical_swipe_closes() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, 0.0, -100.0),
            Some(NavigationIntent::Close)
        );
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, 0.0, 100.0),
            Some(NavigationIntent::Close)
        );
    }

    #[test]
    fn tap_on_slide_closes() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::SlideSurface, 2.0, -1.0),
            Some(NavigationIntent::Close)
        );
    }

    #[test]
    fn tap_on_chrome_does_nothing() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, 2.0, -1.0),
            None
        );
    }

    #[test]
    fn diagonal_drag_on_chrome_does_nothing() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, 100.0, 100.0),
            None
        );
    }

    #[test]
    fn short_drag_on_chrome_does_nothing() {
        let mut interpreter = GestureInterpreter::default();
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, 50.0, 0.0),
            None
        );
    }

    #[test]
    fn second_pointer_cancels_gesture() {
        let mut interpreter = GestureInterpreter::default();
        let target = PointerTarget::SlideSurface;

        interpreter.on_pointer_down(pointer(PointerId::Touch(1), 100.0, 100.0, target));
        interpreter.on_pointer_down(pointer(PointerId::Touch(2), 200.0, 100.0, target));

        assert_eq!(
            interpreter.on_pointer_up(pointer(PointerId::Touch(1), 300.0, 100.0, target)),
            None
        );
        assert_eq!(
            interpreter.on_pointer_up(pointer(PointerId::Touch(2), 0.0, 100.0, target)),
            None
        );
    }

    #[test]
    fn leave_and_cancel_finish_the_gesture() {
        let mut interpreter = GestureInterpreter::default();
        let target = PointerTarget::Chrome;

        interpreter.on_pointer_down(pointer(PointerId::Mouse, 300.0, 100.0, target));
        assert_eq!(
            interpreter.on_pointer_leave(pointer(PointerId::Mouse, 100.0, 100.0, target)),
            Some(NavigationIntent::Next)
        );

        interpreter.on_pointer_down(pointer(PointerId::Touch(4), 100.0, 100.0, target));
        assert_eq!(
            interpreter.on_pointer_cancel(pointer(PointerId::Touch(4), 300.0, 100.0, target)),
            Some(NavigationIntent::Previous)
        );
    }

    #[test]
    fn gesture_state_is_cleared_after_release() {
        let mut interpreter = GestureInterpreter::default();
        swipe(&mut interpreter, PointerTarget::SlideSurface, 100.0, 0.0);

        // A duplicate release of the same pointer is ignored
        assert_eq!(
            interpreter.on_pointer_up(pointer(
                PointerId::Touch(1),
                0.0,
                0.0,
                PointerTarget::SlideSurface
            )),
            None
        );
    }

    #[test]
    fn wheel_burst_navigates_once() {
        let mut interpreter = GestureInterpreter::default();
        let intents: Vec<_> = (0..20)
            .filter_map(|i| {
                interpreter.handle(GestureEvent::Wheel(WheelInput::new(
                    -15.0,
                    0.0,
                    Duration::from_millis(i * 10),
                )))
            })
            .collect();
        assert_eq!(intents, vec![NavigationIntent::Previous]);
    }

    #[test]
    fn custom_thresholds_are_respected() {
        let thresholds = GestureThresholds {
            swipe_distance: crate::domain::gesture::SwipeDistance::new(150.0),
            ..GestureThresholds::default()
        };
        let mut interpreter = GestureInterpreter::new(thresholds);
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, -100.0, 0.0),
            None
        );
        assert_eq!(
            swipe(&mut interpreter, PointerTarget::Chrome, -160.0, 0.0),
            Some(NavigationIntent::Next)
        );
    }

    #[test]
    fn reset_drops_tracked_pointer() {
        let mut interpreter = GestureInterpreter::default();
        let target = PointerTarget::Chrome;
        interpreter.on_pointer_down(pointer(PointerId::Mouse, 300.0, 100.0, target));
        interpreter.reset();
        assert_eq!(
            interpreter.on_pointer_up(pointer(PointerId::Mouse, 100.0, 100.0, target)),
            None
        );
    }
}
