// SPDX-License-Identifier: MPL-2.0
//! Wheel gesture state management
//!
//! Trackpads and free-spinning wheels deliver one physical swipe as a burst of
//! small deltas followed by a long momentum tail. [`WheelTracker`] folds the
//! burst into a single navigation and then swallows the tail through a
//! cooldown so the same gesture cannot fire twice.

use crate::domain::gesture::{GestureThresholds, WheelInput};
use crate::domain::lightbox::TransitionDirection;
use std::collections::VecDeque;
use std::time::Duration;

/// Suppression record of the last wheel navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    /// Timestamp of the event that fired the navigation.
    pub started_at: Duration,
    /// Horizontal delta of the latest event attributed to that gesture.
    pub momentum: f32,
}

impl Cooldown {
    /// Whether `input` reads as the decaying tail of the consumed gesture.
    fn absorbs(&self, input: &WheelInput, thresholds: &GestureThresholds) -> bool {
        let same_direction = input.delta_x * self.momentum > 0.0;
        if !same_direction {
            return false;
        }

        let within_cooldown = input.timestamp <= self.started_at + thresholds.wheel_cooldown;
        let decaying = input.timestamp <= self.started_at + thresholds.wheel_decay
            && input.delta_x.abs() < thresholds.momentum_growth * self.momentum.abs();

        within_cooldown || decaying
    }
}

/// Accumulates wheel samples and decides when they add up to a swipe.
#[derive(Debug, Clone, Default)]
pub struct WheelTracker {
    buffer: VecDeque<WheelInput>,
    cooldown: Option<Cooldown>,
}

impl WheelTracker {
    /// Feeds one wheel sample; returns a direction when the buffered samples
    /// form a dominant horizontal swipe.
    pub fn feed(
        &mut self,
        input: WheelInput,
        thresholds: &GestureThresholds,
    ) -> Option<TransitionDirection> {
        if let Some(cooldown) = self.cooldown.as_mut() {
            if cooldown.absorbs(&input, thresholds) {
                cooldown.momentum = input.delta_x;
                tracing::trace!(delta_x = input.delta_x, "wheel event absorbed by cooldown");
                return None;
            }
            self.cooldown = None;
        }

        self.evict_expired(input.timestamp, thresholds.wheel_window);
        self.buffer.push_back(input);

        let sum_x: f32 = self.buffer.iter().map(|sample| sample.delta_x).sum();
        let sum_y: f32 = self.buffer.iter().map(|sample| sample.delta_y).sum::<f32>().abs();

        if sum_x.abs() > thresholds.wheel_distance.value()
            && thresholds.axis_dominance.dominates(sum_x.abs(), sum_y)
        {
            self.buffer.clear();
            self.cooldown = Some(Cooldown {
                started_at: input.timestamp,
                momentum: input.delta_x,
            });

            return Some(if sum_x < 0.0 {
                TransitionDirection::Previous
            } else {
                TransitionDirection::Next
            });
        }

        None
    }

    /// Drops samples that are `window` or more older than `now`.
    fn evict_expired(&mut self, now: Duration, window: Duration) {
        let Some(horizon) = now.checked_sub(window) else {
            return;
        };
        self.buffer.retain(|sample| sample.timestamp > horizon);
    }

    /// Number of buffered samples.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Active cooldown, if any.
    #[must_use]
    pub fn cooldown(&self) -> Option<Cooldown> {
        self.cooldown
    }

    /// Forgets buffered samples and any cooldown.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cooldown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(delta_x: f32, delta_y: f32, at_ms: u64) -> WheelInput {
        WheelInput::new(delta_x, delta_y, Duration::from_millis(at_ms))
    }

    #[test]
    fn single_large_event_fires_next() {
        let mut tracker = WheelTracker::default();
        let fired = tracker.feed(wheel(200.0, 0.0, 0), &GestureThresholds::default());

        assert_eq!(fired, Some(TransitionDirection::Next));
        assert_eq!(tracker.buffered(), 0);
        assert_eq!(
            tracker.cooldown(),
            Some(Cooldown {
                started_at: Duration::ZERO,
                momentum: 200.0,
            })
        );
    }

    #[test]
    fn negative_sum_fires_previous() {
        let mut tracker = WheelTracker::default();
        let fired = tracker.feed(wheel(-200.0, 0.0, 0), &GestureThresholds::default());
        assert_eq!(fired, Some(TransitionDirection::Previous));
    }

    #[test]
    fn burst_of_small_events_fires_once() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        let fired: Vec<_> = (0..30)
            .filter_map(|i| tracker.feed(wheel(10.0, 1.0, i * 16), &thresholds))
            .collect();

        assert_eq!(fired, vec![TransitionDirection::Next]);
    }

    #[test]
    fn accumulation_waits_for_threshold() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        assert!(tracker.feed(wheel(60.0, 0.0, 0), &thresholds).is_none());
        assert_eq!(tracker.buffered(), 1);
        assert_eq!(
            tracker.feed(wheel(60.0, 0.0, 100), &thresholds),
            Some(TransitionDirection::Next)
        );
    }

    #[test]
    fn vertical_scroll_does_not_navigate() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        assert!(tracker.feed(wheel(150.0, 150.0, 0), &thresholds).is_none());
        assert!(tracker.feed(wheel(0.0, 400.0, 10), &thresholds).is_none());
    }

    #[test]
    fn vertical_sum_is_signed_before_magnitude() {
        // Up and down scrolling cancel out, leaving the horizontal sum dominant
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        assert!(tracker.feed(wheel(60.0, 100.0, 0), &thresholds).is_none());
        assert_eq!(
            tracker.feed(wheel(60.0, -100.0, 10), &thresholds),
            Some(TransitionDirection::Next)
        );
    }

    #[test]
    fn samples_older_than_window_are_evicted() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        assert!(tracker.feed(wheel(60.0, 0.0, 0), &thresholds).is_none());
        // Exactly one window later the first sample no longer counts
        assert!(tracker.feed(wheel(60.0, 0.0, 3_000), &thresholds).is_none());
        assert_eq!(tracker.buffered(), 1);
    }

    #[test]
    fn samples_inside_window_are_kept() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        assert!(tracker.feed(wheel(60.0, 0.0, 0), &thresholds).is_none());
        assert_eq!(
            tracker.feed(wheel(60.0, 0.0, 2_999), &thresholds),
            Some(TransitionDirection::Next)
        );
    }

    #[test]
    fn cooldown_swallows_same_direction_within_short_window() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        // Even a stronger event is swallowed during the short window
        assert!(tracker.feed(wheel(500.0, 0.0, 400), &thresholds).is_none());
        assert_eq!(tracker.buffered(), 0);
        assert_eq!(tracker.cooldown().map(|c| c.momentum), Some(500.0));
        assert_eq!(
            tracker.cooldown().map(|c| c.started_at),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn cooldown_swallows_decaying_momentum() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        assert!(tracker.feed(wheel(200.0, 0.0, 800), &thresholds).is_none());
        assert!(tracker.feed(wheel(150.0, 0.0, 900), &thresholds).is_none());
        assert!(tracker.cooldown().is_some());
    }

    #[test]
    fn accelerating_event_after_short_window_starts_new_gesture() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        // 250 >= 1.2 * 200, so this is a fresh swipe rather than decay
        assert_eq!(
            tracker.feed(wheel(250.0, 0.0, 700), &thresholds),
            Some(TransitionDirection::Next)
        );
    }

    #[test]
    fn opposite_direction_clears_cooldown() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        assert_eq!(
            tracker.feed(wheel(-200.0, 0.0, 100), &thresholds),
            Some(TransitionDirection::Previous)
        );
    }

    #[test]
    fn cooldown_expires_after_decay_window() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        assert!(tracker.feed(wheel(50.0, 0.0, 1_200), &thresholds).is_none());
        assert!(tracker.cooldown().is_none());
        assert_eq!(tracker.buffered(), 1);
    }

    #[test]
    fn zero_delta_event_is_not_a_continuation() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();

        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        assert!(tracker.feed(wheel(0.0, 5.0, 100), &thresholds).is_none());
        assert!(tracker.cooldown().is_none());
    }

    #[test]
    fn reset_forgets_everything() {
        let thresholds = GestureThresholds::default();
        let mut tracker = WheelTracker::default();
        tracker.feed(wheel(200.0, 0.0, 0), &thresholds);
        tracker.feed(wheel(-20.0, 0.0, 10), &thresholds);

        tracker.reset();
        assert_eq!(tracker.buffered(), 0);
        assert!(tracker.cooldown().is_none());
    }
}
