// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture state management
//!
//! Remembers the single pointer a swipe is being tracked for, and cancels the
//! gesture when a second pointer joins (pinch, two-finger tap).

use crate::domain::gesture::{PointerId, PointerInput, PointerTarget, Position};

/// Result of releasing the tracked pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRelease {
    /// Horizontal travel, positive to the right.
    pub delta_x: f32,
    /// Vertical travel, positive downwards.
    pub delta_y: f32,
    /// Target the gesture started on.
    pub target: PointerTarget,
}

/// Outcome of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The pointer is now tracked.
    Tracking,
    /// Another pointer was already down; the gesture was cancelled.
    Cancelled,
}

/// Manages the tracked pointer
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Pointer the current gesture belongs to
    pub active: Option<PointerId>,

    /// Position where the gesture started
    pub start_position: Option<Position>,

    /// Target the gesture started on
    pub start_target: Option<PointerTarget>,
}

impl PointerTracker {
    /// Starts tracking `input`, or cancels the gesture if a pointer is
    /// already tracked.
    pub fn press(&mut self, input: PointerInput) -> PressOutcome {
        if self.active.is_some() {
            self.clear();
            return PressOutcome::Cancelled;
        }

        self.active = Some(input.id);
        self.start_position = Some(input.position);
        self.start_target = Some(input.target);
        PressOutcome::Tracking
    }

    /// Ends the gesture if `id` is the tracked pointer and returns its travel.
    ///
    /// Releases from any other pointer are ignored and leave the state intact.
    pub fn release(&mut self, id: PointerId, position: Position) -> Option<PointerRelease> {
        if self.active != Some(id) {
            return None;
        }

        let start = self.start_position;
        let target = self.start_target;
        self.clear();

        let (delta_x, delta_y) = position.delta_from(start?);
        Some(PointerRelease {
            delta_x,
            delta_y,
            target: target?,
        })
    }

    /// Stops tracking
    pub fn clear(&mut self) {
        self.active = None;
        self.start_position = None;
        self.start_target = None;
    }

    /// Whether a pointer is currently tracked
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}
