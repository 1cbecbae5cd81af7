// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.
//!
//! This module provides type-safe wrappers for gesture tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Pointer swipe distance bounds (1 to 1000 pixels).
pub mod swipe_bounds {
    /// Minimum swipe distance in pixels.
    pub const MIN: f32 = 1.0;
    /// Maximum swipe distance in pixels.
    pub const MAX: f32 = 1000.0;
    /// Default swipe distance in pixels.
    pub const DEFAULT: f32 = 50.0;
}

/// Accumulated wheel distance bounds.
pub mod wheel_bounds {
    /// Minimum wheel distance.
    pub const MIN: f32 = 1.0;
    /// Maximum wheel distance.
    pub const MAX: f32 = 5000.0;
    /// Default wheel distance.
    pub const DEFAULT: f32 = 100.0;
}

/// Axis dominance ratio bounds (1.0 to 5.0).
pub mod axis_bounds {
    /// Minimum ratio.
    pub const MIN: f32 = 1.0;
    /// Maximum ratio.
    pub const MAX: f32 = 5.0;
    /// Default ratio.
    pub const DEFAULT: f32 = 1.2;
}

fn clamp_or_default(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

// =============================================================================
// SwipeDistance
// =============================================================================

/// Minimum pointer travel in pixels before a drag counts as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDistance(f32);

impl SwipeDistance {
    /// Creates a new swipe distance, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(clamp_or_default(
            pixels,
            swipe_bounds::MIN,
            swipe_bounds::MAX,
            swipe_bounds::DEFAULT,
        ))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeDistance {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// WheelDistance
// =============================================================================

/// Accumulated horizontal wheel delta required to navigate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDistance(f32);

impl WheelDistance {
    /// Creates a new wheel distance, clamping the value to the valid range.
    #[must_use]
    pub fn new(units: f32) -> Self {
        Self(clamp_or_default(
            units,
            wheel_bounds::MIN,
            wheel_bounds::MAX,
            wheel_bounds::DEFAULT,
        ))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelDistance {
    fn default() -> Self {
        Self(wheel_bounds::DEFAULT)
    }
}

// =============================================================================
// AxisDominance
// =============================================================================

/// Factor by which one axis must exceed the other to own a gesture.
///
/// # Example
///
/// ```
/// use iced_lightbox::domain::gesture::AxisDominance;
///
/// let ratio = AxisDominance::default();
/// assert!(ratio.dominates(100.0, 80.0));
/// assert!(!ratio.dominates(100.0, 90.0));
///
/// // Values below 1.0 are clamped so both axes can never dominate at once
/// assert_eq!(AxisDominance::new(0.5).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDominance(f32);

impl AxisDominance {
    /// Creates a new ratio, clamping the value to the valid range.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        Self(clamp_or_default(
            ratio,
            axis_bounds::MIN,
            axis_bounds::MAX,
            axis_bounds::DEFAULT,
        ))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if `primary` strictly exceeds `ratio × secondary`.
    /// Both arguments are magnitudes.
    #[must_use]
    pub fn dominates(self, primary: f32, secondary: f32) -> bool {
        primary > self.0 * secondary
    }
}

impl Default for AxisDominance {
    fn default() -> Self {
        Self(axis_bounds::DEFAULT)
    }
}

// =============================================================================
// GestureThresholds
// =============================================================================

/// Complete tuning set for the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Pointer travel required for a swipe.
    pub swipe_distance: SwipeDistance,
    /// Accumulated horizontal wheel delta required to navigate.
    pub wheel_distance: WheelDistance,
    /// Axis dominance ratio shared by pointer and wheel decoding.
    pub axis_dominance: AxisDominance,
    /// How long wheel samples are kept for accumulation.
    pub wheel_window: Duration,
    /// Unconditional suppression window after a wheel navigation.
    pub wheel_cooldown: Duration,
    /// Extended suppression window for decaying momentum.
    pub wheel_decay: Duration,
    /// A decay-window event is swallowed only while its delta stays below
    /// this multiple of the recorded momentum.
    pub momentum_growth: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            swipe_distance: SwipeDistance::default(),
            wheel_distance: WheelDistance::default(),
            axis_dominance: AxisDominance::default(),
            wheel_window: Duration::from_millis(3_000),
            wheel_cooldown: Duration::from_millis(500),
            wheel_decay: Duration::from_millis(1_000),
            momentum_growth: 1.2,
        }
    }
}
