// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Pointer**: Swipe distance bounds
//! - **Axis**: Axis dominance ratio bounds
//! - **Wheel**: Accumulation distance, buffer window and cooldown windows

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Minimum pointer travel (in pixels) before a drag counts as a swipe.
pub const DEFAULT_SWIPE_DISTANCE_PX: f32 = 50.0;

/// Minimum allowed swipe distance.
pub const MIN_SWIPE_DISTANCE_PX: f32 = 1.0;

/// Maximum allowed swipe distance.
pub const MAX_SWIPE_DISTANCE_PX: f32 = 1000.0;

// ==========================================================================
// Axis Defaults
// ==========================================================================

/// Factor by which one axis must exceed the other to own the gesture.
pub const DEFAULT_AXIS_DOMINANCE: f32 = 1.2;

/// Minimum axis dominance ratio. Below 1.0 both axes could dominate at once.
pub const MIN_AXIS_DOMINANCE: f32 = 1.0;

/// Maximum axis dominance ratio.
pub const MAX_AXIS_DOMINANCE: f32 = 5.0;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Accumulated horizontal wheel delta required to navigate.
pub const DEFAULT_WHEEL_DISTANCE: f32 = 100.0;

/// Minimum allowed wheel distance.
pub const MIN_WHEEL_DISTANCE: f32 = 1.0;

/// Maximum allowed wheel distance.
pub const MAX_WHEEL_DISTANCE: f32 = 5000.0;

/// How long wheel samples stay in the accumulation buffer (in milliseconds).
pub const DEFAULT_WHEEL_WINDOW_MS: u64 = 3_000;

/// Window after a wheel navigation during which any same-direction event is
/// treated as the tail of the same gesture (in milliseconds).
pub const DEFAULT_WHEEL_COOLDOWN_MS: u64 = 500;

/// Extended window during which decaying same-direction events are still
/// swallowed (in milliseconds).
pub const DEFAULT_WHEEL_DECAY_MS: u64 = 1_000;

/// Upper bound for any wheel timing window (in milliseconds).
pub const MAX_WHEEL_WINDOW_MS: u64 = 60_000;

/// A wheel event inside the decay window is a continuation only while its
/// delta stays below this multiple of the recorded momentum.
pub const MOMENTUM_GROWTH_RATIO: f32 = 1.2;

/// Pixels per line when a wheel reports line-based deltas.
pub const DEFAULT_WHEEL_LINE_HEIGHT_PX: f32 = 40.0;

// ==========================================================================
// Tests
// ==========================================================================
