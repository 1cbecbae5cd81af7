// SPDX-License-Identifier: MPL-2.0
//! Gesture tracking state
//!
//! Per-gesture bookkeeping kept apart from the interpreter that reads it.

pub mod pointer;
pub mod wheel;

// Re-export commonly used types for convenience
pub use pointer::{PointerRelease, PointerTracker, PressOutcome};
pub use wheel::{Cooldown, WheelTracker};
