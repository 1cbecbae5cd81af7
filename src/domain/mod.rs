// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gesture`]: Raw input events and validated thresholds
//!   ([`GestureEvent`](gesture::GestureEvent), [`AxisDominance`](gesture::AxisDominance))
//! - [`lightbox`]: Slide position and navigation types
//!   ([`SlideIndex`](lightbox::SlideIndex), [`NavigationIntent`](lightbox::NavigationIntent))

pub mod gesture;
pub mod lightbox;
