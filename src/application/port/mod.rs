// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces the lightbox core talks to.
//! These traits use only domain types, ensuring the navigation logic remains
//! independent of concrete hosts and animation environments.
//!
//! # Available Ports
//!
//! - [`slides`]: Slide count and index ownership
//! - [`transition`]: Optional view transition capability
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Completion signals are `Send + 'static` futures so callers can hand them
//!   to Iced's `Task::perform`
//!
//! # Example
//!
//! ```
//! use iced_lightbox::application::port::{NoTransition, ViewTransition};
//!
//! let mut applied = false;
//! let finished = NoTransition.run(&mut || applied = true);
//! assert!(finished.is_none());
//! assert!(applied);
//! ```

pub mod slides;
pub mod transition;

// Re-export main types for convenience
pub use slides::SlideHost;
pub use transition::{NoTransition, TimedTransition, TransitionFinished, ViewTransition};
