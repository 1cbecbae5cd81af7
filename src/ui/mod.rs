// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The lightbox follows the Elm-style "state down, messages up" pattern: the
//! host forwards runtime events as messages and carries out the returned
//! effects.
//!
//! - [`lightbox`] - Lightbox component, gesture interpreter and navigation controller
//! - [`state`] - Pointer and wheel tracking state used by the interpreter

pub mod lightbox;
pub mod state;
