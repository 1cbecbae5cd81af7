// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` decodes keyboard, pointer and wheel input into lightbox
//! navigation and coordinates index changes with view transitions and exit
//! hooks.
//!
//! The decoding core is framework independent; [`ui::lightbox::EventAdapter`]
//! feeds it from Iced runtime events.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod replay;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
