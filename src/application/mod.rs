// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the lightbox core depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts and animation backends implement application layer ports
//! - Presentation layer (`ui::lightbox`) drives the ports

pub mod port;
