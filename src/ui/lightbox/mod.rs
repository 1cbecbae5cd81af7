// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation: gesture decoding, index control and exit hooks.

pub mod component;
pub mod controller;
pub mod events;
pub mod exit_hooks;
pub mod handle;
pub mod sensors;

pub use component::{Effect, Lightbox, Message, SlideDeck};
pub use controller::{
    CloseDrain, CloseTicket, Navigation, NavigationController, PendingTransition,
    TransitionTicket,
};
pub use events::EventAdapter;
pub use exit_hooks::{ExitHook, ExitHookDisposer, ExitHookFuture, ExitHookRegistry};
pub use handle::ControllerHandle;
pub use sensors::GestureInterpreter;
