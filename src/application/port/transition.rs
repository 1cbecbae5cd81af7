// SPDX-License-Identifier: MPL-2.0
//! View transition port definition.
//!
//! A [`ViewTransition`] optionally wraps an index mutation in an animated
//! transition. When no transition mechanism is available the mutation simply
//! runs immediately, which is never an error.
//!
//! # Design Notes
//!
//! - The mutation is always executed synchronously inside [`ViewTransition::run`]
//! - Completion is reported as a `Send + 'static` future so it can be handed
//!   to the Iced runtime (`Task::perform`) or a Tokio executor
//! - There is no timeout: a transition that never finishes keeps the
//!   controller's upcoming-transition tag set

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::time::Duration;

/// Completion signal of a started transition.
pub type TransitionFinished = BoxFuture<'static, ()>;

/// Port for the optional transition capability.
pub trait ViewTransition {
    /// Runs `mutate`, optionally inside a visual transition.
    ///
    /// Returns `None` when the mutation was applied without a transition, or
    /// the transition's completion future otherwise. Implementations must call
    /// `mutate` exactly once before returning.
    fn run(&mut self, mutate: &mut dyn FnMut()) -> Option<TransitionFinished>;
}

/// Capability used when transitions are unsupported: the mutation runs
/// immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransition;

impl ViewTransition for NoTransition {
    fn run(&mut self, mutate: &mut dyn FnMut()) -> Option<TransitionFinished> {
        mutate();
        None
    }
}

/// Fixed-length transition timed on the Tokio clock.
///
/// A zero duration degrades to an immediate mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedTransition {
    duration: Duration,
}

impl TimedTransition {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl ViewTransition for TimedTransition {
    fn run(&mut self, mutate: &mut dyn FnMut()) -> Option<TransitionFinished> {
        mutate();
        if self.duration.is_zero() {
            return None;
        }
        let duration = self.duration;
        Some(async move { tokio::time::sleep(duration).await }.boxed())
    }
}

impl<T: ViewTransition + ?Sized> ViewTransition for Box<T> {
    fn run(&mut self, mutate: &mut dyn FnMut()) -> Option<TransitionFinished> {
        (**self).run(mutate)
    }
}
