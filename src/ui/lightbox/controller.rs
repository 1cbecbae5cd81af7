// SPDX-License-Identifier: MPL-2.0
//! Navigation controller.
//!
//! Turns `prev` / `next` / `close` intents into index mutations on the host,
//! coordinating them with the optional view transition and the exit hooks
//! that gate closing.
//!
//! ## Lifecycle
//!
//! ```text
//! prev/next ──► upcoming = Some(dir) ──► ViewTransition::run(set_index)
//!                                          │
//!                     no transition ◄──────┴──────► PendingTransition
//!                     upcoming = None               settled() ─► settle(ticket)
//!                                                                upcoming = None
//!
//! close ──► invoke hooks ──► CloseDrain::settled() ──► finish_close
//!                                                      clear hooks, index = Closed
//! ```
//!
//! Completion futures are returned to the caller instead of being spawned,
//! so the host decides how to await them (Iced `Task::perform`, Tokio, ...).

use super::exit_hooks::{ExitHook, ExitHookDisposer, ExitHookFuture, ExitHookRegistry};
use super::handle::ControllerHandle;
use crate::application::port::{SlideHost, TransitionFinished, ViewTransition};
use crate::domain::lightbox::{SlideIndex, TransitionDirection};
use futures_util::future::join_all;
use futures_util::FutureExt;
use std::cell::Cell;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

/// Identifies one started transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

/// Proof that a close drain has settled; consumed by
/// [`NavigationController::finish_close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(());

/// A transition whose completion the host must await.
pub struct PendingTransition {
    ticket: TransitionTicket,
    direction: TransitionDirection,
    target: SlideIndex,
    finished: TransitionFinished,
}

impl PendingTransition {
    #[must_use]
    pub fn ticket(&self) -> TransitionTicket {
        self.ticket
    }

    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    /// Index the transition moved to. The host already holds it.
    #[must_use]
    pub fn target(&self) -> SlideIndex {
        self.target
    }

    /// Resolves when the transition finishes.
    pub async fn settled(self) -> TransitionTicket {
        self.finished.await;
        self.ticket
    }
}

impl fmt::Debug for PendingTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTransition")
            .field("ticket", &self.ticket)
            .field("direction", &self.direction)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Outcome of a `prev` / `next` request.
#[derive(Debug)]
pub enum Navigation {
    /// Nothing to navigate to (single slide, empty deck or closed lightbox).
    Ignored,
    /// The index changed without a transition.
    Completed(SlideIndex),
    /// The index changed inside a transition that is still running.
    Pending(PendingTransition),
}

/// Exit hooks invoked by a close, awaiting settlement.
pub struct CloseDrain {
    pending: Vec<ExitHookFuture>,
}

impl CloseDrain {
    /// Number of hooks this close is waiting on.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.pending.len()
    }

    /// Waits for every hook to settle. Failures are logged and swallowed.
    pub async fn settled(self) -> CloseTicket {
        let outcomes = join_all(
            self.pending
                .into_iter()
                .map(|hook| AssertUnwindSafe(hook).catch_unwind()),
        )
        .await;

        for outcome in outcomes {
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => tracing::warn!(error = %err, "exit hook failed, closing anyway"),
                Err(_) => tracing::warn!("exit hook panicked, closing anyway"),
            }
        }

        CloseTicket(())
    }
}

impl fmt::Debug for CloseDrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseDrain")
            .field("hooks", &self.pending.len())
            .finish()
    }
}

/// Owns the upcoming-transition tag and the exit hook registry.
///
/// The current index lives in the [`SlideHost`]; the controller only reads it
/// and writes it through the host's setter.
#[derive(Debug, Default)]
pub struct NavigationController {
    upcoming: Rc<Cell<Option<TransitionDirection>>>,
    latest_ticket: u64,
    exit_hooks: ExitHookRegistry,
    closing: bool,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    pub fn prev<H, T>(&mut self, host: &mut H, transition: &mut T) -> Navigation
    where
        H: SlideHost + ?Sized,
        T: ViewTransition + ?Sized,
    {
        self.navigate(TransitionDirection::Previous, host, transition)
    }

    /// Moves to the next slide, wrapping from the last to the first.
    pub fn next<H, T>(&mut self, host: &mut H, transition: &mut T) -> Navigation
    where
        H: SlideHost + ?Sized,
        T: ViewTransition + ?Sized,
    {
        self.navigate(TransitionDirection::Next, host, transition)
    }

    /// Moves one slide in `direction`.
    ///
    /// A request while another transition is pending is not blocked; it
    /// overwrites the upcoming-transition tag.
    pub fn navigate<H, T>(
        &mut self,
        direction: TransitionDirection,
        host: &mut H,
        transition: &mut T,
    ) -> Navigation
    where
        H: SlideHost + ?Sized,
        T: ViewTransition + ?Sized,
    {
        let Some(target) = host.index().step(direction, host.slide_count()) else {
            tracing::trace!(?direction, "navigation ignored");
            return Navigation::Ignored;
        };

        self.upcoming.set(Some(direction));
        self.latest_ticket += 1;
        let ticket = TransitionTicket(self.latest_ticket);

        match transition.run(&mut || host.set_index(target)) {
            None => {
                self.upcoming.set(None);
                Navigation::Completed(target)
            }
            Some(finished) => Navigation::Pending(PendingTransition {
                ticket,
                direction,
                target,
                finished,
            }),
        }
    }

    /// Reports that a transition finished.
    ///
    /// Clears the upcoming-transition tag when `ticket` belongs to the most
    /// recent transition and returns whether it did. A superseded transition
    /// settling late leaves the newer tag in place.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::trace!(?ticket, "stale transition settled");
            return false;
        }
        self.upcoming.set(None);
        true
    }

    /// Direction of the transition in flight, if any.
    #[must_use]
    pub fn upcoming_transition(&self) -> Option<TransitionDirection> {
        self.upcoming.get()
    }

    /// Starts closing: invokes every registered exit hook.
    ///
    /// Returns `None` if a previous close is still draining; its hooks are not
    /// invoked again. Await [`CloseDrain::settled`] and pass the ticket to
    /// [`finish_close`](Self::finish_close).
    pub fn close(&mut self) -> Option<CloseDrain> {
        if self.closing {
            tracing::debug!("close already in progress");
            return None;
        }
        self.closing = true;

        let pending = self.exit_hooks.invoke_all();
        tracing::debug!(hooks = pending.len(), "closing lightbox");
        Some(CloseDrain { pending })
    }

    /// Completes a close: clears the hook registry and stores
    /// [`SlideIndex::Closed`] on the host.
    pub fn finish_close<H: SlideHost + ?Sized>(&mut self, _ticket: CloseTicket, host: &mut H) {
        if !self.closing {
            return;
        }
        self.closing = false;
        self.exit_hooks.clear();
        host.set_index(SlideIndex::Closed);
    }

    /// Runs a whole close: invokes the hooks, waits for them and resets the
    /// index. Returns false if another close was already draining.
    pub async fn close_and_wait<H: SlideHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(drain) = self.close() else {
            return false;
        };
        let ticket = drain.settled().await;
        self.finish_close(ticket, host);
        true
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Registers a hook that must settle before the next close completes.
    pub fn add_exit_hook(&self, hook: ExitHook) -> ExitHookDisposer {
        self.exit_hooks.add(hook)
    }

    #[must_use]
    pub fn exit_hooks(&self) -> &ExitHookRegistry {
        &self.exit_hooks
    }

    /// Non-owning handle for collaborators.
    #[must_use]
    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle::new(self.exit_hooks.downgrade(), Rc::downgrade(&self.upcoming))
    }
}
