// SPDX-License-Identifier: MPL-2.0
//! Controller handle for collaborators.
//!
//! Collaborators that live next to the lightbox (zoom, video, custom
//! controls) receive a [`ControllerHandle`] instead of the controller itself.
//! The handle does not keep the controller alive: once the controller is
//! dropped every call fails fast with [`Error::ControllerUnavailable`].

use super::exit_hooks::{ExitHook, ExitHookDisposer, WeakExitHookRegistry};
use crate::domain::lightbox::TransitionDirection;
use crate::error::{Error, Result};
use std::cell::Cell;
use std::rc::Weak;

#[derive(Debug, Clone)]
pub struct ControllerHandle {
    hooks: WeakExitHookRegistry,
    upcoming: Weak<Cell<Option<TransitionDirection>>>,
}

impl ControllerHandle {
    pub(crate) fn new(
        hooks: WeakExitHookRegistry,
        upcoming: Weak<Cell<Option<TransitionDirection>>>,
    ) -> Self {
        Self { hooks, upcoming }
    }

    /// Registers an exit hook on the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerUnavailable`] if the controller was dropped.
    pub fn add_exit_hook(&self, hook: ExitHook) -> Result<ExitHookDisposer> {
        let registry = self.hooks.upgrade().inspect_err(|_| {
            tracing::error!("exit hook registered outside of a live lightbox controller");
        })?;
        Ok(registry.add(hook))
    }

    /// Direction of the transition in flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerUnavailable`] if the controller was dropped.
    pub fn upcoming_transition(&self) -> Result<Option<TransitionDirection>> {
        self.upcoming
            .upgrade()
            .map(|upcoming| upcoming.get())
            .ok_or(Error::ControllerUnavailable)
    }

    /// Whether the controller is still alive.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.upcoming.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::lightbox::NavigationController;

    #[test]
    fn handle_reports_availability() {
        let controller = NavigationController::new();
        let handle = controller.handle();
        assert!(handle.is_available());
        assert_eq!(handle.upcoming_transition(), Ok(None));

        drop(controller);
        assert!(!handle.is_available());
    }

    #[test]
    fn disposer_from_handle_removes_hook() {
        let controller = NavigationController::new();
        let handle = controller.handle();
        let disposer = handle
            .add_exit_hook(crate::ui::lightbox::ExitHook::sync(|| Ok(())))
            .expect("controller is alive");

        assert_eq!(controller.exit_hooks().len(), 1);
        disposer.dispose();
        assert!(controller.exit_hooks().is_empty());
    }
}
