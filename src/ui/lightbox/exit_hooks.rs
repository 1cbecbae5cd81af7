// SPDX-License-Identifier: MPL-2.0
//! Exit hook registry.
//!
//! Collaborators (a zoom layer resetting its transform, a video pane pausing
//! playback, ...) register hooks that must settle before the lightbox closes.
//! Registration hands back an [`ExitHookDisposer`] that removes exactly that
//! hook.

use crate::error::{Error, Result};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

/// Future returned by an exit hook.
pub type ExitHookFuture = BoxFuture<'static, Result<()>>;

/// Cleanup callback run before the lightbox closes.
pub struct ExitHook(Box<dyn FnMut() -> ExitHookFuture>);

impl ExitHook {
    /// Wraps a hook that returns its own future.
    pub fn new(hook: impl FnMut() -> ExitHookFuture + 'static) -> Self {
        Self(Box::new(hook))
    }

    /// Wraps a synchronous hook.
    pub fn sync(mut hook: impl FnMut() -> Result<()> + 'static) -> Self {
        Self::new(move || future::ready(hook()).boxed())
    }

    /// Wraps an async hook.
    pub fn from_async<F, Fut>(mut hook: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self::new(move || hook().boxed())
    }

    fn invoke(&mut self) -> ExitHookFuture {
        (self.0)()
    }
}

impl fmt::Debug for ExitHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExitHook")
    }
}

type HookSlot = (u64, Rc<RefCell<ExitHook>>);

#[derive(Debug, Default)]
struct Slots {
    next_id: u64,
    hooks: Vec<HookSlot>,
}

/// Ordered collection of exit hooks.
#[derive(Debug, Clone, Default)]
pub struct ExitHookRegistry {
    slots: Rc<RefCell<Slots>>,
}

impl ExitHookRegistry {
    /// Appends a hook and returns its disposer.
    pub fn add(&self, hook: ExitHook) -> ExitHookDisposer {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.hooks.push((id, Rc::new(RefCell::new(hook))));

        ExitHookDisposer {
            slots: Rc::downgrade(&self.slots),
            id,
        }
    }

    /// Calls every registered hook once, in registration order, and returns
    /// their pending futures.
    ///
    /// Hooks may register or dispose other hooks while being called; those
    /// changes apply to the registry, not to this invocation. A hook that
    /// panics while being called yields a failed future.
    pub fn invoke_all(&self) -> Vec<ExitHookFuture> {
        let snapshot: Vec<Rc<RefCell<ExitHook>>> = self
            .slots
            .borrow()
            .hooks
            .iter()
            .map(|(_, hook)| Rc::clone(hook))
            .collect();

        snapshot
            .iter()
            .map(|hook| {
                panic::catch_unwind(AssertUnwindSafe(|| hook.borrow_mut().invoke()))
                    .unwrap_or_else(|_| {
                        future::ready(Err(Error::exit_hook("exit hook panicked"))).boxed()
                    })
            })
            .collect()
    }

    /// Removes every hook.
    pub fn clear(&self) {
        self.slots.borrow_mut().hooks.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn downgrade(&self) -> WeakExitHookRegistry {
        WeakExitHookRegistry(Rc::downgrade(&self.slots))
    }
}

/// Non-owning reference to a registry, used by controller handles.
#[derive(Debug, Clone)]
pub(crate) struct WeakExitHookRegistry(Weak<RefCell<Slots>>);

impl WeakExitHookRegistry {
    pub(crate) fn upgrade(&self) -> Result<ExitHookRegistry> {
        self.0
            .upgrade()
            .map(|slots| ExitHookRegistry { slots })
            .ok_or(Error::ControllerUnavailable)
    }
}

/// Removes one registered hook. Disposing twice, or after the registry is
/// gone, does nothing.
#[derive(Debug, Clone)]
pub struct ExitHookDisposer {
    slots: Weak<RefCell<Slots>>,
    id: u64,
}

impl ExitHookDisposer {
    pub fn dispose(&self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().hooks.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_hook(counter: &Rc<Cell<u32>>) -> ExitHook {
        let counter = Rc::clone(counter);
        ExitHook::sync(move || {
            counter.set(counter.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn add_and_invoke_all_calls_each_hook_once() {
        let registry = ExitHookRegistry::default();
        let calls = Rc::new(Cell::new(0));
        registry.add(counting_hook(&calls));
        registry.add(counting_hook(&calls));

        let pending = registry.invoke_all();
        assert_eq!(pending.len(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn dispose_removes_only_that_hook() {
        let registry = ExitHookRegistry::default();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let disposer = registry.add(counting_hook(&first));
        registry.add(counting_hook(&second));

        disposer.dispose();
        registry.invoke_all();

        assert_eq!(registry.len(), 1);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn dispose_twice_is_noop() {
        let registry = ExitHookRegistry::default();
        let calls = Rc::new(Cell::new(0));
        let disposer = registry.add(counting_hook(&calls));
        registry.add(counting_hook(&calls));

        disposer.dispose();
        disposer.dispose();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dispose_after_registry_dropped_is_noop() {
        let registry = ExitHookRegistry::default();
        let disposer = registry.add(ExitHook::sync(|| Ok(())));
        drop(registry);
        disposer.dispose();
    }

    #[test]
    fn hook_registering_during_invoke_does_not_panic() {
        let registry = ExitHookRegistry::default();
        let inner = registry.clone();
        registry.add(ExitHook::sync(move || {
            inner.add(ExitHook::sync(|| Ok(())));
            Ok(())
        }));

        let pending = registry.invoke_all();
        assert_eq!(pending.len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn clear_empties_registry() {
        let registry = ExitHookRegistry::default();
        registry.add(ExitHook::sync(|| Ok(())));
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn weak_registry_fails_fast_once_dropped() {
        let registry = ExitHookRegistry::default();
        let weak = registry.downgrade();
        assert!(weak.upgrade().is_ok());
        drop(registry);
        assert_eq!(weak.upgrade().unwrap_err(), Error::ControllerUnavailable);
    }

    #[tokio::test]
    async fn panicking_hook_yields_failed_future() {
        let registry = ExitHookRegistry::default();
        let calls = Rc::new(Cell::new(0));
        registry.add(ExitHook::sync(|| panic!("hook exploded")));
        registry.add(counting_hook(&calls));

        let results = future::join_all(registry.invoke_all()).await;

        assert_eq!(calls.get(), 1);
        assert_eq!(
            results,
            vec![Err(Error::exit_hook("exit hook panicked")), Ok(())]
        );
    }

    #[tokio::test]
    async fn async_hook_future_resolves() {
        let registry = ExitHookRegistry::default();
        registry.add(ExitHook::from_async(|| async {
            tokio::task::yield_now().await;
            Err(Error::exit_hook("late failure"))
        }));

        let results = future::join_all(registry.invoke_all()).await;
        assert_eq!(results, vec![Err(Error::exit_hook("late failure"))]);
    }
}
