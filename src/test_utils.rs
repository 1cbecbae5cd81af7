// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{SlideHost, TransitionFinished, ViewTransition};
use crate::domain::lightbox::SlideIndex;
use futures_util::FutureExt;
use tokio::sync::oneshot;

/// In-memory slide host recording every index it is given.
#[derive(Debug, Clone)]
pub struct TestDeck {
    pub count: usize,
    pub index: SlideIndex,
    pub history: Vec<SlideIndex>,
}

impl TestDeck {
    pub fn open(count: usize, position: usize) -> Self {
        Self {
            count,
            index: SlideIndex::Open(position),
            history: Vec::new(),
        }
    }

    pub fn closed(count: usize) -> Self {
        Self {
            count,
            index: SlideIndex::Closed,
            history: Vec::new(),
        }
    }

    /// Open positions stored so far, in order.
    pub fn positions(&self) -> Vec<usize> {
        self.history
            .iter()
            .filter_map(|index| index.position())
            .collect()
    }
}

impl SlideHost for TestDeck {
    fn slide_count(&self) -> usize {
        self.count
    }

    fn index(&self) -> SlideIndex {
        self.index
    }

    fn set_index(&mut self, index: SlideIndex) {
        self.index = index;
        self.history.push(index);
    }
}

/// View transition completed explicitly by the test.
#[derive(Debug, Default)]
pub struct ManualTransition {
    pending: Vec<oneshot::Sender<()>>,
}

impl ManualTransition {
    /// Completes every transition started so far.
    pub fn finish_all(&mut self) {
        for sender in self.pending.drain(..) {
            let _ = sender.send(());
        }
    }
}

impl ViewTransition for ManualTransition {
    fn run(&mut self, mutate: &mut dyn FnMut()) -> Option<TransitionFinished> {
        mutate();
        let (sender, receiver) = oneshot::channel();
        self.pending.push(sender);
        Some(
            async move {
                let _ = receiver.await;
            }
            .boxed(),
        )
    }
}
