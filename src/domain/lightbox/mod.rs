// SPDX-License-Identifier: MPL-2.0
//! Lightbox domain types.
//!
//! Slide position, navigation intents and transition directions, independent
//! of any presentation framework.

pub mod slide;

pub use slide::{ImageSource, Slide};

/// Position of the lightbox within its slide sequence.
///
/// `Closed` is the sentinel the host stores when the lightbox is not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideIndex {
    /// The slide at this position is displayed.
    Open(usize),
    /// The lightbox is closed.
    #[default]
    Closed,
}

impl SlideIndex {
    /// Returns the open position, if any.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(index),
            Self::Closed => None,
        }
    }

    /// Returns true if the lightbox is closed.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Computes the index one step in `direction`, wrapping around at both ends.
    ///
    /// Returns `None` when the lightbox is closed or when there is nothing to
    /// navigate to (fewer than two slides). A stale index beyond `count` is
    /// folded back into range first.
    ///
    /// ```
    /// use iced_lightbox::domain::lightbox::{SlideIndex, TransitionDirection};
    ///
    /// let last = SlideIndex::Open(2);
    /// assert_eq!(last.step(TransitionDirection::Next, 3), Some(SlideIndex::Open(0)));
    /// assert_eq!(SlideIndex::Open(0).step(TransitionDirection::Previous, 3), Some(SlideIndex::Open(2)));
    /// assert_eq!(SlideIndex::Open(0).step(TransitionDirection::Next, 1), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: TransitionDirection, count: usize) -> Option<SlideIndex> {
        if count <= 1 {
            return None;
        }
        let current = self.position()? % count;
        let target = match direction {
            TransitionDirection::Previous => {
                if current == 0 {
                    count - 1
                } else {
                    current - 1
                }
            }
            TransitionDirection::Next => {
                if current == count - 1 {
                    0
                } else {
                    current + 1
                }
            }
        };
        Some(Self::Open(target))
    }
}

/// Direction of a slide transition, exposed while the transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    /// Moving to the previous slide.
    Previous,
    /// Moving to the next slide.
    Next,
}

/// Discrete navigation request decoded from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationIntent {
    /// Go to the previous slide.
    Previous,
    /// Go to the next slide.
    Next,
    /// Close the lightbox.
    Close,
}

impl NavigationIntent {
    /// Returns the transition direction for slide-changing intents.
    #[must_use]
    pub fn direction(self) -> Option<TransitionDirection> {
        match self {
            Self::Previous => Some(TransitionDirection::Previous),
            Self::Next => Some(TransitionDirection::Next),
            Self::Close => None,
        }
    }
}

impl From<TransitionDirection> for NavigationIntent {
    fn from(direction: TransitionDirection) -> Self {
        match direction {
            TransitionDirection::Previous => Self::Previous,
            TransitionDirection::Next => Self::Next,
        }
    }
}
