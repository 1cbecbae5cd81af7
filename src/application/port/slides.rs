// SPDX-License-Identifier: MPL-2.0
//! Slide host port definition.
//!
//! The host owns the slide sequence and the current index. The navigation
//! controller reads both through this trait and writes the index only via
//! [`SlideHost::set_index`]; it never keeps its own copy.

use crate::domain::lightbox::SlideIndex;

/// Port for the state that owns the lightbox position.
///
/// # Example
///
/// ```
/// use iced_lightbox::application::port::SlideHost;
/// use iced_lightbox::domain::lightbox::SlideIndex;
///
/// struct Gallery {
///     photos: Vec<String>,
///     index: SlideIndex,
/// }
///
/// impl SlideHost for Gallery {
///     fn slide_count(&self) -> usize {
///         self.photos.len()
///     }
///
///     fn index(&self) -> SlideIndex {
///         self.index
///     }
///
///     fn set_index(&mut self, index: SlideIndex) {
///         self.index = index;
///     }
/// }
/// ```
pub trait SlideHost {
    /// Number of slides in the current session.
    fn slide_count(&self) -> usize;

    /// Current position, or [`SlideIndex::Closed`].
    fn index(&self) -> SlideIndex;

    /// Stores a new position.
    fn set_index(&mut self, index: SlideIndex);
}
