// SPDX-License-Identifier: MPL-2.0
//! Slide descriptors handed to renderers.

/// Alternative rendition of a slide image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// Image URL or path.
    pub src: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An image slide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    /// Image URL or path.
    pub src: String,
    /// Alternative text.
    pub alt: Option<String>,
    /// Intrinsic width in pixels, when known.
    pub width: Option<u32>,
    /// Intrinsic height in pixels, when known.
    pub height: Option<u32>,
    /// Responsive alternatives.
    pub src_set: Vec<ImageSource>,
}

impl Slide {
    /// Creates an image slide from its source.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: ImageSource) -> Self {
        self.src_set.push(source);
        self
    }

    /// Formats the responsive sources as an HTML `srcset` value, narrowest first.
    ///
    /// Returns `None` when the slide has no alternative sources.
    ///
    /// ```
    /// use iced_lightbox::domain::lightbox::{ImageSource, Slide};
    ///
    /// let slide = Slide::image("photo.jpg")
    ///     .with_source(ImageSource { src: "large.jpg".into(), width: 1200, height: 800 })
    ///     .with_source(ImageSource { src: "small.jpg".into(), width: 600, height: 400 });
    /// assert_eq!(
    ///     slide.src_set_attribute().as_deref(),
    ///     Some("small.jpg 600w, large.jpg 1200w")
    /// );
    /// ```
    #[must_use]
    pub fn src_set_attribute(&self) -> Option<String> {
        if self.src_set.is_empty() {
            return None;
        }
        let mut sources: Vec<&ImageSource> = self.src_set.iter().collect();
        sources.sort_by_key(|source| source.width);
        Some(
            sources
                .iter()
                .map(|source| format!("{} {}w", source.src, source.width))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
