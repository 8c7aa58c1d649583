// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::config::AspectRatio;

/// What kind of media a slide shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A muted, looping, inline video.
    Video,
}

/// A ready-made slide type for media carousels.
///
/// [`Carousel`](crate::Carousel) is generic and never inspects its items;
/// this is simply the shape project pages use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    /// Stable identifier, unique within one carousel.
    pub id: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Source URL or path.
    pub src: String,
    /// Alternative text, if the author supplied any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: Option<String>,
    /// Preferred frame shape, if different from the carousel's.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aspect_ratio: Option<AspectRatio>,
}

impl MediaItem {
    /// An image slide.
    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, MediaKind::Image, src)
    }

    /// A video slide.
    pub fn video(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, MediaKind::Video, src)
    }

    fn new(id: impl Into<String>, kind: MediaKind, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            src: src.into(),
            alt: None,
            aspect_ratio: None,
        }
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Sets the preferred frame shape.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// The alternative text, or `fallback` (usually the project name) if none was given.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }

    /// The frame shape to use when the carousel's default is `default`.
    #[must_use]
    pub fn aspect_ratio_or(&self, default: AspectRatio) -> AspectRatio {
        self.aspect_ratio.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_falls_back_to_project_name() {
        let video = MediaItem::video("1", "/media/launch.mp4");
        assert_eq!(video.kind, MediaKind::Video);
        assert_eq!(video.alt_or("Keycadets"), "Keycadets");

        let image = MediaItem::image("2", "/media/tray.png").with_alt("Metal tray");
        assert_eq!(image.alt_or("Keycadets"), "Metal tray");
    }

    #[test]
    fn item_aspect_ratio_overrides_default() {
        let item = MediaItem::image("1", "a.png");
        assert_eq!(item.aspect_ratio_or(AspectRatio::Tall), AspectRatio::Tall);
        let item = item.with_aspect_ratio(AspectRatio::Video);
        assert_eq!(item.aspect_ratio_or(AspectRatio::Tall), AspectRatio::Video);
    }
}
