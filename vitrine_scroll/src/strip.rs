// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Vec2;

/// Scroll direction along a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StripDirection {
    /// Toward the start (left arrow).
    Back,
    /// Toward the end (right arrow).
    Forward,
}

/// Fixed-width card layout used for arrow paging.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardLayout {
    /// Width of one card.
    pub card_extent: f64,
    /// Space between adjacent cards.
    pub gap: f64,
    /// Cards advanced per arrow press.
    pub cards_per_page: u32,
}

impl CardLayout {
    /// Gear rows: 224px cards, 16px gaps, three cards per page.
    pub const GEAR_ROW: Self = Self {
        card_extent: 224.0,
        gap: 16.0,
        cards_per_page: 3,
    };

    /// Distance from one card's leading edge to the next.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.card_extent + self.gap
    }

    /// Distance moved by one arrow press.
    #[must_use]
    pub fn page_extent(&self) -> f64 {
        self.pitch() * f64::from(self.cards_per_page)
    }

    /// Content extent of `count` cards, including a trailing gap per card.
    #[must_use]
    pub fn content_extent(&self, count: usize) -> f64 {
        self.pitch() * count as f64
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::GEAR_ROW
    }
}

/// A horizontally scrolling row of cards.
///
/// `ScrollStrip` tracks a scroll offset inside `[0, content - viewport]` and
/// answers the questions arrow buttons need: can it scroll back, can it
/// scroll forward, and where does one page land. The forward check leaves an
/// edge tolerance so sub-pixel remainders don't keep the right arrow alive.
#[derive(Clone, Debug)]
pub struct ScrollStrip {
    offset: f64,
    viewport_extent: f64,
    content_extent: f64,
    edge_tolerance: f64,
}

impl ScrollStrip {
    /// Default slack before the end at which forward scrolling is considered done.
    pub const DEFAULT_EDGE_TOLERANCE: f64 = 10.0;

    /// Creates a strip scrolled to the start.
    ///
    /// Negative or non-finite extents are treated as zero.
    #[must_use]
    pub fn new(viewport_extent: f64, content_extent: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_extent: sanitize(viewport_extent),
            content_extent: sanitize(content_extent),
            edge_tolerance: Self::DEFAULT_EDGE_TOLERANCE,
        }
    }

    /// Creates a strip holding `count` cards of `layout`.
    #[must_use]
    pub fn for_cards(viewport_extent: f64, count: usize, layout: &CardLayout) -> Self {
        Self::new(viewport_extent, layout.content_extent(count))
    }

    /// Sets the edge tolerance used by [`can_scroll_forward`](Self::can_scroll_forward).
    #[must_use]
    pub fn with_edge_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_tolerance = sanitize(tolerance);
        self
    }

    /// Current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of the visible window.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Total width of the content.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Largest reachable offset; zero when everything fits.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Content-space range currently visible.
    #[must_use]
    pub fn visible_range(&self) -> Range<f64> {
        self.offset..self.offset + self.viewport_extent
    }

    /// Updates the viewport width (for example after a resize) and re-clamps.
    pub fn set_viewport_extent(&mut self, extent: f64) {
        self.viewport_extent = sanitize(extent);
        self.set_offset(self.offset);
    }

    /// Updates the content width and re-clamps.
    pub fn set_content_extent(&mut self, extent: f64) {
        self.content_extent = sanitize(extent);
        self.set_offset(self.offset);
    }

    /// Scrolls to `offset`, clamped into range. Returns the applied offset.
    pub fn set_offset(&mut self, offset: f64) -> f64 {
        self.offset = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
        self.offset
    }

    /// Scrolls by `delta`. Returns the distance actually moved.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let before = self.offset;
        self.set_offset(before + delta);
        self.offset - before
    }

    /// Handles a wheel or trackpad event.
    ///
    /// Horizontal-dominant deltas (or any delta with `shift` held) scroll the
    /// strip and return `true`, meaning the host should prevent the page from
    /// scrolling. Vertical deltas are left to the page.
    pub fn wheel(&mut self, delta: Vec2, shift: bool) -> bool {
        if delta.x.abs() <= delta.y.abs() && !shift {
            return false;
        }
        let amount = if delta.x != 0.0 { delta.x } else { delta.y };
        self.scroll_by(amount);
        true
    }

    /// Whether a back arrow should be shown.
    #[must_use]
    pub fn can_scroll_back(&self) -> bool {
        self.offset > 0.0
    }

    /// Whether a forward arrow should be shown.
    #[must_use]
    pub fn can_scroll_forward(&self) -> bool {
        self.offset < self.content_extent - self.viewport_extent - self.edge_tolerance
    }

    /// Offset one page away in `direction`, clamped, without moving.
    #[must_use]
    pub fn page_target(&self, direction: StripDirection, layout: &CardLayout) -> f64 {
        let step = match direction {
            StripDirection::Back => -layout.page_extent(),
            StripDirection::Forward => layout.page_extent(),
        };
        (self.offset + step).clamp(0.0, self.max_offset())
    }

    /// Moves one page in `direction`. Returns the new offset.
    pub fn page(&mut self, direction: StripDirection, layout: &CardLayout) -> f64 {
        let target = self.page_target(direction, layout);
        self.set_offset(target)
    }

    /// Snapshot of the strip for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> StripDebugInfo {
        StripDebugInfo {
            offset: self.offset,
            max_offset: self.max_offset(),
            viewport_extent: self.viewport_extent,
            content_extent: self.content_extent,
            can_scroll_back: self.can_scroll_back(),
            can_scroll_forward: self.can_scroll_forward(),
        }
    }
}

/// Debug snapshot of a [`ScrollStrip`].
#[derive(Clone, Debug, PartialEq)]
pub struct StripDebugInfo {
    /// Current scroll offset.
    pub offset: f64,
    /// Largest reachable offset.
    pub max_offset: f64,
    /// Visible width.
    pub viewport_extent: f64,
    /// Content width.
    pub content_extent: f64,
    /// Back arrow visibility.
    pub can_scroll_back: bool,
    /// Forward arrow visibility.
    pub can_scroll_forward: bool,
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}
