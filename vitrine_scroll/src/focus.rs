// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::layout::LayoutMode;

/// Per-card presentation derived from the strip offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusMetrics {
    /// Distance from the card centre to the viewport centre.
    pub distance: f64,
    /// Horizontal parallax shift to apply to the card.
    pub parallax: f64,
    /// Whether the card is the focused one. Only ever set in compact layouts.
    pub in_focus: bool,
    /// Scale to apply to the card.
    pub scale: f64,
}

/// Geometry of a focus-scaled card row.
///
/// Cards sit at `leading_inset + index * (card_width + gap)` in content
/// coordinates; the strip offset shifts them left.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusRow {
    /// Layout mode; only compact rows scale around a focus.
    pub mode: LayoutMode,
    /// Visible width of the row.
    pub viewport_width: f64,
    /// Width of one card.
    pub card_width: f64,
    /// Space between cards.
    pub gap: f64,
    /// Padding before the first card.
    pub leading_inset: f64,
}

impl FocusRow {
    /// Default space between cards.
    pub const DEFAULT_GAP: f64 = 12.0;
    /// Default padding before the first card.
    pub const DEFAULT_LEADING_INSET: f64 = 120.0;

    const PARALLAX: f64 = 0.03;
    const FOCUS_FRACTION: f64 = 0.6;
    const FOCUS_ZONE_FRACTION: f64 = 0.8;
    const FOCUSED_SCALE: f64 = 1.1;
    const MIN_SCALE: f64 = 0.9;
    const SCALE_RANGE: f64 = 0.2;

    /// Builds a row for a viewport `width`, choosing the mode and card width
    /// from the breakpoint.
    #[must_use]
    pub fn for_viewport(width: f64) -> Self {
        let mode = LayoutMode::for_width(width);
        Self {
            mode,
            viewport_width: width,
            card_width: mode.card_width(),
            gap: Self::DEFAULT_GAP,
            leading_inset: Self::DEFAULT_LEADING_INSET,
        }
    }

    /// Sets the gap between cards.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the leading inset.
    #[must_use]
    pub fn with_leading_inset(mut self, inset: f64) -> Self {
        self.leading_inset = inset;
        self
    }

    /// Metrics for card `index` at strip `offset`.
    #[must_use]
    pub fn metrics(&self, index: usize, offset: f64) -> FocusMetrics {
        let left = self.leading_inset + index as f64 * (self.card_width + self.gap);
        let centre = left - offset + self.card_width / 2.0;
        let signed = centre - self.viewport_width / 2.0;
        let distance = signed.abs();

        if !self.mode.is_compact() {
            return FocusMetrics {
                distance,
                parallax: signed * Self::PARALLAX,
                in_focus: false,
                scale: 1.0,
            };
        }

        let in_focus =
            (index == 0 && offset == 0.0) || distance < self.card_width * Self::FOCUS_FRACTION;
        let scale = if in_focus {
            Self::FOCUSED_SCALE
        } else {
            let zone = self.card_width * Self::FOCUS_ZONE_FRACTION;
            let progress = (1.0 - distance / zone).clamp(0.0, 1.0);
            Self::MIN_SCALE + progress * Self::SCALE_RANGE
        };
        FocusMetrics {
            distance,
            parallax: signed * Self::PARALLAX,
            in_focus,
            scale,
        }
    }

    /// Index of the first focused card among `count`, if any.
    #[must_use]
    pub fn focused(&self, count: usize, offset: f64) -> Option<usize> {
        (0..count).find(|&i| self.metrics(i, offset).in_focus)
    }
}
