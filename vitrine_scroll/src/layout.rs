// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Width-driven layout mode for card strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Narrow viewports: smaller cards, focus scaling, parallax.
    Compact,
    /// Everything else.
    #[default]
    Regular,
}

impl LayoutMode {
    /// Viewports narrower than this are [`Compact`](Self::Compact).
    pub const BREAKPOINT: f64 = 640.0;

    /// Picks the mode for a viewport `width`.
    ///
    /// Non-finite widths fall back to [`Regular`](Self::Regular).
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width.is_finite() && width < Self::BREAKPOINT {
            Self::Compact
        } else {
            Self::Regular
        }
    }

    /// Card width used in this mode.
    #[must_use]
    pub const fn card_width(self) -> f64 {
        match self {
            Self::Compact => 180.0,
            Self::Regular => 240.0,
        }
    }

    /// Returns `true` for [`Compact`](Self::Compact).
    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}
