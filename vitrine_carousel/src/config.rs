// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ConfigError;

/// Frame shape of a media surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AspectRatio {
    /// 1:1.
    Square,
    /// 3:2 landscape.
    Wide,
    /// 4:5 portrait, the usual project-page frame.
    #[default]
    Tall,
    /// 16:9.
    Video,
}

impl AspectRatio {
    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::Square => 1.0,
            Self::Wide => 3.0 / 2.0,
            Self::Tall => 4.0 / 5.0,
            Self::Video => 16.0 / 9.0,
        }
    }

    /// The height of a frame `width` wide.
    #[must_use]
    pub fn height_for_width(self, width: f64) -> f64 {
        width / self.ratio()
    }
}

/// Per-instance carousel settings.
///
/// The cooldown doubles as the presentation layer's transition duration; the
/// two must match or the visuals desync from when input is accepted again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Milliseconds after an accepted navigation during which requests are dropped.
    pub cooldown_ms: u64,
    /// Frame shape of the surface.
    pub aspect_ratio: AspectRatio,
    /// Whether pagination dots are shown.
    pub show_dots: bool,
    /// Whether dot jumps animate directionally instead of crossfading.
    pub directional_jumps: bool,
}

impl CarouselConfig {
    /// Default cooldown, matched to a 300ms slide transition.
    pub const DEFAULT_COOLDOWN_MS: u64 = 300;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cooldown_ms: Self::DEFAULT_COOLDOWN_MS,
            aspect_ratio: AspectRatio::Tall,
            show_dots: true,
            directional_jumps: false,
        }
    }

    /// Sets the cooldown.
    #[must_use]
    pub const fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    /// Sets the frame shape.
    #[must_use]
    pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Shows or hides pagination dots.
    #[must_use]
    pub const fn with_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }

    /// Opts dot jumps into directional motion.
    #[must_use]
    pub const fn with_directional_jumps(mut self, directional_jumps: bool) -> Self {
        self.directional_jumps = directional_jumps;
        self
    }

    /// Checks the configuration for values the state machine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cooldown_ms == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}
