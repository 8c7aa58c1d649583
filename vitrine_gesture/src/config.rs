// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants for gesture classification.

use core::fmt;

/// Thresholds used by [`GestureClassifier`](crate::classify::GestureClassifier).
///
/// All distances are in surface units (typically CSS or logical pixels). The
/// defaults are the single consolidated set used by every media surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Displacement on either axis that triggers the one-time axis decision.
    pub lock_threshold: f64,
    /// How many times larger `|dx|` must be than `|dy|` to lock horizontal.
    pub lock_ratio: f64,
    /// Minimum horizontal travel at release for a swipe.
    pub swipe_distance: f64,
    /// Horizontal travel after which native scroll/selection is suppressed.
    pub suppress_threshold: f64,
}

impl GestureConfig {
    /// Axis decision happens after 15 units of travel.
    pub const DEFAULT_LOCK_THRESHOLD: f64 = 15.0;
    /// Horizontal must dominate vertical by 1.5x.
    pub const DEFAULT_LOCK_RATIO: f64 = 1.5;
    /// Swipes need 50 units of horizontal travel.
    pub const DEFAULT_SWIPE_DISTANCE: f64 = 50.0;
    /// Page scrolling is suppressed past 20 units of horizontal travel.
    pub const DEFAULT_SUPPRESS_THRESHOLD: f64 = 20.0;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lock_threshold: Self::DEFAULT_LOCK_THRESHOLD,
            lock_ratio: Self::DEFAULT_LOCK_RATIO,
            swipe_distance: Self::DEFAULT_SWIPE_DISTANCE,
            suppress_threshold: Self::DEFAULT_SUPPRESS_THRESHOLD,
        }
    }

    /// Sets the axis-lock threshold.
    #[must_use]
    pub const fn with_lock_threshold(mut self, threshold: f64) -> Self {
        self.lock_threshold = threshold;
        self
    }

    /// Sets the horizontal-over-vertical dominance ratio.
    #[must_use]
    pub const fn with_lock_ratio(mut self, ratio: f64) -> Self {
        self.lock_ratio = ratio;
        self
    }

    /// Sets the minimum swipe distance.
    #[must_use]
    pub const fn with_swipe_distance(mut self, distance: f64) -> Self {
        self.swipe_distance = distance;
        self
    }

    /// Sets the scroll suppression threshold.
    #[must_use]
    pub const fn with_suppress_threshold(mut self, threshold: f64) -> Self {
        self.suppress_threshold = threshold;
        self
    }

    /// Checks that every threshold is finite and positive and that the ratio is at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("lock_threshold", self.lock_threshold),
            ("lock_ratio", self.lock_ratio),
            ("swipe_distance", self.swipe_distance),
            ("suppress_threshold", self.suppress_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.lock_ratio < 1.0 {
            return Err(ConfigError::RatioBelowOne {
                ratio: self.lock_ratio,
            });
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned by [`GestureConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A threshold was zero, negative, or not finite.
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The lock ratio would let vertical-dominant drags lock horizontal.
    RatioBelowOne {
        /// The rejected ratio.
        ratio: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "gesture threshold `{field}` must be positive, got {value}")
            }
            Self::RatioBelowOne { ratio } => {
                write!(f, "gesture lock ratio must be at least 1.0, got {ratio}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(GestureConfig::default().validate(), Ok(()));
        assert_eq!(GestureConfig::default(), GestureConfig::new());
    }

    #[test]
    fn rejects_non_positive_thresholds() {
        let config = GestureConfig::new().with_swipe_distance(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "swipe_distance",
                value: 0.0
            })
        );

        let config = GestureConfig::new().with_lock_threshold(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "lock_threshold",
                ..
            })
        ));
    }

    #[test]
    fn rejects_ratio_below_one() {
        let config = GestureConfig::new().with_lock_ratio(0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RatioBelowOne { ratio: 0.5 })
        );
    }
}
