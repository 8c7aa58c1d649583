// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`CarouselConfig::validate`](crate::CarouselConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero cooldown would let input floods skip several slides per frame.
    ZeroCooldown,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCooldown => f.write_str("carousel cooldown must be at least 1ms"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by [`Carousel::new`](crate::Carousel::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// The item list was empty; a carousel always has a current slide.
    Empty,
    /// The configuration failed [`CarouselConfig::validate`](crate::CarouselConfig::validate).
    Config(ConfigError),
}

impl From<ConfigError> for CarouselError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("a carousel needs at least one slide"),
            Self::Config(err) => write!(f, "invalid carousel config: {err}"),
        }
    }
}

impl core::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Config(err) => Some(err),
        }
    }
}
