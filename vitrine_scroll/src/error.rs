// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`MomentumConfig::validate`](crate::MomentumConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A threshold or scale was zero, negative, or not finite.
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A fraction fell outside its allowed range.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "momentum `{field}` must be positive, got {value}")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "momentum `{field}` is out of range, got {value}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
