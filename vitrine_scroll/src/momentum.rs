// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch dragging with momentum for [`ScrollStrip`]s.
//!
//! While the finger is down, [`DragScroll`] pins the strip offset to the
//! finger (offset at press minus finger travel) and keeps an exponentially
//! smoothed velocity. On release it hands back a [`Fling`] that keeps the
//! strip moving, decaying by a friction factor every frame until the
//! velocity falls below a floor.
//!
//! ```
//! use vitrine_scroll::{CardLayout, DragScroll, MomentumConfig, ScrollStrip};
//!
//! let mut strip = ScrollStrip::for_cards(360.0, 12, &CardLayout::GEAR_ROW);
//! let mut drag = DragScroll::new(MomentumConfig::default()).unwrap();
//!
//! drag.begin(300.0, 0, &strip);
//! for frame in 1..=6_u32 {
//!     drag.drag(300.0 - 20.0 * f64::from(frame), 16 * u64::from(frame), &mut strip);
//! }
//! assert_eq!(strip.offset(), 120.0);
//!
//! let mut fling = drag.end().expect("a quick flick carries momentum");
//! while fling.step(&mut strip) {}
//! assert!(strip.offset() > 120.0);
//! ```

use crate::error::ConfigError;
use crate::logging::debug;
use crate::strip::ScrollStrip;

/// Tuning for drag velocity smoothing and fling decay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MomentumConfig {
    /// Weight of the newest instantaneous velocity in the running average.
    pub smoothing: f64,
    /// Finger travel (px) before the strip starts following.
    pub drag_slop: f64,
    /// Minimum smoothed finger velocity (px/ms) that produces a fling.
    pub fling_threshold: f64,
    /// Factor converting finger velocity into per-frame scroll velocity.
    pub fling_scale: f64,
    /// Per-frame velocity multiplier during a fling.
    pub friction: f64,
    /// Fling velocity (px/frame) below which it stops.
    pub stop_velocity: f64,
}

impl MomentumConfig {
    /// Returns the default tuning.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            smoothing: 0.3,
            drag_slop: 1.0,
            fling_threshold: 0.1,
            fling_scale: 0.5,
            friction: 0.92,
            stop_velocity: 0.1,
        }
    }

    /// Checks that a fling always decays and stops.
    ///
    /// `smoothing` must lie in `(0, 1]` and `friction` in `(0, 1)`;
    /// `drag_slop` must be finite and non-negative; every other field must be
    /// finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fling_threshold", self.fling_threshold),
            ("fling_scale", self.fling_scale),
            ("stop_velocity", self.stop_velocity),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !self.drag_slop.is_finite() || self.drag_slop < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "drag_slop",
                value: self.drag_slop,
            });
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "smoothing",
                value: self.smoothing,
            });
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction,
            });
        }
        Ok(())
    }
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
struct Press {
    start_x: f64,
    start_offset: f64,
    last_x: f64,
    last_time: u64,
}

/// Tracks one touch drag over a strip.
#[derive(Clone, Debug)]
pub struct DragScroll {
    config: MomentumConfig,
    press: Option<Press>,
    velocity: f64,
}

impl DragScroll {
    /// Creates an idle drag tracker.
    ///
    /// Fails if [`MomentumConfig::validate`] rejects `config`.
    pub fn new(config: MomentumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            press: None,
            velocity: 0.0,
        })
    }

    /// Finger down at `x`. Any running [`Fling`] should be dropped by the host.
    pub fn begin(&mut self, x: f64, time: u64, strip: &ScrollStrip) {
        self.press = Some(Press {
            start_x: x,
            start_offset: strip.offset(),
            last_x: x,
            last_time: time,
        });
        self.velocity = 0.0;
    }

    /// Finger moved to `x`. Returns `true` if the strip followed the finger,
    /// in which case the host should prevent the default touch behavior.
    pub fn drag(&mut self, x: f64, time: u64, strip: &mut ScrollStrip) -> bool {
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        let dt = time.saturating_sub(press.last_time);
        if dt > 0 {
            let instant = (x - press.last_x) / dt as f64;
            self.velocity =
                instant * self.config.smoothing + self.velocity * (1.0 - self.config.smoothing);
        }
        press.last_x = x;
        press.last_time = time;

        let travel = x - press.start_x;
        if travel.abs() <= self.config.drag_slop {
            return false;
        }
        strip.set_offset(press.start_offset - travel);
        true
    }

    /// Smoothed finger velocity in px/ms.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` while a finger is down.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }

    /// Finger up. Returns a fling if the release was fast enough.
    pub fn end(&mut self) -> Option<Fling> {
        self.press.take()?;
        let velocity = core::mem::take(&mut self.velocity);
        if velocity.abs() <= self.config.fling_threshold {
            return None;
        }
        let fling = Fling {
            velocity: -velocity * self.config.fling_scale,
            friction: self.config.friction,
            stop_velocity: self.config.stop_velocity,
        };
        debug!(velocity = fling.velocity, "fling started");
        Some(fling)
    }
}

impl Default for DragScroll {
    fn default() -> Self {
        Self {
            config: MomentumConfig::default(),
            press: None,
            velocity: 0.0,
        }
    }
}

/// Post-release momentum, advanced once per animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    velocity: f64,
    friction: f64,
    stop_velocity: f64,
}

impl Fling {
    /// Current velocity in px/frame; positive scrolls forward.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` once the velocity has decayed below the floor.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.velocity.abs() < self.stop_velocity
    }

    /// Advances one frame. Returns `false` when the fling is over and the
    /// host should stop requesting frames.
    ///
    /// A fling also ends as soon as the strip is pinned against an edge.
    pub fn step(&mut self, strip: &mut ScrollStrip) -> bool {
        if self.is_finished() {
            return false;
        }
        if strip.scroll_by(self.velocity) == 0.0 {
            self.velocity = 0.0;
            return false;
        }
        self.velocity *= self.friction;
        true
    }
}
