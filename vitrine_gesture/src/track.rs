// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-to-release pointer tracking: origin, latest sample, and elapsed time.
//!
//! [`PointerTrack`] is the bookkeeping underneath [`GestureClassifier`](crate::classify::GestureClassifier).
//! It is also usable on its own when a host only needs displacement from the press
//! point (for example, to drag a scroll strip).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vitrine_gesture::track::PointerTrack;
//!
//! let mut track = PointerTrack::default();
//!
//! track.press(Point::new(100.0, 40.0), 1_000);
//! assert!(track.is_pressed());
//!
//! // Step since the previous sample.
//! assert_eq!(track.advance(Point::new(90.0, 42.0), 1_016), Some(Vec2::new(-10.0, 2.0)));
//!
//! // Total displacement from the press point.
//! assert_eq!(track.displacement(Point::new(70.0, 44.0)), Some(Vec2::new(-30.0, 4.0)));
//!
//! track.release();
//! assert!(!track.is_pressed());
//! ```

use kurbo::{Point, Vec2};

/// One timestamped pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Pointer position in surface coordinates.
    pub pos: Point,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

/// Tracks a single press-to-release pointer sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTrack {
    /// Where and when the pointer went down.
    pub origin: Option<Sample>,
    /// The most recent sample seen during this press.
    pub last: Option<Sample>,
}

impl PointerTrack {
    /// Begins tracking a new press, discarding any previous one.
    pub fn press(&mut self, pos: Point, time: u64) {
        let sample = Sample { pos, time };
        self.origin = Some(sample);
        self.last = Some(sample);
    }

    /// Records a new sample and returns the step from the previous one.
    ///
    /// Returns `None` when no press is active.
    pub fn advance(&mut self, pos: Point, time: u64) -> Option<Vec2> {
        self.origin?;
        let previous = self.last.replace(Sample { pos, time })?;
        Some(pos - previous.pos)
    }

    /// Displacement of `pos` from the press point.
    #[must_use]
    pub fn displacement(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin.pos)
    }

    /// Milliseconds between the press and `now`, saturating at zero.
    #[must_use]
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.origin.map(|origin| now.saturating_sub(origin.time))
    }

    /// Stops tracking.
    pub fn release(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` between [`press`](Self::press) and [`release`](Self::release).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }
}
