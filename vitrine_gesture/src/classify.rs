// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classifier: one press-to-release sequence in, one [`Gesture`] out.
//!
//! ## Usage
//!
//! 1) Call [`GestureClassifier::press`] when the pointer goes down on the surface.
//! 2) Call [`GestureClassifier::motion`] for every move; honour the returned
//!    [`Suppress`] flags by preventing the platform default for that event.
//! 3) Call [`GestureClassifier::release`] with the surface bounds to get the outcome.
//! 4) Call [`GestureClassifier::cancel`] if the surface goes away mid-gesture.
//!
//! Classification happens in two stages. The first move that travels further
//! than [`GestureConfig::lock_threshold`] on either axis decides the axis lock,
//! once. A vertical lock hands the gesture to the page (it ends as
//! [`Gesture::Ignore`]); a horizontal lock keeps it for the surface and is
//! measured again at release against [`GestureConfig::swipe_distance`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use vitrine_gesture::classify::{Gesture, GestureClassifier, Side, SwipeDirection};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 500.0);
//! let mut gestures = GestureClassifier::default();
//!
//! // Drag 80px to the left.
//! gestures.press(Point::new(300.0, 200.0), 0);
//! gestures.motion(Point::new(270.0, 202.0), 16);
//! let outcome = gestures.release(Point::new(220.0, 205.0), 48, surface);
//! assert_eq!(outcome, Gesture::Swipe(SwipeDirection::Left));
//!
//! // A tap on the right half.
//! gestures.press(Point::new(350.0, 200.0), 500);
//! let outcome = gestures.release(Point::new(351.0, 201.0), 560, surface);
//! assert_eq!(outcome, Gesture::Tap(Side::Right));
//! ```

use kurbo::{Point, Rect, Vec2};

use crate::config::{ConfigError, GestureConfig};
use crate::logging::{debug, trace};
use crate::track::PointerTrack;

/// Half of a surface, split at its horizontal midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Strictly left of the midpoint.
    Left,
    /// At or right of the midpoint.
    Right,
}

impl Side {
    /// Which half of `surface` contains `x`.
    ///
    /// A position exactly on the midpoint counts as [`Side::Right`].
    #[must_use]
    pub fn of(x: f64, surface: Rect) -> Self {
        if x < surface.center().x {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Direction the finger travelled during a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Finger moved toward smaller x.
    Left,
    /// Finger moved toward larger x.
    Right,
}

/// The single outcome of a press-to-release sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gesture {
    /// Negligible movement; released on the given half of the surface.
    Tap(Side),
    /// Horizontal travel past the swipe distance.
    Swipe(SwipeDirection),
    /// Vertical scrolling, or anything ambiguous.
    Ignore,
}

impl Gesture {
    /// The slide step this gesture asks a carousel for.
    ///
    /// Swiping left or tapping the right half moves forward (`+1`); swiping
    /// right or tapping the left half moves backward (`-1`).
    #[must_use]
    pub fn step(self) -> Option<isize> {
        match self {
            Self::Tap(Side::Right) | Self::Swipe(SwipeDirection::Left) => Some(1),
            Self::Tap(Side::Left) | Self::Swipe(SwipeDirection::Right) => Some(-1),
            Self::Ignore => None,
        }
    }
}

/// The one-time decision about which axis a gesture belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisLock {
    /// Navigation intent: the surface owns the gesture.
    Horizontal,
    /// Scroll intent: the page owns the gesture.
    Vertical,
}

bitflags::bitflags! {
    /// Platform defaults the host must prevent for the current move event.
    ///
    /// Once set during a gesture the flags stay set until release, since a
    /// page scroll that already happened cannot be undone.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Suppress: u8 {
        /// Native page scrolling.
        const SCROLL = 1 << 0;
        /// Text or image selection.
        const SELECTION = 1 << 1;
    }
}

/// Snapshot of an in-flight gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Where the pointer went down.
    pub origin: Point,
    /// The axis decision, once made.
    pub lock: Option<AxisLock>,
}

impl GestureSample {
    /// Returns `true` once the gesture has locked horizontal.
    #[must_use]
    pub fn is_horizontal_locked(&self) -> bool {
        self.lock == Some(AxisLock::Horizontal)
    }
}

/// Classifies pointer/touch sequences into [`Gesture`]s.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    track: PointerTrack,
    lock: Option<AxisLock>,
    suppress: Suppress,
}

impl GestureClassifier {
    /// Creates a classifier with the given thresholds.
    ///
    /// Fails if [`GestureConfig::validate`] rejects `config`.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            track: PointerTrack::default(),
            lock: None,
            suppress: Suppress::empty(),
        })
    }

    /// The thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Starts a new gesture at `pos`.
    ///
    /// Any gesture still in flight is abandoned without an outcome.
    pub fn press(&mut self, pos: Point, time: u64) {
        if self.track.is_pressed() {
            trace!("gesture restarted before release");
        }
        self.track.press(pos, time);
        self.lock = None;
        self.suppress = Suppress::empty();
    }

    /// Feeds a move sample and returns the defaults to suppress for it.
    ///
    /// Moves outside a gesture are ignored and suppress nothing.
    pub fn motion(&mut self, pos: Point, time: u64) -> Suppress {
        if self.track.advance(pos, time).is_none() {
            return Suppress::empty();
        }
        let Some(offset) = self.track.displacement(pos) else {
            return Suppress::empty();
        };
        if self.lock.is_none() {
            self.lock = self.decide_lock(offset);
        }
        if self.lock == Some(AxisLock::Horizontal)
            && self.suppress.is_empty()
            && offset.x.abs() > self.config.suppress_threshold
        {
            trace!(dx = offset.x, "suppressing native scroll");
            self.suppress = Suppress::SCROLL | Suppress::SELECTION;
        }
        self.suppress
    }

    /// Ends the gesture at `pos` and classifies it against `surface`.
    ///
    /// `surface` must be in the same coordinate space as the samples. Releases
    /// without a preceding [`press`](Self::press) are [`Gesture::Ignore`].
    pub fn release(&mut self, pos: Point, time: u64, surface: Rect) -> Gesture {
        if self.track.advance(pos, time).is_none() {
            return Gesture::Ignore;
        }
        let offset = self.track.displacement(pos).unwrap_or_default();
        // A release may be the first sample past the threshold when the host
        // coalesced or dropped intermediate moves.
        if self.lock.is_none() {
            self.lock = self.decide_lock(offset);
        }

        let gesture = match self.lock {
            Some(AxisLock::Vertical) => Gesture::Ignore,
            Some(AxisLock::Horizontal) => self.classify_horizontal(offset, pos, surface),
            None => Gesture::Tap(Side::of(pos.x, surface)),
        };
        debug!(?gesture, dx = offset.x, dy = offset.y, "gesture classified");
        self.reset();
        gesture
    }

    /// Abandons the current gesture, if any, without producing an outcome.
    ///
    /// Returns `true` if a gesture was in flight.
    pub fn cancel(&mut self) -> bool {
        let active = self.track.is_pressed();
        self.reset();
        active
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.track.is_pressed()
    }

    /// The in-flight gesture, if any.
    #[must_use]
    pub fn sample(&self) -> Option<GestureSample> {
        self.track.origin.map(|origin| GestureSample {
            origin: origin.pos,
            lock: self.lock,
        })
    }

    /// The flags currently in force for this gesture.
    #[must_use]
    pub fn suppress(&self) -> Suppress {
        self.suppress
    }

    fn decide_lock(&self, offset: Vec2) -> Option<AxisLock> {
        let (dx, dy) = (offset.x.abs(), offset.y.abs());
        let threshold = self.config.lock_threshold;
        if dx <= threshold && dy <= threshold {
            return None;
        }
        let lock = if dx > dy * self.config.lock_ratio {
            AxisLock::Horizontal
        } else {
            AxisLock::Vertical
        };
        debug!(?lock, dx, dy, "axis locked");
        Some(lock)
    }

    fn classify_horizontal(&self, offset: Vec2, pos: Point, surface: Rect) -> Gesture {
        let (dx, dy) = (offset.x.abs(), offset.y.abs());
        if dx > self.config.swipe_distance && dx > dy {
            return Gesture::Swipe(if offset.x < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            });
        }
        // Short horizontal drags only count as taps if the pointer came back
        // to within the lock threshold of where it started.
        let threshold = self.config.lock_threshold;
        if dx <= threshold && dy <= threshold {
            Gesture::Tap(Side::of(pos.x, surface))
        } else {
            Gesture::Ignore
        }
    }

    fn reset(&mut self) {
        self.track.release();
        self.lock = None;
        self.suppress = Suppress::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Rect = Rect::new(0.0, 0.0, 400.0, 500.0);

    fn run(classifier: &mut GestureClassifier, path: &[(f64, f64)]) -> Gesture {
        let (first, rest) = path.split_first().expect("path needs a press point");
        classifier.press(Point::new(first.0, first.1), 0);
        let Some((last, moves)) = rest.split_last() else {
            return classifier.release(Point::new(first.0, first.1), 1, SURFACE);
        };
        for (i, &(x, y)) in moves.iter().enumerate() {
            classifier.motion(Point::new(x, y), 16 * (i as u64 + 1));
        }
        classifier.release(Point::new(last.0, last.1), 1_000, SURFACE)
    }

    #[test]
    fn swipe_left_and_right() {
        let mut c = GestureClassifier::default();
        assert_eq!(
            run(&mut c, &[(300.0, 200.0), (280.0, 201.0), (200.0, 204.0)]),
            Gesture::Swipe(SwipeDirection::Left)
        );
        assert_eq!(
            run(&mut c, &[(100.0, 200.0), (120.0, 199.0), (180.0, 196.0)]),
            Gesture::Swipe(SwipeDirection::Right)
        );
    }

    #[test]
    fn vertical_drag_is_ignored_and_never_suppresses() {
        let mut c = GestureClassifier::default();
        c.press(Point::new(200.0, 100.0), 0);
        assert_eq!(c.motion(Point::new(202.0, 130.0), 16), Suppress::empty());
        assert_eq!(c.motion(Point::new(260.0, 260.0), 32), Suppress::empty());
        assert_eq!(
            c.sample().map(|s| s.lock),
            Some(Some(AxisLock::Vertical))
        );
        assert_eq!(c.release(Point::new(300.0, 300.0), 48, SURFACE), Gesture::Ignore);
    }

    #[test]
    fn diagonal_drag_below_ratio_locks_vertical() {
        let mut c = GestureClassifier::default();
        // dx = 20, dy = 16: horizontal wins but not by 1.5x.
        assert_eq!(
            run(&mut c, &[(200.0, 200.0), (220.0, 216.0), (100.0, 220.0)]),
            Gesture::Ignore
        );
    }

    #[test]
    fn lock_is_decided_once() {
        let mut c = GestureClassifier::default();
        c.press(Point::new(200.0, 200.0), 0);
        c.motion(Point::new(230.0, 202.0), 16);
        assert!(c.sample().is_some_and(|s| s.is_horizontal_locked()));

        // Becoming vertical-dominant later does not revise the lock.
        c.motion(Point::new(230.0, 400.0), 32);
        assert!(c.sample().is_some_and(|s| s.is_horizontal_locked()));
    }

    #[test]
    fn suppression_starts_past_threshold_and_sticks() {
        let mut c = GestureClassifier::default();
        c.press(Point::new(200.0, 200.0), 0);
        // Locked horizontal at 18px, still under the 20px suppression threshold.
        assert_eq!(c.motion(Point::new(182.0, 200.0), 16), Suppress::empty());
        assert_eq!(
            c.motion(Point::new(170.0, 200.0), 32),
            Suppress::SCROLL | Suppress::SELECTION
        );
        // Returning toward the origin keeps suppression in force.
        assert_eq!(
            c.motion(Point::new(195.0, 200.0), 48),
            Suppress::SCROLL | Suppress::SELECTION
        );
        c.release(Point::new(195.0, 200.0), 64, SURFACE);
        assert_eq!(c.suppress(), Suppress::empty());
    }

    #[test]
    fn short_horizontal_drag_that_returns_is_a_tap() {
        let mut c = GestureClassifier::default();
        assert_eq!(
            run(&mut c, &[(300.0, 200.0), (330.0, 200.0), (305.0, 200.0)]),
            Gesture::Tap(Side::Right)
        );
    }

    #[test]
    fn short_horizontal_drag_that_stays_away_is_ignored() {
        let mut c = GestureClassifier::default();
        assert_eq!(
            run(&mut c, &[(300.0, 200.0), (330.0, 200.0), (340.0, 200.0)]),
            Gesture::Ignore
        );
    }

    #[test]
    fn release_without_moves_can_still_lock() {
        let mut c = GestureClassifier::default();
        c.press(Point::new(300.0, 200.0), 0);
        assert_eq!(
            c.release(Point::new(200.0, 200.0), 100, SURFACE),
            Gesture::Swipe(SwipeDirection::Left)
        );
    }

    #[test]
    fn stray_events_are_ignored() {
        let mut c = GestureClassifier::default();
        assert_eq!(c.motion(Point::new(10.0, 10.0), 0), Suppress::empty());
        assert_eq!(c.release(Point::new(10.0, 10.0), 0, SURFACE), Gesture::Ignore);
        assert!(!c.is_active());
    }

    #[test]
    fn cancel_reports_and_clears_in_flight_gesture() {
        let mut c = GestureClassifier::default();
        assert!(!c.cancel());
        c.press(Point::new(10.0, 10.0), 0);
        assert!(c.cancel());
        assert!(c.sample().is_none());
        assert_eq!(c.release(Point::new(10.0, 10.0), 5, SURFACE), Gesture::Ignore);
    }

    #[test]
    fn steps_map_to_carousel_directions() {
        assert_eq!(Gesture::Swipe(SwipeDirection::Left).step(), Some(1));
        assert_eq!(Gesture::Tap(Side::Right).step(), Some(1));
        assert_eq!(Gesture::Swipe(SwipeDirection::Right).step(), Some(-1));
        assert_eq!(Gesture::Tap(Side::Left).step(), Some(-1));
        assert_eq!(Gesture::Ignore.step(), None);
    }

    #[test]
    fn side_uses_surface_midpoint() {
        let offset = Rect::new(100.0, 0.0, 300.0, 10.0);
        assert_eq!(Side::of(199.0, offset), Side::Left);
        assert_eq!(Side::of(200.0, offset), Side::Right);
    }

    #[test]
    fn invalid_thresholds_are_rejected_at_construction() {
        let inverted = GestureConfig::new().with_lock_ratio(0.5);
        assert_eq!(
            GestureClassifier::new(inverted).err(),
            Some(ConfigError::RatioBelowOne { ratio: 0.5 })
        );
        let zero = GestureConfig::new().with_swipe_distance(0.0);
        assert!(matches!(
            GestureClassifier::new(zero),
            Err(ConfigError::NotPositive {
                field: "swipe_distance",
                ..
            })
        ));
        assert!(GestureClassifier::new(GestureConfig::default()).is_ok());
    }
}
