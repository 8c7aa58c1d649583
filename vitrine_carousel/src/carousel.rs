// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use vitrine_gesture::classify::Gesture;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::logging::{debug, trace};

/// Which way the most recent index change moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Settled, or a non-directional jump.
    #[default]
    None,
    /// Toward higher indices (wrapping from last to first).
    Forward,
    /// Toward lower indices (wrapping from first to last).
    Backward,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// The request was accepted and the index changed.
    Moved {
        /// Index before the change.
        from: usize,
        /// Index after the change.
        to: usize,
    },
    /// A transition was in flight; the request was discarded.
    Dropped,
    /// The request resolved to the current index, or asked for nothing.
    Unchanged,
}

impl Navigation {
    /// Returns `true` if the index changed.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Transitioning { from: usize, started: u64, until: u64 },
}

/// A carousel over a fixed list of slides.
///
/// `Carousel` owns the current index and a cooldown gate. Every accepted
/// request changes the index exactly once and starts a cooldown of
/// [`CarouselConfig::cooldown_ms`]; requests arriving during the cooldown are
/// dropped, not queued.
///
/// Time is supplied by the host as monotonic milliseconds. The cooldown ends
/// at the first call to [`tick`](Self::tick) (or any request) at or after its
/// deadline.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    config: CarouselConfig,
    current: usize,
    direction: Direction,
    phase: Phase,
    revision: u64,
}

impl<T> Carousel<T> {
    /// Creates a carousel at the first slide.
    ///
    /// Fails if `items` is empty or [`CarouselConfig::validate`] rejects
    /// `config`.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            config,
            current: 0,
            direction: Direction::None,
            phase: Phase::Idle,
            revision: 0,
        })
    }

    /// Number of slides. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All slides in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The configuration this carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Index of the displayed slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed slide.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    /// Direction of the in-flight transition, or [`Direction::None`] when settled.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` during the cooldown after an accepted request.
    ///
    /// This reflects the state as of the last call that took a timestamp.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Counter bumped on every index change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Milliseconds of cooldown left at `now`, if a transition is in flight.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        match self.phase {
            Phase::Transitioning { until, .. } if now < until => Some(until - now),
            Phase::Transitioning { .. } => Some(0),
            Phase::Idle => None,
        }
    }

    /// Ends the cooldown if its deadline has passed.
    ///
    /// Returns `true` if this call returned the carousel to idle, which is
    /// the host's cue to clear any directional styling.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.phase {
            Phase::Transitioning { until, .. } if now >= until => {
                self.phase = Phase::Idle;
                self.direction = Direction::None;
                trace!(index = self.current, "transition settled");
                true
            }
            _ => false,
        }
    }

    /// Moves by `delta` slides, wrapping in both directions.
    ///
    /// Any delta is accepted; it is reduced modulo the slide count. A delta
    /// that lands on the current slide changes nothing and starts no cooldown.
    pub fn navigate(&mut self, delta: isize, now: u64) -> Navigation {
        self.tick(now);
        if self.is_transitioning() {
            trace!(delta, "navigation dropped during transition");
            return Navigation::Dropped;
        }
        let len = self.items.len();
        let step = match isize::try_from(len) {
            Ok(len) => delta.rem_euclid(len).unsigned_abs(),
            // Only zero-sized slides can outnumber `isize::MAX`.
            Err(_) => {
                let magnitude = delta.unsigned_abs() % len;
                if delta < 0 {
                    (len - magnitude) % len
                } else {
                    magnitude
                }
            }
        };
        let to = (self.current + step) % len;
        if to == self.current {
            return Navigation::Unchanged;
        }
        let direction = if delta > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(to, direction, now)
    }

    /// Moves to the following slide, wrapping from last to first.
    pub fn next(&mut self, now: u64) -> Navigation {
        self.navigate(1, now)
    }

    /// Moves to the preceding slide, wrapping from first to last.
    pub fn previous(&mut self, now: u64) -> Navigation {
        self.navigate(-1, now)
    }

    /// Jumps straight to `target`, as from a pagination dot.
    ///
    /// Targets past the end are clamped to the last slide. Jumps are
    /// non-directional unless [`CarouselConfig::directional_jumps`] is set.
    pub fn jump(&mut self, target: usize, now: u64) -> Navigation {
        self.tick(now);
        if self.is_transitioning() {
            trace!(target, "jump dropped during transition");
            return Navigation::Dropped;
        }
        let to = target.min(self.items.len() - 1);
        if to == self.current {
            return Navigation::Unchanged;
        }
        let direction = if !self.config.directional_jumps {
            Direction::None
        } else if to > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(to, direction, now)
    }

    /// Applies a classified gesture. [`Gesture::Ignore`] changes nothing.
    pub fn apply(&mut self, gesture: Gesture, now: u64) -> Navigation {
        match gesture.step() {
            Some(delta) => self.navigate(delta, now),
            None => {
                self.tick(now);
                Navigation::Unchanged
            }
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    fn begin(&mut self, to: usize, direction: Direction, now: u64) -> Navigation {
        let from = self.current;
        self.current = to;
        self.direction = direction;
        self.phase = Phase::Transitioning {
            from,
            started: now,
            until: now.saturating_add(self.config.cooldown_ms),
        };
        self.revision += 1;
        debug!(from, to, ?direction, "slide changed");
        Navigation::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::error::ConfigError;

    const COOLDOWN: u64 = CarouselConfig::DEFAULT_COOLDOWN_MS;

    fn carousel(len: usize) -> Carousel<usize> {
        Carousel::new(0..len, CarouselConfig::default()).unwrap()
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let result = Carousel::new(Vec::<u8>::new(), CarouselConfig::default());
        assert_eq!(result.err(), Some(CarouselError::Empty));
    }

    #[test]
    fn zero_cooldown_is_rejected_at_construction() {
        let config = CarouselConfig::new().with_cooldown_ms(0);
        let result = Carousel::new(0..5, config);
        assert_eq!(
            result.err(),
            Some(CarouselError::Config(ConfigError::ZeroCooldown))
        );
    }

    #[test]
    fn starts_idle_at_first_slide() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(*c.current(), 0);
        assert_eq!(c.direction(), Direction::None);
        assert!(!c.is_transitioning());
        assert_eq!(c.remaining(0), None);
    }

    #[test]
    fn navigate_wraps_both_ways() {
        let mut c = carousel(4);
        assert_eq!(c.previous(0), Navigation::Moved { from: 0, to: 3 });
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.next(COOLDOWN), Navigation::Moved { from: 3, to: 0 });
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn large_deltas_are_reduced_modulo_len() {
        let mut c = carousel(5);
        assert_eq!(c.navigate(7, 0), Navigation::Moved { from: 0, to: 2 });
        assert_eq!(c.navigate(-13, COOLDOWN), Navigation::Moved { from: 2, to: 4 });
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn delta_landing_on_current_is_unchanged_and_starts_no_cooldown() {
        let mut c = carousel(3);
        assert_eq!(c.navigate(3, 0), Navigation::Unchanged);
        assert_eq!(c.navigate(0, 0), Navigation::Unchanged);
        assert!(!c.is_transitioning());
        assert_eq!(c.revision(), 0);

        let mut single = carousel(1);
        assert_eq!(single.next(0), Navigation::Unchanged);
    }

    #[test]
    fn requests_during_cooldown_are_dropped() {
        let mut c = carousel(4);
        assert!(c.next(100).moved());
        assert_eq!(c.remaining(250), Some(150));
        assert_eq!(c.next(399), Navigation::Dropped);
        assert_eq!(c.jump(3, 399), Navigation::Dropped);
        assert_eq!(c.current_index(), 1);

        assert!(c.next(400).moved());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn tick_settles_and_clears_direction() {
        let mut c = carousel(4);
        c.next(0);
        assert!(!c.tick(COOLDOWN - 1));
        assert_eq!(c.direction(), Direction::Forward);
        assert!(c.tick(COOLDOWN));
        assert_eq!(c.direction(), Direction::None);
        assert!(!c.is_transitioning());
        assert!(!c.tick(COOLDOWN + 1), "settling is reported once");
    }

    #[test]
    fn jump_is_a_single_mutation() {
        let mut c = carousel(6);
        assert_eq!(c.jump(3, 0), Navigation::Moved { from: 0, to: 3 });
        assert_eq!(c.revision(), 1);
        assert_eq!(c.direction(), Direction::None);
    }

    #[test]
    fn jump_past_end_clamps() {
        let mut c = carousel(4);
        assert_eq!(c.jump(99, 0), Navigation::Moved { from: 0, to: 3 });
        assert_eq!(c.jump(3, COOLDOWN), Navigation::Unchanged);
    }

    #[test]
    fn directional_jumps_when_configured() {
        let config = CarouselConfig::new().with_directional_jumps(true);
        let mut c = Carousel::new(vec!['a', 'b', 'c', 'd'], config).unwrap();
        c.jump(2, 0);
        assert_eq!(c.direction(), Direction::Forward);
        c.jump(0, COOLDOWN);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn custom_cooldown_is_respected() {
        let config = CarouselConfig::new().with_cooldown_ms(50);
        let mut c = Carousel::new(0..3, config).unwrap();
        c.next(0);
        assert_eq!(c.next(49), Navigation::Dropped);
        assert!(c.next(50).moved());
    }

    #[test]
    fn cooldown_deadline_saturates() {
        let mut c = carousel(2);
        c.next(u64::MAX - 10);
        assert_eq!(c.remaining(u64::MAX - 10), Some(10));
        assert!(c.tick(u64::MAX));
    }
}
