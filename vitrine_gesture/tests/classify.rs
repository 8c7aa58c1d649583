// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_gesture` classifier.
//!
//! These exercise whole press-to-release sequences the way a host would feed
//! them, with a focus on lock timing and tap-side determinism.

use kurbo::{Point, Rect};
use proptest::prelude::*;
use vitrine_gesture::classify::{AxisLock, Gesture, GestureClassifier, Side, SwipeDirection};
use vitrine_gesture::config::GestureConfig;

const SURFACE: Rect = Rect::new(0.0, 0.0, 400.0, 500.0);

#[test]
fn vertical_first_movement_governs_even_if_horizontal_dominates_later() {
    let mut c = GestureClassifier::default();
    c.press(Point::new(200.0, 200.0), 0);

    // 5px vertical, below the lock threshold: undecided.
    c.motion(Point::new(200.0, 205.0), 16);
    assert_eq!(c.sample().and_then(|s| s.lock), None);

    // Then 40px horizontal: the first sample over threshold decides.
    c.motion(Point::new(240.0, 205.0), 32);
    assert_eq!(c.sample().and_then(|s| s.lock), Some(AxisLock::Horizontal));

    assert_eq!(
        c.release(Point::new(280.0, 205.0), 48, SURFACE),
        Gesture::Swipe(SwipeDirection::Right)
    );
}

#[test]
fn vertical_lock_survives_horizontal_dominant_total() {
    let mut c = GestureClassifier::default();
    c.press(Point::new(200.0, 200.0), 0);
    c.motion(Point::new(201.0, 220.0), 16);
    c.motion(Point::new(100.0, 225.0), 32);

    // Total displacement is (-120, 30): a swipe by final delta alone, but the
    // vertical lock came first.
    assert_eq!(c.release(Point::new(80.0, 230.0), 48, SURFACE), Gesture::Ignore);
}

#[test]
fn tap_side_at_ten_fifty_and_ninety_percent() {
    let mut c = GestureClassifier::default();
    let width = SURFACE.width();
    let mut tap_at = |fraction: f64| {
        let pos = Point::new(width * fraction, 250.0);
        c.press(pos, 0);
        c.release(pos, 10, SURFACE)
    };

    assert_eq!(tap_at(0.1), Gesture::Tap(Side::Left));
    assert_eq!(tap_at(0.9), Gesture::Tap(Side::Right));
    assert_eq!(tap_at(0.5), Gesture::Tap(Side::Right));
    assert_eq!(tap_at(0.5), tap_at(0.5), "midpoint must be stable");
}

#[test]
fn custom_thresholds_are_honoured() {
    let config = GestureConfig::new()
        .with_lock_threshold(5.0)
        .with_swipe_distance(20.0);
    let mut c = GestureClassifier::new(config).unwrap();

    c.press(Point::new(100.0, 100.0), 0);
    c.motion(Point::new(94.0, 100.0), 16);
    assert_eq!(
        c.release(Point::new(75.0, 100.0), 32, SURFACE),
        Gesture::Swipe(SwipeDirection::Left)
    );
}

proptest! {
    #[test]
    fn stationary_release_is_always_a_tap(x in 0.0..400.0_f64, y in 0.0..500.0_f64) {
        let mut c = GestureClassifier::default();
        let pos = Point::new(x, y);
        c.press(pos, 0);
        let expected = if x < 200.0 { Side::Left } else { Side::Right };
        prop_assert_eq!(c.release(pos, 1, SURFACE), Gesture::Tap(expected));
    }

    #[test]
    fn lock_never_changes_once_made(
        moves in proptest::collection::vec((-300.0..300.0_f64, -300.0..300.0_f64), 1..24)
    ) {
        let mut c = GestureClassifier::default();
        c.press(Point::new(200.0, 250.0), 0);
        let mut decided = None;
        for (i, (dx, dy)) in moves.into_iter().enumerate() {
            c.motion(Point::new(200.0 + dx, 250.0 + dy), i as u64 + 1);
            let lock = c.sample().and_then(|s| s.lock);
            if decided.is_some() {
                prop_assert_eq!(lock, decided);
            }
            decided = lock;
        }
    }

    #[test]
    fn every_gesture_has_exactly_one_outcome(
        dx in -300.0..300.0_f64,
        dy in -300.0..300.0_f64,
    ) {
        let mut c = GestureClassifier::default();
        c.press(Point::new(200.0, 250.0), 0);
        c.motion(Point::new(200.0 + dx / 2.0, 250.0 + dy / 2.0), 16);
        let _ = c.release(Point::new(200.0 + dx, 250.0 + dy), 32, SURFACE);
        prop_assert!(!c.is_active());
        prop_assert_eq!(c.release(Point::new(0.0, 0.0), 64, SURFACE), Gesture::Ignore);
    }
}
