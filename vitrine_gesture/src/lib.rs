// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_gesture --heading-base-level=0

//! Vitrine Gesture: pointer and touch gesture classification for media surfaces.
//!
//! This crate turns raw press/move/release sequences over a swipeable media
//! surface into one discrete intent per gesture. Each module handles one piece:
//!
//! - [`classify`]: Two-stage axis-lock classifier producing [`classify::Gesture`]
//! - [`track`]: Press-to-release displacement bookkeeping
//! - [`hover`]: Which half of a surface the pointer hovers (chevron cursors)
//! - [`listeners`]: Scoped acquisition of global move/release listeners
//! - [`surface`]: A classifier, its bounds, and its listeners bundled together
//! - [`photo_stack`]: Tap-to-explode photo stacks with tap-versus-scroll detection
//! - [`config`]: The consolidated threshold set
//!
//! The crate does not assume any particular UI framework or event system.
//! Hosts feed positions in surface coordinates plus millisecond timestamps,
//! and act on the returned values: preventing native scrolling when asked
//! to, and forwarding [`classify::Gesture::step`] to a carousel.
//!
//! ## Classifying a swipe
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vitrine_gesture::classify::{Gesture, GestureClassifier, Suppress, SwipeDirection};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 500.0);
//! let mut gestures = GestureClassifier::default();
//!
//! gestures.press(Point::new(320.0, 240.0), 0);
//!
//! // 30px left, 2px down: locks horizontal and asks the host to stop page scrolling.
//! let suppress = gestures.motion(Point::new(290.0, 242.0), 16);
//! assert!(suppress.contains(Suppress::SCROLL));
//!
//! let gesture = gestures.release(Point::new(240.0, 246.0), 80, surface);
//! assert_eq!(gesture, Gesture::Swipe(SwipeDirection::Left));
//! assert_eq!(gesture.step(), Some(1));
//! ```
//!
//! ## Letting the page scroll
//!
//! A gesture whose early movement is vertical locks vertical and is never
//! reinterpreted, however far it later drifts sideways:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vitrine_gesture::classify::{Gesture, GestureClassifier, Suppress};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 500.0);
//! let mut gestures = GestureClassifier::default();
//!
//! gestures.press(Point::new(200.0, 200.0), 0);
//! assert_eq!(gestures.motion(Point::new(203.0, 220.0), 16), Suppress::empty());
//! assert_eq!(gestures.motion(Point::new(120.0, 230.0), 32), Suppress::empty());
//! assert_eq!(gestures.release(Point::new(60.0, 240.0), 48, surface), Gesture::Ignore);
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with `std`.
//! - `libm`: Build Kurbo with `libm` for `no_std` targets.
//! - `tracing`: Emit `tracing` events for axis locks and outcomes.
//! - `serde`: Derive `Serialize`/`Deserialize` for configuration and outcomes.
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

mod logging;

pub mod classify;
pub mod config;
pub mod hover;
pub mod listeners;
pub mod photo_stack;
pub mod surface;
pub mod track;
