// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_carousel --heading-base-level=0

//! Vitrine Carousel: a cooldown-gated media carousel state machine.
//!
//! This crate focuses on the _bookkeeping_ of a slideshow: which slide is
//! showing, which way the last change moved, and whether input is currently
//! accepted. It does **not** render anything or load media; hosts read a
//! [`CarouselView`] (or a [`SlideFrame`] for in-between poses) and draw.
//!
//! The core type is [`Carousel`], generic over the slide type, which tracks:
//! - The fixed, non-empty list of slides.
//! - The current index, always valid, wrapping in both directions.
//! - A [`Direction`] set on each change and cleared when the transition settles.
//! - A cooldown gate: after an accepted request, further requests are
//!   **dropped** (not queued) for [`CarouselConfig::cooldown_ms`].
//!
//! The cooldown is the only serialisation mechanism. Taps, swipes, and dot
//! clicks arrive from unrelated sources; whichever comes first wins and the
//! rest are discarded, so the display never falls behind or skips several
//! slides at once.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_carousel::{Carousel, CarouselConfig, Direction, Navigation};
//!
//! let mut slides = Carousel::new(["A", "B", "C", "D"], CarouselConfig::default()).unwrap();
//!
//! // Accepted: moves forward and starts a 300ms cooldown.
//! assert_eq!(slides.next(0), Navigation::Moved { from: 0, to: 1 });
//! assert_eq!(slides.direction(), Direction::Forward);
//!
//! // A second request inside the cooldown is dropped.
//! assert_eq!(slides.next(120), Navigation::Dropped);
//! assert_eq!(*slides.current(), "B");
//!
//! // Once the cooldown has elapsed, requests are accepted again.
//! assert!(slides.tick(300));
//! assert_eq!(slides.previous(310), Navigation::Moved { from: 1, to: 0 });
//! ```
//!
//! ## Driving from gestures
//!
//! Classified gestures from `vitrine_gesture` map straight onto navigation:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vitrine_carousel::{Carousel, CarouselConfig, MediaItem};
//! use vitrine_gesture::classify::GestureClassifier;
//!
//! let media = [
//!     MediaItem::video("1", "/media/keycadets/launch.mp4"),
//!     MediaItem::image("2", "/media/keycadets/tray.png").with_alt("Metal tray"),
//! ];
//! let mut carousel = Carousel::new(media, CarouselConfig::default()).unwrap();
//! let mut gestures = GestureClassifier::default();
//! let surface = Rect::new(0.0, 0.0, 400.0, 500.0);
//!
//! // Tap on the right half.
//! gestures.press(Point::new(320.0, 200.0), 0);
//! let gesture = gestures.release(Point::new(320.0, 200.0), 40, surface);
//! carousel.apply(gesture, 40);
//!
//! assert_eq!(carousel.current().alt_or("Keycadets"), "Metal tray");
//! ```
//!
//! ## Presentation
//!
//! [`Carousel::view`] exposes `(index, direction)`. [`Carousel::frame`]
//! interpolates the incoming and outgoing slides over exactly the cooldown,
//! using [`SlideMotion`] (forward enters from the right, backward from the
//! left, jumps crossfade). [`Carousel::dots`] lists pagination dots; a dot
//! click maps to [`Carousel::jump`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
mod logging;
mod media;
mod presentation;

pub use carousel::{Carousel, Direction, Navigation};
pub use config::{AspectRatio, CarouselConfig};
pub use error::{CarouselError, ConfigError};
pub use media::{MediaItem, MediaKind};
pub use presentation::{
    CarouselView, Dot, Dots, SlideFrame, SlideMotion, SlidePose, ease_out_cubic,
};
