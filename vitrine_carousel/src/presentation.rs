// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views of a carousel for renderers.
//!
//! Everything here is derived from `(current_index, direction)` and the
//! cooldown clock; nothing in this module can change the index.

use core::iter::FusedIterator;

use kurbo::{Rect, Vec2};

use crate::carousel::{Carousel, Direction, Phase};

/// The observable state of a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselView {
    /// Index of the displayed slide.
    pub index: usize,
    /// Direction of the in-flight transition.
    pub direction: Direction,
    /// Whether input is currently being dropped.
    pub transitioning: bool,
    /// Number of slides.
    pub len: usize,
}

/// Where slides start and end their transition, in surface widths.
///
/// Negative values are to the left of the surface, positive to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMotion {
    /// Starting horizontal offset of the incoming slide.
    pub enter_from: f64,
    /// Final horizontal offset of the outgoing slide.
    pub exit_to: f64,
}

impl SlideMotion {
    /// Motion for a transition in `direction`.
    ///
    /// Moving forward, the next slide comes in from the right while the old
    /// one leaves to the left; backward is the mirror image. Non-directional
    /// changes crossfade in place.
    #[must_use]
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self {
                enter_from: 1.0,
                exit_to: -1.0,
            },
            Direction::Backward => Self {
                enter_from: -1.0,
                exit_to: 1.0,
            },
            Direction::None => Self {
                enter_from: 0.0,
                exit_to: 0.0,
            },
        }
    }
}

/// Placement of one slide in a rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePose {
    /// Slide index.
    pub index: usize,
    /// Horizontal offset in surface widths.
    pub offset: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl SlidePose {
    /// The offset as a translation for a surface of the given bounds.
    #[must_use]
    pub fn translation(&self, surface: Rect) -> Vec2 {
        Vec2::new(self.offset * surface.width(), 0.0)
    }
}

/// The slides to draw at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    /// The current slide.
    pub incoming: SlidePose,
    /// The previous slide, while it is still animating out.
    pub outgoing: Option<SlidePose>,
    /// Eased transition progress in `0.0..=1.0`; `1.0` when settled.
    pub progress: f64,
}

/// Ease-out cubic: fast start, gentle settle.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// One pagination dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    /// Slide this dot jumps to.
    pub index: usize,
    /// Whether it marks the displayed slide.
    pub active: bool,
}

/// Iterator over pagination dots; see [`Carousel::dots`].
#[derive(Clone, Debug)]
pub struct Dots {
    next: usize,
    len: usize,
    active: usize,
}

impl Iterator for Dots {
    type Item = Dot;

    fn next(&mut self) -> Option<Dot> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Dot {
            index,
            active: index == self.active,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dots {}

impl FusedIterator for Dots {}

impl<T> Carousel<T> {
    /// Snapshot of the observable state.
    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.current_index(),
            direction: self.direction(),
            transitioning: self.is_transitioning(),
            len: self.len(),
        }
    }

    /// Motion parameters for the current direction.
    #[must_use]
    pub fn motion(&self) -> SlideMotion {
        SlideMotion::for_direction(self.direction())
    }

    /// Slide poses at `now`.
    ///
    /// The transition runs for exactly the cooldown, so the frame reaches its
    /// settled pose at the same moment input is accepted again.
    #[must_use]
    pub fn frame(&self, now: u64) -> SlideFrame {
        let index = self.current_index();
        let Phase::Transitioning {
            from,
            started,
            until,
        } = self.phase()
        else {
            return settled(index);
        };
        let span = until.saturating_sub(started);
        if span == 0 || now >= until {
            return settled(index);
        }
        let elapsed = now.saturating_sub(started);
        let linear = elapsed as f64 / span as f64;
        let progress = ease_out_cubic(linear);
        let motion = self.motion();
        SlideFrame {
            incoming: SlidePose {
                index,
                offset: motion.enter_from * (1.0 - progress),
                opacity: progress,
            },
            outgoing: Some(SlidePose {
                index: from,
                offset: motion.exit_to * progress,
                opacity: 1.0 - progress,
            }),
            progress,
        }
    }

    /// Pagination dots, or none if the configuration hides them.
    #[must_use]
    pub fn dots(&self) -> Dots {
        Dots {
            next: 0,
            len: if self.config().show_dots { self.len() } else { 0 },
            active: self.current_index(),
        }
    }
}

fn settled(index: usize) -> SlideFrame {
    SlideFrame {
        incoming: SlidePose {
            index,
            offset: 0.0,
            opacity: 1.0,
        },
        outgoing: None,
        progress: 1.0,
    }
}
