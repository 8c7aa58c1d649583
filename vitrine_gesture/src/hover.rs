// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover side tracking for media surfaces.
//!
//! Pointer hover over a media surface previews where a click would navigate:
//! a chevron cursor on the left half means "previous", on the right half
//! "next". [`HoverSide`] reports enter/leave transitions only when the side
//! actually changes, so hosts can swap cursors without diffing themselves.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use vitrine_gesture::classify::Side;
//! use vitrine_gesture::hover::{HoverEvent, HoverSide};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let mut hover = HoverSide::new();
//!
//! let entered: Vec<_> = hover.update(Point::new(50.0, 10.0), surface).collect();
//! assert_eq!(entered, [HoverEvent::Enter(Side::Left)]);
//! assert!(hover.update(Point::new(60.0, 10.0), surface).is_empty());
//! let crossed: Vec<_> = hover.update(Point::new(350.0, 10.0), surface).collect();
//! assert_eq!(
//!     crossed,
//!     [HoverEvent::Leave(Side::Left), HoverEvent::Enter(Side::Right)]
//! );
//! ```

use core::iter::FusedIterator;

use kurbo::{Point, Rect};

use crate::classify::Side;

/// A hover transition on one half of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer started hovering this half.
    Enter(Side),
    /// The pointer stopped hovering this half.
    Leave(Side),
}

/// Transitions produced by one [`HoverSide`] update: at most a leave
/// followed by an enter.
#[derive(Clone, Debug, Default)]
pub struct HoverEvents {
    events: [Option<HoverEvent>; 2],
    next: usize,
}

impl HoverEvents {
    fn new(leave: Option<Side>, enter: Option<Side>) -> Self {
        Self {
            events: [leave.map(HoverEvent::Leave), enter.map(HoverEvent::Enter)],
            next: 0,
        }
    }

    /// Returns `true` if no transitions remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for HoverEvents {
    type Item = HoverEvent;

    fn next(&mut self) -> Option<HoverEvent> {
        while let Some(slot) = self.events.get_mut(self.next) {
            self.next += 1;
            if let Some(event) = slot.take() {
                return Some(event);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.events[self.next.min(2)..]
            .iter()
            .filter(|slot| slot.is_some())
            .count();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HoverEvents {}

impl FusedIterator for HoverEvents {}

/// Tracks which half of a surface the pointer hovers.
///
/// Touch-first (compact) layouts have no hover; disable the tracker there
/// with [`HoverSide::set_enabled`].
#[derive(Clone, Debug)]
pub struct HoverSide {
    current: Option<Side>,
    enabled: bool,
}

impl Default for HoverSide {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverSide {
    /// Creates an enabled tracker with no hovered side.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            enabled: true,
        }
    }

    /// The currently hovered half, if any.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        self.current
    }

    /// Returns `true` if hover tracking is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Updates from a pointer move and returns the resulting transitions.
    ///
    /// Positions outside `surface` behave like [`leave`](Self::leave).
    pub fn update(&mut self, pos: Point, surface: Rect) -> HoverEvents {
        let next = if self.enabled && surface.contains(pos) {
            Some(Side::of(pos.x, surface))
        } else {
            None
        };
        self.transition(next)
    }

    /// The pointer left the surface.
    pub fn leave(&mut self) -> HoverEvents {
        self.transition(None)
    }

    /// Enables or disables tracking; disabling leaves the current side.
    pub fn set_enabled(&mut self, enabled: bool) -> HoverEvents {
        self.enabled = enabled;
        if enabled {
            HoverEvents::default()
        } else {
            self.transition(None)
        }
    }

    fn transition(&mut self, next: Option<Side>) -> HoverEvents {
        if next == self.current {
            return HoverEvents::default();
        }
        let prev = core::mem::replace(&mut self.current, next);
        HoverEvents::new(prev, next)
    }
}
