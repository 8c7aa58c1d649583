// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pile of photos that bursts apart on tap.
//!
//! [`PhotoStack`] holds a small set of photos either stacked or exploded. A
//! click, or a touch that barely moves, toggles between the two and records
//! where the explosion starts. Touches that travel further are page scrolls
//! and change nothing.
//!
//! Leaving rules differ by layout. With a mouse, moving off the stack
//! collapses it; on touch layouts only another tap (or Escape) does.
//!
//! ```
//! use kurbo::Point;
//! use vitrine_gesture::photo_stack::{PhotoStack, StackLayout, TouchEnd};
//!
//! let mut stack = PhotoStack::for_viewport(390.0);
//! assert!(stack.is_compact());
//!
//! stack.touch_start(Point::new(120.0, 200.0));
//! assert_eq!(
//!     stack.touch_end(Point::new(123.0, 204.0)),
//!     TouchEnd::Toggled(StackLayout::Exploded)
//! );
//!
//! // A long drag is a scroll and leaves the stack alone.
//! stack.touch_start(Point::new(120.0, 200.0));
//! assert_eq!(stack.touch_end(Point::new(120.0, 80.0)), TouchEnd::Scrolled);
//! assert!(stack.is_exploded());
//! ```

use kurbo::{Point, Vec2};

use crate::logging::{debug, trace};

/// Whether the photos are piled up or spread out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackLayout {
    /// Piled on top of one another.
    #[default]
    Stacked,
    /// Spread out around the explosion origin.
    Exploded,
}

impl StackLayout {
    fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Exploded,
            Self::Exploded => Self::Stacked,
        }
    }
}

/// Result of lifting a finger off the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEnd {
    /// A tap: the layout toggled. Hosts should cancel the synthetic click
    /// that follows the touch so it does not toggle a second time.
    Toggled(StackLayout),
    /// The finger travelled too far; treated as a page scroll.
    Scrolled,
    /// No touch was in progress.
    Ignored,
}

/// Tap-to-explode state for a photo stack.
#[derive(Clone, Debug)]
pub struct PhotoStack {
    layout: StackLayout,
    compact: bool,
    hovering: bool,
    has_interacted: bool,
    pointer: Point,
    origin: Point,
    touch_start: Option<Point>,
    tap_slop: f64,
}

impl Default for PhotoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoStack {
    /// Viewports narrower than this use touch rules.
    pub const COMPACT_BELOW: f64 = 768.0;
    /// Touches that travel this far or more are scrolls, not taps.
    pub const DEFAULT_TAP_SLOP: f64 = 10.0;
    /// Distance each photo peeks out of the pile.
    pub const PEEK_DISTANCE: f64 = 10.0;

    /// Creates a stacked, mouse-driven stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: StackLayout::Stacked,
            compact: false,
            hovering: false,
            has_interacted: false,
            pointer: Point::ORIGIN,
            origin: Point::ORIGIN,
            touch_start: None,
            tap_slop: Self::DEFAULT_TAP_SLOP,
        }
    }

    /// Creates a stack using the rules for a viewport of `width`.
    #[must_use]
    pub fn for_viewport(width: f64) -> Self {
        let mut stack = Self::new();
        stack.set_viewport_width(width);
        stack
    }

    /// Sets the touch travel at which a tap becomes a scroll.
    #[must_use]
    pub fn with_tap_slop(mut self, slop: f64) -> Self {
        self.tap_slop = slop;
        self
    }

    /// Re-evaluates touch versus mouse rules after a resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.compact = width < Self::COMPACT_BELOW;
        if self.compact {
            self.hovering = false;
        }
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> StackLayout {
        self.layout
    }

    /// Returns `true` while the photos are spread out.
    #[must_use]
    pub fn is_exploded(&self) -> bool {
        self.layout == StackLayout::Exploded
    }

    /// Returns `true` when touch rules apply.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Returns `true` while a mouse hovers the stacked pile.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Returns `true` once the stack has been toggled at least once.
    ///
    /// Hosts use this to retire a "tap me" hint.
    #[must_use]
    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    /// Last pointer position over the pile, in stack coordinates.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Where the most recent explosion started.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Mouse entered the pile. Ignored while exploded or on touch layouts.
    pub fn pointer_enter(&mut self) {
        if !self.compact && !self.is_exploded() {
            self.hovering = true;
        }
    }

    /// Mouse moved over the pile. Ignored while exploded or on touch layouts.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.compact && !self.is_exploded() {
            self.pointer = pos;
        }
    }

    /// Mouse left the stack. Returns `true` if this collapsed it.
    ///
    /// Only mouse layouts collapse on leave.
    pub fn pointer_leave(&mut self) -> bool {
        self.hovering = false;
        if self.compact || !self.is_exploded() {
            return false;
        }
        self.layout = StackLayout::Stacked;
        trace!("photo stack collapsed on leave");
        true
    }

    /// Mouse click at `pos`: toggles the layout. Ignored on touch layouts,
    /// where [`touch_end`](Self::touch_end) handles taps.
    pub fn click(&mut self, pos: Point) -> Option<StackLayout> {
        if self.compact {
            return None;
        }
        Some(self.toggle(pos))
    }

    /// Finger down at `pos`.
    pub fn touch_start(&mut self, pos: Point) {
        self.touch_start = Some(pos);
        self.origin = pos;
        self.pointer = pos;
    }

    /// Finger up at `pos`.
    pub fn touch_end(&mut self, pos: Point) -> TouchEnd {
        let Some(start) = self.touch_start.take() else {
            return TouchEnd::Ignored;
        };
        if (pos - start).hypot() >= self.tap_slop {
            trace!("photo stack touch treated as scroll");
            return TouchEnd::Scrolled;
        }
        TouchEnd::Toggled(self.toggle(pos))
    }

    /// Escape pressed: collapses an exploded stack. Returns `true` if it did.
    pub fn escape(&mut self) -> bool {
        if !self.is_exploded() {
            return false;
        }
        self.layout = StackLayout::Stacked;
        true
    }

    /// How far photo `index` of `count` peeks out of the pile.
    ///
    /// Photos peek only while stacked, and on mouse layouts only while
    /// hovered. The first six fan out right, left, up-right, down-left, up,
    /// and down; later ones spread around a circle.
    #[must_use]
    pub fn peek_offset(&self, index: usize, count: usize) -> Vec2 {
        if self.is_exploded() || (!self.compact && !self.hovering) {
            return Vec2::ZERO;
        }
        const DIAGONAL: f64 = 0.7;
        let direction = match index {
            0 => Vec2::new(1.0, 0.0),
            1 => Vec2::new(-1.0, 0.0),
            2 => Vec2::new(DIAGONAL, -DIAGONAL),
            3 => Vec2::new(-DIAGONAL, DIAGONAL),
            4 => Vec2::new(0.0, -1.0),
            5 => Vec2::new(0.0, 1.0),
            _ => {
                let angle = index as f64 / count.max(1) as f64 * core::f64::consts::TAU;
                Vec2::from_angle(angle)
            }
        };
        direction * Self::PEEK_DISTANCE
    }

    fn toggle(&mut self, pos: Point) -> StackLayout {
        self.origin = pos;
        self.pointer = pos;
        self.has_interacted = true;
        self.layout = self.layout.toggled();
        debug!(layout = ?self.layout, x = pos.x, y = pos.y, "photo stack toggled");
        self.layout
    }
}
