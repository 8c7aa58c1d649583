// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A swipeable surface: classifier, bounds, and scoped listeners in one place.

use kurbo::{Point, Rect};

use crate::classify::{Gesture, GestureClassifier, Suppress};
use crate::config::{ConfigError, GestureConfig};
use crate::listeners::{ListenerHost, ScopedListeners};

/// Classifies gestures over a fixed surface rectangle.
///
/// Listeners are acquired on [`press`](Self::press) and released on
/// [`release`](Self::release), [`cancel`](Self::cancel), or drop.
#[derive(Debug)]
pub struct SwipeSurface<H: ListenerHost> {
    classifier: GestureClassifier,
    listeners: ScopedListeners<H>,
    bounds: Rect,
}

impl<H: ListenerHost> SwipeSurface<H> {
    /// Creates a surface covering `bounds`.
    ///
    /// Fails if [`GestureConfig::validate`] rejects `config`.
    pub fn new(host: H, config: GestureConfig, bounds: Rect) -> Result<Self, ConfigError> {
        Ok(Self {
            classifier: GestureClassifier::new(config)?,
            listeners: ScopedListeners::new(host),
            bounds,
        })
    }

    /// The surface rectangle taps are measured against.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the surface rectangle after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Pointer down: starts a gesture and attaches listeners.
    pub fn press(&mut self, pos: Point, time: u64) {
        self.classifier.press(pos, time);
        self.listeners.acquire();
    }

    /// Pointer move; see [`GestureClassifier::motion`].
    pub fn motion(&mut self, pos: Point, time: u64) -> Suppress {
        self.classifier.motion(pos, time)
    }

    /// Pointer up: classifies the gesture and detaches listeners.
    pub fn release(&mut self, pos: Point, time: u64) -> Gesture {
        let gesture = self.classifier.release(pos, time, self.bounds);
        self.listeners.release();
        gesture
    }

    /// Abandons any in-flight gesture and detaches listeners.
    ///
    /// Returns `true` if a gesture was in flight.
    pub fn cancel(&mut self) -> bool {
        self.listeners.release();
        self.classifier.cancel()
    }

    /// The underlying classifier.
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Returns `true` while move/release listeners are attached.
    #[must_use]
    pub fn listeners_held(&self) -> bool {
        self.listeners.is_held()
    }
}
