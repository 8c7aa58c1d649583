// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped move/release listener registration.
//!
//! Global move and release listeners are only needed while a gesture is in
//! flight. [`ScopedListeners`] attaches them on press and detaches them on
//! release, and its `Drop` detaches whatever is still held, so a surface torn
//! down mid-gesture cannot leak listeners.

use core::fmt;

/// A host that can register and unregister gesture listeners.
///
/// Implementations are typically cheap handles (a document or window
/// reference); the registration token identifies what to remove later.
pub trait ListenerHost {
    /// Token returned by [`attach`](Self::attach) and consumed by [`detach`](Self::detach).
    type Registration;

    /// Registers move and release listeners.
    fn attach(&mut self) -> Self::Registration;

    /// Removes listeners previously registered by [`attach`](Self::attach).
    fn detach(&mut self, registration: Self::Registration);
}

/// Holds at most one listener registration and releases it on drop.
pub struct ScopedListeners<H: ListenerHost> {
    host: H,
    held: Option<H::Registration>,
}

impl<H: ListenerHost> fmt::Debug for ScopedListeners<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedListeners")
            .field("held", &self.held.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: ListenerHost> ScopedListeners<H> {
    /// Wraps `host` with nothing attached.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host, held: None }
    }

    /// Attaches listeners unless already held. Returns `true` if newly attached.
    pub fn acquire(&mut self) -> bool {
        if self.held.is_some() {
            return false;
        }
        self.held = Some(self.host.attach());
        true
    }

    /// Detaches held listeners. Returns `true` if anything was detached.
    pub fn release(&mut self) -> bool {
        match self.held.take() {
            Some(registration) => {
                self.host.detach(registration);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while listeners are attached.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// The wrapped host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ListenerHost> Drop for ScopedListeners<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Counts {
        attached: Cell<u32>,
        detached: Cell<u32>,
    }

    struct Host(Rc<Counts>);

    impl ListenerHost for Host {
        type Registration = u32;

        fn attach(&mut self) -> u32 {
            self.0.attached.set(self.0.attached.get() + 1);
            self.0.attached.get()
        }

        fn detach(&mut self, registration: u32) {
            assert_eq!(registration, self.0.attached.get(), "detaching a stale token");
            self.0.detached.set(self.0.detached.get() + 1);
        }
    }

    #[test]
    fn acquire_is_idempotent_while_held() {
        let counts = Rc::new(Counts::default());
        let mut scope = ScopedListeners::new(Host(counts.clone()));

        assert!(scope.acquire());
        assert!(!scope.acquire());
        assert_eq!(counts.attached.get(), 1);

        assert!(scope.release());
        assert!(!scope.release());
        assert_eq!(counts.detached.get(), 1);
    }

    #[test]
    fn drop_detaches_held_listeners() {
        let counts = Rc::new(Counts::default());
        {
            let mut scope = ScopedListeners::new(Host(counts.clone()));
            scope.acquire();
        }
        assert_eq!(counts.attached.get(), 1);
        assert_eq!(counts.detached.get(), 1);
    }

    #[test]
    fn drop_after_release_does_not_detach_twice() {
        let counts = Rc::new(Counts::default());
        {
            let mut scope = ScopedListeners::new(Host(counts.clone()));
            scope.acquire();
            scope.release();
        }
        assert_eq!(counts.detached.get(), 1);
    }
}
