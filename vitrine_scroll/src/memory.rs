// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashMap;

use crate::logging::trace;

/// Saved strip offsets keyed by page or strip identifier.
///
/// The host owns one `ScrollMemory` per session and passes it to whatever
/// mounts and unmounts strips. Nothing is global.
///
/// ```
/// use vitrine_scroll::ScrollMemory;
///
/// let mut memory = ScrollMemory::new();
/// assert_eq!(memory.mount("/shop/keyboards"), None);
/// memory.unmount("/shop/keyboards", 480.0);
/// assert_eq!(memory.mount("/shop/keyboards"), Some(480.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScrollMemory {
    offsets: HashMap<String, f64>,
}

impl ScrollMemory {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset to restore when `key` mounts, if one was saved.
    #[must_use]
    pub fn mount(&self, key: &str) -> Option<f64> {
        let offset = self.offsets.get(key).copied();
        trace!(key, ?offset, "scroll memory mount");
        offset
    }

    /// Saves `offset` for `key` as it unmounts. Non-finite offsets are ignored.
    pub fn unmount(&mut self, key: &str, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        trace!(key, offset, "scroll memory unmount");
        if let Some(saved) = self.offsets.get_mut(key) {
            *saved = offset;
        } else {
            self.offsets.insert(String::from(key), offset);
        }
    }

    /// Drops the saved offset for `key`, returning it.
    pub fn forget(&mut self, key: &str) -> Option<f64> {
        self.offsets.remove(key)
    }

    /// Drops every saved offset.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }

    /// Number of saved offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_independent() {
        let mut memory = ScrollMemory::new();
        memory.unmount("a", 10.0);
        memory.unmount("b", 20.0);
        assert_eq!(memory.mount("a"), Some(10.0));
        assert_eq!(memory.mount("b"), Some(20.0));
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn later_unmount_overwrites() {
        let mut memory = ScrollMemory::new();
        memory.unmount("a", 10.0);
        memory.unmount("a", 0.0);
        assert_eq!(memory.mount("a"), Some(0.0));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn non_finite_offsets_are_not_saved() {
        let mut memory = ScrollMemory::new();
        memory.unmount("a", f64::NAN);
        assert!(memory.is_empty());
    }

    #[test]
    fn forget_and_clear() {
        let mut memory = ScrollMemory::new();
        memory.unmount("a", 1.0);
        memory.unmount("b", 2.0);
        assert_eq!(memory.forget("a"), Some(1.0));
        assert_eq!(memory.mount("a"), None);
        memory.clear();
        assert!(memory.is_empty());
    }
}
