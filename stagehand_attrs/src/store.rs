// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element sparse attribute storage.
//!
//! This module provides [`AttrStore`] for storing string attributes on
//! elements, using sparse storage to minimize memory for elements with few
//! attributes set.
//!
//! # Implementation
//!
//! A sorted vector with binary search rather than a hash map. This provides:
//!
//! - Better cache locality (contiguous memory)
//! - Lower memory overhead (no hash buckets)
//! - O(log n) lookup, which is fast for typical attribute counts (3-15)
//! - Inline storage for small attribute sets via `SmallVec`

use alloc::boxed::Box;
use smallvec::SmallVec;

/// Default inline capacity for attribute entries.
///
/// An animated element typically carries fewer than 8 `data-gsap-*`
/// attributes, so this avoids heap allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// Per-element sparse storage for string attributes.
///
/// Keys and values are owned strings; entries are kept sorted by key for
/// binary search lookup.
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::AttrStore;
///
/// let mut store = AttrStore::new();
///
/// assert!(store.get("data-gsap-duration").is_none());
///
/// store.set("data-gsap-duration", "0.9");
/// assert_eq!(store.get("data-gsap-duration"), Some("0.9"));
///
/// // First-writer-wins insertion for protected attributes
/// assert!(!store.set_if_absent("data-gsap-duration", "1.4"));
/// assert_eq!(store.get("data-gsap-duration"), Some("0.9"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttrStore {
    /// Entries sorted by key for binary search lookup.
    entries: SmallVec<[(Box<str>, Box<str>); INLINE_CAPACITY]>,
}

impl AttrStore {
    /// Creates a new empty attribute store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn find(&self, key: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| (**k).cmp(key))
    }

    /// Gets the attribute value, if set.
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key).ok().map(|idx| &*self.entries[idx].1)
    }

    /// Returns `true` if the attribute is set.
    #[must_use]
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_ok()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.find(key) {
            Ok(idx) => self.entries[idx].1 = value.into(),
            Err(idx) => self.entries.insert(idx, (key.into(), value.into())),
        }
    }

    /// Sets an attribute only if it is not already set.
    ///
    /// Returns `true` if the value was written. This is the first-writer-wins
    /// rule used for `trigger`: a manual attribute must never be clobbered by
    /// preset expansion.
    pub fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        match self.find(key) {
            Ok(_) => false,
            Err(idx) => {
                self.entries.insert(idx, (key.into(), value.into()));
                true
            }
        }
    }

    /// Removes an attribute.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        if let Ok(idx) = self.find(key) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns an iterator over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (&**k, &**v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn store_new() {
        let store = AttrStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("x").is_none());
    }

    #[test]
    fn store_set_get() {
        let mut store = AttrStore::new();
        store.set("data-gsap-start-y", "40");
        assert_eq!(store.get("data-gsap-start-y"), Some("40"));
        assert!(store.contains("data-gsap-start-y"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_set_replaces() {
        let mut store = AttrStore::new();
        store.set("k", "1");
        store.set("k", "2");
        assert_eq!(store.get("k"), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_set_if_absent() {
        let mut store = AttrStore::new();
        assert!(store.set_if_absent("data-gsap-trigger", "#hero"));
        assert!(!store.set_if_absent("data-gsap-trigger", "#other"));
        assert_eq!(store.get("data-gsap-trigger"), Some("#hero"));
    }

    #[test]
    fn store_remove() {
        let mut store = AttrStore::new();
        store.set("k", "v");
        assert!(store.remove("k"));
        assert!(!store.remove("k"));
        assert!(store.is_empty());
    }

    #[test]
    fn store_sorted_order() {
        let mut store = AttrStore::new();
        store.set("b", "2");
        store.set("c", "3");
        store.set("a", "1");

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn store_binary_search_correctness() {
        let mut store = AttrStore::new();
        let keys: Vec<alloc::string::String> =
            (0..20).map(|i| alloc::format!("key-{i:02}")).collect();

        for (i, key) in keys.iter().enumerate() {
            if i % 2 == 0 {
                store.set(key, "even");
            }
        }
        for (i, key) in keys.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(store.get(key), Some("even"));
            } else {
                assert!(store.get(key).is_none());
            }
        }
    }
}
