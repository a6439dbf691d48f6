// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element identity.

use core::fmt;

/// An opaque element identifier.
///
/// This is a lightweight handle (u32) that uniquely identifies an element
/// within one host tree. Identity is what the responsive value cache and the
/// exclusion cache key on, so a `NodeId` must never be reused for a different
/// element while a [`ResponsiveCx`] built over the same tree is alive.
///
/// [`ResponsiveCx`]: https://docs.rs/stagehand_resolve
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::NodeId;
///
/// let id = NodeId::new(42);
/// assert_eq!(id.index(), 42);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new node ID from the given index.
    ///
    /// This is typically called by the host tree (e.g. [`MemoryDom`](crate::MemoryDom))
    /// rather than directly.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this node ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn id_roundtrip() {
        let id = NodeId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, NodeId::new(7));
        assert!(NodeId::new(1) < NodeId::new(2));
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", NodeId::new(3)), "NodeId(3)");
    }
}
