// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-tree seam and the in-memory reference tree.
//!
//! Stagehand does not assume any particular document tree. [`Dom`] is the
//! trait embedders implement over their own tree; [`MemoryDom`] is the
//! concrete implementation used throughout the workspace's tests and by
//! embedders without a native tree.

use alloc::boxed::Box;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::id::NodeId;
use crate::store::AttrStore;

/// The seam between stagehand and the embedder's element tree.
///
/// All engine stages read and write elements exclusively through this trait.
/// Queries are synchronous reads of already-available state; none of them can
/// fail transiently.
pub trait Dom {
    /// Returns the attribute value, if set on the element.
    fn attr(&self, node: NodeId, key: &str) -> Option<&str>;

    /// Sets an attribute, replacing any previous value.
    fn set_attr(&mut self, node: NodeId, key: &str, value: &str);

    /// Sets an attribute only if the element does not already carry it.
    ///
    /// Returns `true` if the value was written.
    fn set_attr_if_absent(&mut self, node: NodeId, key: &str, value: &str) -> bool;

    /// Returns `true` if the element carries the attribute.
    fn has_attr(&self, node: NodeId, key: &str) -> bool {
        self.attr(node, key).is_some()
    }

    /// Returns every element carrying the attribute, in document order.
    fn nodes_with_attr(&self, key: &str) -> Vec<NodeId>;

    /// Returns the element's text content, if any.
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Resolves a selector reference to an element.
    ///
    /// The selector language is host-defined; unresolvable references return
    /// `None` and callers fall back silently.
    fn query_selector(&self, selector: &str) -> Option<NodeId>;
}

#[derive(Clone, Debug, Default)]
struct NodeData {
    attrs: AttrStore,
    text: Option<Box<str>>,
}

/// An in-memory element tree.
///
/// Elements are created in document order and identified by [`NodeId`].
/// The selector language implemented by [`Dom::query_selector`] is the `#id`
/// subset, which is all the trigger-reference feature uses.
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::{Dom, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// let section = dom.add_element_with_id("features");
/// let card = dom.add_element();
/// dom.set_attr(card, "data-gsap-trigger", "#features");
///
/// assert_eq!(dom.query_selector("#features"), Some(section));
/// assert_eq!(dom.query_selector("#missing"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    ids: HashMap<Box<str>, NodeId>,
}

impl MemoryDom {
    /// Creates a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a new element and returns its ID.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "tree sizes stay far below u32::MAX"
    )]
    pub fn add_element(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(NodeData::default());
        id
    }

    /// Appends a new element with an `id` usable in `#id` selectors.
    pub fn add_element_with_id(&mut self, element_id: &str) -> NodeId {
        let node = self.add_element();
        self.ids.insert(element_id.into(), node);
        node
    }

    /// Sets the element's text content.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.index() as usize].text = Some(text.into());
    }

    /// Returns the element's attribute store.
    #[must_use]
    pub fn attrs(&self, node: NodeId) -> &AttrStore {
        &self.nodes[node.index() as usize].attrs
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index() as usize]
    }
}

impl Dom for MemoryDom {
    fn attr(&self, node: NodeId, key: &str) -> Option<&str> {
        self.nodes[node.index() as usize].attrs.get(key)
    }

    fn set_attr(&mut self, node: NodeId, key: &str, value: &str) {
        self.data_mut(node).attrs.set(key, value);
    }

    fn set_attr_if_absent(&mut self, node: NodeId, key: &str, value: &str) -> bool {
        self.data_mut(node).attrs.set_if_absent(key, value)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "tree sizes stay far below u32::MAX"
    )]
    fn nodes_with_attr(&self, key: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.attrs.contains(key))
            .map(|(i, _)| NodeId::new(i as u32))
            .collect()
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index() as usize].text.as_deref()
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let id = selector.strip_prefix('#')?;
        self.ids.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_attrs_roundtrip() {
        let mut dom = MemoryDom::new();
        let node = dom.add_element();

        assert!(dom.attr(node, "data-gsap-view").is_none());
        dom.set_attr(node, "data-gsap-view", "fadeUp");
        assert_eq!(dom.attr(node, "data-gsap-view"), Some("fadeUp"));
        assert!(dom.has_attr(node, "data-gsap-view"));
    }

    #[test]
    fn dom_set_if_absent() {
        let mut dom = MemoryDom::new();
        let node = dom.add_element();

        assert!(dom.set_attr_if_absent(node, "data-gsap-trigger", "#a"));
        assert!(!dom.set_attr_if_absent(node, "data-gsap-trigger", "#b"));
        assert_eq!(dom.attr(node, "data-gsap-trigger"), Some("#a"));
    }

    #[test]
    fn dom_query_document_order() {
        let mut dom = MemoryDom::new();
        let a = dom.add_element();
        let b = dom.add_element();
        let c = dom.add_element();
        dom.set_attr(c, "data-gsap-init", "hero");
        dom.set_attr(a, "data-gsap-init", "hero");
        dom.set_attr(b, "data-gsap-view", "fadeUp");

        assert_eq!(dom.nodes_with_attr("data-gsap-init"), [a, c]);
        assert_eq!(dom.nodes_with_attr("data-gsap-view"), [b]);
        assert!(dom.nodes_with_attr("data-gsap-words").is_empty());
    }

    #[test]
    fn dom_selector_subset() {
        let mut dom = MemoryDom::new();
        let hero = dom.add_element_with_id("hero");

        assert_eq!(dom.query_selector("#hero"), Some(hero));
        assert_eq!(dom.query_selector("#nope"), None);
        // Non-id selectors are outside the supported subset.
        assert_eq!(dom.query_selector(".card"), None);
    }

    #[test]
    fn dom_text() {
        let mut dom = MemoryDom::new();
        let node = dom.add_element();
        assert!(dom.text(node).is_none());
        dom.set_text(node, "hello world");
        assert_eq!(dom.text(node), Some("hello world"));
    }
}
