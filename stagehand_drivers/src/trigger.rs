// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger-element resolution.

use stagehand_attrs::{Dom, NodeId, keys};

/// Resolves the element whose scroll position gates an animation.
///
/// Reads the element's `data-gsap-trigger` selector reference and resolves it
/// through the host tree. A missing attribute or an unresolvable selector
/// falls back to the animated element itself, silently.
#[must_use]
pub fn resolve_trigger(dom: &impl Dom, node: NodeId) -> NodeId {
    dom.attr(node, keys::TRIGGER)
        .and_then(|selector| dom.query_selector(selector))
        .unwrap_or(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_attrs::MemoryDom;

    #[test]
    fn resolves_selector_reference() {
        let mut dom = MemoryDom::new();
        let section = dom.add_element_with_id("features");
        let card = dom.add_element();
        dom.set_attr(card, "data-gsap-trigger", "#features");

        assert_eq!(resolve_trigger(&dom, card), section);
    }

    #[test]
    fn falls_back_to_self_when_absent() {
        let mut dom = MemoryDom::new();
        let card = dom.add_element();

        assert_eq!(resolve_trigger(&dom, card), card);
    }

    #[test]
    fn falls_back_to_self_when_unresolved() {
        let mut dom = MemoryDom::new();
        let card = dom.add_element();
        dom.set_attr(card, "data-gsap-trigger", "#gone");

        assert_eq!(resolve_trigger(&dom, card), card);
    }
}
