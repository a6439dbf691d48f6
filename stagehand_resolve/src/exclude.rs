// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cascade-exclusion rule and its two attribute adapters.
//!
//! Two attribute formats feed one evaluation: the comma-list `exclude`
//! attribute, and the legacy per-breakpoint boolean attribute
//! (`exclude-tablet` and friends). Both reduce to the same question: does
//! some excluded breakpoint's cascade order meet or exceed the active one's?

use stagehand_attrs::{Dom, NodeId, keys};
use stagehand_breakpoint::Breakpoint;

/// Evaluates the one-directional cascade for a single named breakpoint.
///
/// Excluding `named` suppresses `named` itself and every narrower class —
/// order values below it — but never a wider one. Equivalently: the active
/// breakpoint is suppressed when `named >= active`.
fn cascades_to(named: Breakpoint, active: Breakpoint) -> bool {
    named >= active
}

/// Adapter for the comma-list `exclude` attribute.
///
/// Names are whitespace-trimmed; unrecognized names are ignored silently.
pub(crate) fn excluded_by_list(list: &str, active: Breakpoint) -> bool {
    list.split(',')
        .filter_map(|name| Breakpoint::from_name(name.trim()))
        .any(|named| cascades_to(named, active))
}

/// Adapter for the legacy per-breakpoint boolean attribute.
///
/// The old scheme wrote one boolean attribute per excluded breakpoint with
/// no cascade; presence of the attribute named after the active breakpoint
/// is what excludes.
pub(crate) fn excluded_by_legacy(dom: &impl Dom, node: NodeId, active: Breakpoint) -> bool {
    let attr = keys::suffixed_attr_name("exclude", active.name());
    dom.has_attr(node, &attr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_attrs::MemoryDom;

    #[test]
    fn cascade_is_downward_only() {
        // Excluding tablet suppresses tablet and both mobile classes.
        assert!(cascades_to(Breakpoint::Tablet, Breakpoint::Tablet));
        assert!(cascades_to(Breakpoint::Tablet, Breakpoint::MobileL));
        assert!(cascades_to(Breakpoint::Tablet, Breakpoint::MobileP));
        assert!(!cascades_to(Breakpoint::Tablet, Breakpoint::Desktop));

        // Excluding mobile-p suppresses nothing wider.
        assert!(cascades_to(Breakpoint::MobileP, Breakpoint::MobileP));
        assert!(!cascades_to(Breakpoint::MobileP, Breakpoint::MobileL));
        assert!(!cascades_to(Breakpoint::MobileP, Breakpoint::Tablet));
    }

    #[test]
    fn list_parsing_trims_and_ignores_unknown() {
        assert!(excluded_by_list(" tablet , mobile-p", Breakpoint::MobileL));
        assert!(!excluded_by_list("desktop-xl, watch", Breakpoint::MobileP));
        assert!(!excluded_by_list("", Breakpoint::MobileP));
    }

    #[test]
    fn legacy_attribute_matches_active_only() {
        let mut dom = MemoryDom::new();
        let node = dom.add_element();
        dom.set_attr(node, "data-gsap-exclude-tablet", "true");

        assert!(excluded_by_legacy(&dom, node, Breakpoint::Tablet));
        // No cascade in the legacy scheme.
        assert!(!excluded_by_legacy(&dom, node, Breakpoint::MobileL));
        assert!(!excluded_by_legacy(&dom, node, Breakpoint::Desktop));
    }
}
