// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-page resolution context.

use alloc::boxed::Box;
use hashbrown::HashMap;

use stagehand_attrs::{Dom, NodeId, keys};
use stagehand_breakpoint::Breakpoint;

use crate::exclude::{excluded_by_legacy, excluded_by_list};
use crate::value::ParamValue;

/// The single per-page resolver: active breakpoint plus the responsive value
/// cache.
///
/// Construct one per page/session and pass it by reference to every driver.
/// Everything that depends on the active breakpoint is resolved and cached
/// through this one value.
///
/// # Caching
///
/// Every [`get_value`](Self::get_value) and [`is_excluded`](Self::is_excluded)
/// result is memoized per `(element, parameter)` under the active breakpoint.
/// Entries are created lazily — a parameter never queried never occupies the
/// cache. A breakpoint transition via [`set_breakpoint`](Self::set_breakpoint)
/// clears the entire cache in bulk; entries never survive into another
/// breakpoint, which is why the breakpoint does not need to appear in the
/// key.
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::{Dom, MemoryDom};
/// use stagehand_breakpoint::Breakpoint;
/// use stagehand_resolve::{ParamValue, ResponsiveCx};
///
/// let mut dom = MemoryDom::new();
/// let card = dom.add_element();
/// dom.set_attr(card, "data-gsap-duration", "1.2");
///
/// let mut cx = ResponsiveCx::new(Breakpoint::Desktop);
///
/// // Attribute wins over the default; missing attribute falls back.
/// assert_eq!(cx.get_value(&dom, card, "duration", 0.9), ParamValue::Number(1.2));
/// assert_eq!(cx.get_value(&dom, card, "delay", 0.15), ParamValue::Number(0.15));
/// ```
#[derive(Debug)]
pub struct ResponsiveCx {
    breakpoint: Breakpoint,
    values: HashMap<NodeId, HashMap<Box<str>, ParamValue>>,
    exclusions: HashMap<NodeId, bool>,
}

impl ResponsiveCx {
    /// Creates a context with the given active breakpoint and an empty cache.
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            values: HashMap::new(),
            exclusions: HashMap::new(),
        }
    }

    /// Returns the active breakpoint.
    #[must_use]
    #[inline]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Adopts a new active breakpoint.
    ///
    /// If it differs from the current one, the whole cache is invalidated in
    /// bulk before the new breakpoint takes effect — readers never observe a
    /// mix of entries from two breakpoints. Returns `true` if a transition
    /// happened.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) -> bool {
        if breakpoint == self.breakpoint {
            return false;
        }
        self.values.clear();
        self.exclusions.clear();
        self.breakpoint = breakpoint;
        true
    }

    /// Resolves an animation parameter for an element.
    ///
    /// Resolution order, first match wins:
    ///
    /// 1. the breakpoint-specific attribute (`data-gsap-{param}-{breakpoint}`
    ///    at the active breakpoint),
    /// 2. the generic attribute (`data-gsap-{param}`),
    /// 3. the caller-supplied default.
    ///
    /// `param` is the camel-cased parameter name (`"startY"`); conversion to
    /// the attribute surface happens here. Values that parse as base-10
    /// floats come back as [`ParamValue::Number`], everything else as
    /// [`ParamValue::Text`].
    pub fn get_value(
        &mut self,
        dom: &impl Dom,
        node: NodeId,
        param: &str,
        default: impl Into<ParamValue>,
    ) -> ParamValue {
        if let Some(cached) = self.values.get(&node).and_then(|memo| memo.get(param)) {
            return cached.clone();
        }

        let resolved =
            lookup(dom, node, param, self.breakpoint).unwrap_or_else(|| default.into());
        self.values
            .entry(node)
            .or_default()
            .insert(param.into(), resolved.clone());
        resolved
    }

    /// Returns `true` if the element's animation is suppressed at the active
    /// breakpoint.
    ///
    /// Both exclusion formats are consulted: the comma-list `exclude`
    /// attribute with the downward cascade, and the legacy per-breakpoint
    /// boolean attribute. The verdict is memoized per element until the next
    /// breakpoint transition.
    pub fn is_excluded(&mut self, dom: &impl Dom, node: NodeId) -> bool {
        if let Some(&cached) = self.exclusions.get(&node) {
            return cached;
        }

        let active = self.breakpoint;
        let excluded = dom
            .attr(node, keys::EXCLUDE)
            .is_some_and(|list| excluded_by_list(list, active))
            || excluded_by_legacy(dom, node, active);
        self.exclusions.insert(node, excluded);
        excluded
    }
}

/// The ordered lookup strategies behind [`ResponsiveCx::get_value`].
fn lookup(dom: &impl Dom, node: NodeId, param: &str, active: Breakpoint) -> Option<ParamValue> {
    let candidates = [
        keys::suffixed_attr_name(param, active.name()),
        keys::attr_name(param),
    ];
    candidates
        .iter()
        .find_map(|key| dom.attr(node, key).map(ParamValue::parse))
}
