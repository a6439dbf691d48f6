// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed parameter reads over the resolver.
//!
//! Drivers want plain numbers, strings, and flags; the resolver hands back
//! [`ParamValue`]s. These adapters apply the driver's default a second time
//! when the attribute resolved to the wrong shape (e.g. a numeric value where
//! an easing name belongs).

use alloc::boxed::Box;
use alloc::string::ToString;

use stagehand_attrs::{Dom, NodeId};
use stagehand_resolve::{ParamValue, ResponsiveCx};

pub(crate) fn number(
    cx: &mut ResponsiveCx,
    dom: &impl Dom,
    node: NodeId,
    param: &str,
    default: f64,
) -> f64 {
    cx.get_value(dom, node, param, default).number_or(default)
}

pub(crate) fn text(
    cx: &mut ResponsiveCx,
    dom: &impl Dom,
    node: NodeId,
    param: &str,
    default: &str,
) -> Box<str> {
    match cx.get_value(dom, node, param, default) {
        ParamValue::Text(s) => s,
        // Scroll positions may legitimately resolve numeric; render them.
        ParamValue::Number(n) => n.to_string().into(),
    }
}

pub(crate) fn flag(
    cx: &mut ResponsiveCx,
    dom: &impl Dom,
    node: NodeId,
    param: &str,
    default: bool,
) -> bool {
    cx.get_value(dom, node, param, default).truthy()
}
