// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-scrubbed parallax translation (`data-gsap-parallax`).

use alloc::vec;

use stagehand_attrs::{Dom, keys};
use stagehand_resolve::ResponsiveCx;

use crate::animator::{Animator, MotionVars, ScrollTweenRequest, TweenRequest};
use crate::params;
use crate::trigger::resolve_trigger;

/// Runs the parallax driver over every `data-gsap-parallax` element.
///
/// The element's vertical offset is scrubbed between the start and end
/// values as its trigger crosses the viewport. Opacity stays untouched.
///
/// Parameter defaults: `start-y` -60, `end-y` 60, `start` `"top bottom"`,
/// `end` `"bottom top"`, `scrub` 1, `ease` `"none"`, `markers` false.
pub fn run_parallax(dom: &impl Dom, cx: &mut ResponsiveCx, animator: &mut impl Animator) {
    for node in dom.nodes_with_attr(keys::CATEGORY_PARALLAX) {
        if cx.is_excluded(dom, node) {
            continue;
        }

        let tween = TweenRequest {
            targets: vec![node],
            from: MotionVars {
                x: params::number(cx, dom, node, "startX", 0.0),
                y: params::number(cx, dom, node, "startY", -60.0),
                opacity: 1.0,
            },
            to: MotionVars {
                x: params::number(cx, dom, node, "endX", 0.0),
                y: params::number(cx, dom, node, "endY", 60.0),
                opacity: 1.0,
            },
            duration: params::number(cx, dom, node, "duration", 1.0),
            delay: 0.0,
            ease: params::text(cx, dom, node, "ease", "none"),
            stagger: 0.0,
        };
        let request = ScrollTweenRequest {
            tween,
            trigger: resolve_trigger(dom, node),
            start: params::text(cx, dom, node, "start", "top bottom"),
            end: Some(params::text(cx, dom, node, "end", "bottom top")),
            scrub: Some(params::number(cx, dom, node, "scrub", 1.0)),
            markers: params::flag(cx, dom, node, "markers", false),
        };
        animator.scroll_tween(request);
    }
}
