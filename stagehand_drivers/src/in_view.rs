// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-entry tweens (`data-gsap-view`).

use alloc::vec;

use stagehand_attrs::{Dom, keys};
use stagehand_resolve::ResponsiveCx;

use crate::animator::{Animator, MotionVars, ScrollTweenRequest, TweenRequest};
use crate::params;
use crate::trigger::resolve_trigger;

/// Runs the in-view driver over every `data-gsap-view` element.
///
/// Each element tweens to rest once its trigger scrolls past the start
/// position. The trigger defaults to the element itself and can be redirected
/// with `data-gsap-trigger`.
///
/// Parameter defaults: motion parameters as the entrance driver minus the
/// delay (`delay` 0), `start` `"top 85%"`, `markers` false.
pub fn run_in_view(dom: &impl Dom, cx: &mut ResponsiveCx, animator: &mut impl Animator) {
    for node in dom.nodes_with_attr(keys::CATEGORY_VIEW) {
        if cx.is_excluded(dom, node) {
            continue;
        }

        let tween = TweenRequest {
            targets: vec![node],
            from: MotionVars {
                x: params::number(cx, dom, node, "startX", 0.0),
                y: params::number(cx, dom, node, "startY", 24.0),
                opacity: params::number(cx, dom, node, "startOpacity", 0.0),
            },
            to: MotionVars {
                x: params::number(cx, dom, node, "endX", 0.0),
                y: params::number(cx, dom, node, "endY", 0.0),
                opacity: params::number(cx, dom, node, "endOpacity", 1.0),
            },
            duration: params::number(cx, dom, node, "duration", 0.9),
            delay: params::number(cx, dom, node, "delay", 0.0),
            ease: params::text(cx, dom, node, "ease", "power3.out"),
            stagger: 0.0,
        };
        let request = ScrollTweenRequest {
            tween,
            trigger: resolve_trigger(dom, node),
            start: params::text(cx, dom, node, "start", "top 85%"),
            end: None,
            scrub: None,
            markers: params::flag(cx, dom, node, "markers", false),
        };
        animator.scroll_tween(request);
    }
}
