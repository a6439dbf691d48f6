// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load-time entrance reveals (`data-gsap-init`).

use alloc::vec;

use stagehand_attrs::{Dom, keys};
use stagehand_resolve::ResponsiveCx;

use crate::animator::{Animator, MotionVars, TweenRequest};
use crate::params;

/// Runs the entrance driver over every `data-gsap-init` element.
///
/// Each element tweens from its start offsets/opacity to rest once at load.
/// The small reveal delay is carried on the request and deferred by the
/// animator.
///
/// Parameter defaults: `start-x` 0, `start-y` 24, `start-opacity` 0,
/// `end-x`/`end-y` 0, `end-opacity` 1, `duration` 0.9, `delay` 0.15,
/// `ease` `"power3.out"`.
pub fn run_entrance(dom: &impl Dom, cx: &mut ResponsiveCx, animator: &mut impl Animator) {
    for node in dom.nodes_with_attr(keys::CATEGORY_INIT) {
        if cx.is_excluded(dom, node) {
            continue;
        }

        let request = TweenRequest {
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
            delay: params::number(cx, dom, node, "delay", 0.15),
            ease: params::text(cx, dom, node, "ease", "power3.out"),
            stagger: 0.0,
        };
        animator.tween(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingAnimator;
    use stagehand_attrs::MemoryDom;
    use stagehand_breakpoint::Breakpoint;

    #[test]
    fn issues_one_tween_per_element() {
        let mut dom = MemoryDom::new();
        let hero = dom.add_element();
        dom.set_attr(hero, "data-gsap-init", "hero");
        let tagline = dom.add_element();
        dom.set_attr(tagline, "data-gsap-init", "hero");

        let mut cx = ResponsiveCx::new(Breakpoint::Desktop);
        let mut animator = RecordingAnimator::default();
        run_entrance(&dom, &mut cx, &mut animator);

        assert_eq!(animator.tweens.len(), 2);
        assert_eq!(animator.tweens[0].targets, [hero]);
        assert_eq!(animator.tweens[1].targets, [tagline]);
    }

    #[test]
    fn applies_defaults_and_attributes() {
        let mut dom = MemoryDom::new();
        let hero = dom.add_element();
        dom.set_attr(hero, "data-gsap-init", "hero");
        dom.set_attr(hero, "data-gsap-start-y", "48");
        dom.set_attr(hero, "data-gsap-ease", "expo.out");

        let mut cx = ResponsiveCx::new(Breakpoint::Desktop);
        let mut animator = RecordingAnimator::default();
        run_entrance(&dom, &mut cx, &mut animator);

        let tween = &animator.tweens[0];
        assert_eq!(tween.from.y, 48.0);
        assert_eq!(tween.from.opacity, 0.0);
        assert_eq!(tween.to, MotionVars::REST);
        assert_eq!(tween.duration, 0.9);
        assert_eq!(tween.delay, 0.15);
        assert_eq!(&*tween.ease, "expo.out");
    }

    #[test]
    fn excluded_elements_produce_nothing() {
        let mut dom = MemoryDom::new();
        let hero = dom.add_element();
        dom.set_attr(hero, "data-gsap-init", "hero");
        dom.set_attr(hero, "data-gsap-exclude", "mobile-p");

        let mut cx = ResponsiveCx::new(Breakpoint::MobileP);
        let mut animator = RecordingAnimator::default();
        run_entrance(&dom, &mut cx, &mut animator);
        assert!(animator.tweens.is_empty());

        let mut cx = ResponsiveCx::new(Breakpoint::Desktop);
        run_entrance(&dom, &mut cx, &mut animator);
        assert_eq!(animator.tweens.len(), 1);
    }
}
