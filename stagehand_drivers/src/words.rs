// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered word reveals (`data-gsap-words`).

use stagehand_attrs::{Dom, keys};
use stagehand_resolve::ResponsiveCx;

use crate::animator::{Animator, MotionVars, ScrollTweenRequest, Tokenizer, TweenRequest};
use crate::params;
use crate::trigger::resolve_trigger;

/// Runs the word-stagger driver over every `data-gsap-words` element.
///
/// The element's text is split into word tokens by the [`Tokenizer`], and
/// the tokens tween to rest with a per-token stagger once the element
/// scrolls into view. Elements that yield no tokens are warned about and
/// skipped. Exclusion is checked before tokenizing, so excluded elements
/// keep their text untouched.
///
/// Parameter defaults: `word-spread` 8 (starting vertical offset per token),
/// `start-opacity` 0, `stagger` 0.04, `duration` 0.6, `start` `"top 85%"`,
/// `ease` `"power3.out"`, `markers` false.
pub fn run_word_stagger<D: Dom>(
    dom: &mut D,
    cx: &mut ResponsiveCx,
    tokenizer: &mut impl Tokenizer<D>,
    animator: &mut impl Animator,
) {
    for node in dom.nodes_with_attr(keys::CATEGORY_WORDS) {
        if cx.is_excluded(dom, node) {
            continue;
        }

        let tokens = tokenizer.split_words(dom, node);
        if tokens.is_empty() {
            log::warn!("word animation on {node} produced no tokens, element skipped");
            continue;
        }

        let tween = TweenRequest {
            targets: tokens,
            from: MotionVars {
                x: 0.0,
                y: params::number(cx, dom, node, "wordSpread", 8.0),
                opacity: params::number(cx, dom, node, "startOpacity", 0.0),
            },
            to: MotionVars::REST,
            duration: params::number(cx, dom, node, "duration", 0.6),
            delay: params::number(cx, dom, node, "delay", 0.0),
            ease: params::text(cx, dom, node, "ease", "power3.out"),
            stagger: params::number(cx, dom, node, "stagger", 0.04),
        };
        let request = ScrollTweenRequest {
            trigger: resolve_trigger(dom, node),
            start: params::text(cx, dom, node, "start", "top 85%"),
            end: None,
            scrub: None,
            markers: params::flag(cx, dom, node, "markers", false),
            tween,
        };
        animator.scroll_tween(request);
    }
}
