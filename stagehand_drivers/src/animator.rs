// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external capabilities drivers talk to.
//!
//! Stagehand issues animation *requests*; playing them is the embedder's
//! animation library's job. Completion callbacks over there may fire
//! arbitrarily later and in no particular order relative to other drivers'
//! requests — nothing here depends on when they land.

use alloc::boxed::Box;
use alloc::vec::Vec;

use stagehand_attrs::{Dom, NodeId};

/// A set of motion variables at one end of a tween.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionVars {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Opacity, 0 to 1.
    pub opacity: f64,
}

impl MotionVars {
    /// The resting state: no offset, fully opaque.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
    };
}

/// A plain from/to tween over one or more targets.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenRequest {
    /// The elements to animate; more than one only for staggered tweens.
    pub targets: Vec<NodeId>,
    /// Starting motion variables.
    pub from: MotionVars,
    /// Ending motion variables.
    pub to: MotionVars,
    /// Duration in seconds.
    pub duration: f64,
    /// Delay before the tween starts, in seconds. Realized by the animator
    /// as a deferred start.
    pub delay: f64,
    /// Easing name, passed through opaquely (`"power3.out"`).
    pub ease: Box<str>,
    /// Per-target stagger interval in seconds; ignored for single targets.
    pub stagger: f64,
}

/// A tween gated or scrubbed by scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTweenRequest {
    /// The underlying tween.
    pub tween: TweenRequest,
    /// The element whose scroll position gates playback.
    pub trigger: NodeId,
    /// Scroll-position expression where playback starts (opaque string).
    pub start: Box<str>,
    /// Scroll-position expression where playback ends, for scrubbed tweens.
    pub end: Option<Box<str>>,
    /// Scrub smoothing in seconds; `None` plays once on entry instead.
    pub scrub: Option<f64>,
    /// Whether to show the animator's debug markers.
    pub markers: bool,
}

/// The animation library, consumed as an opaque capability.
pub trait Animator {
    /// Requests a plain tween.
    fn tween(&mut self, request: TweenRequest);

    /// Requests a scroll-gated or scroll-scrubbed tween.
    fn scroll_tween(&mut self, request: ScrollTweenRequest);

    /// Asks the animator to recompute position-dependent trigger ranges.
    ///
    /// Called after a breakpoint transition settles.
    fn refresh_triggers(&mut self);
}

/// The text splitter, consumed as an opaque capability.
///
/// Splitting happens in the host tree: the tokenizer replaces the element's
/// text with word-level child nodes and returns their IDs in reading order.
pub trait Tokenizer<D: Dom> {
    /// Splits the element's text into word tokens.
    ///
    /// An empty result means the element had nothing to split; the word
    /// driver warns and skips it.
    fn split_words(&mut self, dom: &mut D, node: NodeId) -> Vec<NodeId>;
}

/// A tokenizer for pages without word animations.
///
/// Always returns no tokens, so every `data-gsap-words` element is skipped
/// with a warning.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTokenizer;

impl<D: Dom> Tokenizer<D> for NoTokenizer {
    fn split_words(&mut self, _dom: &mut D, _node: NodeId) -> Vec<NodeId> {
        Vec::new()
    }
}
