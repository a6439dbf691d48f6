// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the driver tests.

use alloc::vec::Vec;

use stagehand_attrs::{Dom, MemoryDom, NodeId};

use crate::animator::{Animator, ScrollTweenRequest, Tokenizer, TweenRequest};

/// Records every request instead of animating.
#[derive(Debug, Default)]
pub(crate) struct RecordingAnimator {
    pub(crate) tweens: Vec<TweenRequest>,
    pub(crate) scroll_tweens: Vec<ScrollTweenRequest>,
    pub(crate) refreshes: usize,
}

impl Animator for RecordingAnimator {
    fn tween(&mut self, request: TweenRequest) {
        self.tweens.push(request);
    }

    fn scroll_tween(&mut self, request: ScrollTweenRequest) {
        self.scroll_tweens.push(request);
    }

    fn refresh_triggers(&mut self) {
        self.refreshes += 1;
    }
}

/// Splits on ASCII whitespace, materializing one node per word.
#[derive(Debug, Default)]
pub(crate) struct WhitespaceTokenizer;

impl Tokenizer<MemoryDom> for WhitespaceTokenizer {
    fn split_words(&mut self, dom: &mut MemoryDom, node: NodeId) -> Vec<NodeId> {
        let Some(text) = dom.text(node) else {
            return Vec::new();
        };
        let words: Vec<alloc::string::String> =
            text.split_ascii_whitespace().map(Into::into).collect();
        words
            .into_iter()
            .map(|word| {
                let token = dom.add_element();
                dom.set_text(token, &word);
                token
            })
            .collect()
    }
}
