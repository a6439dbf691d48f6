// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-page engine.

use stagehand_attrs::Dom;
use stagehand_breakpoint::{BreakpointWatcher, ResizeDebouncer, Viewport};
use stagehand_preset::{PresetDocument, expand};
use stagehand_resolve::ResponsiveCx;

use crate::animator::{Animator, Tokenizer};
use crate::entrance::run_entrance;
use crate::in_view::run_in_view;
use crate::parallax::run_parallax;
use crate::words::run_word_stagger;

/// The per-page animation engine.
///
/// Owns the one [`ResponsiveCx`] all drivers share, the breakpoint watcher,
/// and the resize debouncer. Construct one per page/session.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) at load: expand presets (independently guarded —
///    a bad document disables expansion only), then run all four drivers.
/// 2. [`resize_signal`](Self::resize_signal) /
///    [`orientation_signal`](Self::orientation_signal) from the host's event
///    handlers, with host timestamps.
/// 3. [`poll`](Self::poll) from the host's event loop: after the settle
///    delay, recompute the breakpoint; only an actual class change clears
///    the responsive cache and asks the animator to recompute trigger
///    ranges.
///
/// Everything runs synchronously inside the host's handlers; the engine
/// never blocks or retries.
#[derive(Debug)]
pub struct Stage {
    cx: ResponsiveCx,
    watcher: BreakpointWatcher,
    debouncer: ResizeDebouncer,
}

impl Stage {
    /// Creates an engine, classifying the viewport immediately.
    #[must_use]
    pub fn new(viewport: &impl Viewport) -> Self {
        Self::with_debouncer(viewport, ResizeDebouncer::default())
    }

    /// Creates an engine with a custom resize settle delay.
    #[must_use]
    pub fn with_debouncer(viewport: &impl Viewport, debouncer: ResizeDebouncer) -> Self {
        let mut watcher = BreakpointWatcher::new();
        let breakpoint = watcher.current(viewport);
        Self {
            cx: ResponsiveCx::new(breakpoint),
            watcher,
            debouncer,
        }
    }

    /// Returns the shared resolver.
    #[must_use]
    pub fn cx(&mut self) -> &mut ResponsiveCx {
        &mut self.cx
    }

    /// Runs the load sequence: preset expansion, then one driver pass.
    ///
    /// The preset document is read from the tree's reserved `#gsap-presets`
    /// element. A missing or malformed document logs one diagnostic and
    /// disables the expansion stage only — drivers still run against
    /// whatever attributes already exist.
    pub fn init<D: Dom>(
        &mut self,
        dom: &mut D,
        animator: &mut impl Animator,
        tokenizer: &mut impl Tokenizer<D>,
    ) {
        match PresetDocument::from_dom(dom) {
            Ok(doc) => expand(&doc, dom),
            Err(err) => log::error!("preset expansion disabled: {err}"),
        }
        self.run_drivers(dom, animator, tokenizer);
    }

    /// Runs the load sequence with an already-parsed document.
    ///
    /// For embedders that hold the presets as a process-wide object rather
    /// than in the tree.
    pub fn init_with<D: Dom>(
        &mut self,
        doc: &PresetDocument,
        dom: &mut D,
        animator: &mut impl Animator,
        tokenizer: &mut impl Tokenizer<D>,
    ) {
        expand(doc, dom);
        self.run_drivers(dom, animator, tokenizer);
    }

    fn run_drivers<D: Dom>(
        &mut self,
        dom: &mut D,
        animator: &mut impl Animator,
        tokenizer: &mut impl Tokenizer<D>,
    ) {
        run_entrance(dom, &mut self.cx, animator);
        run_in_view(dom, &mut self.cx, animator);
        run_parallax(dom, &mut self.cx, animator);
        run_word_stagger(dom, &mut self.cx, tokenizer, animator);
    }

    /// Records a viewport resize at the given host timestamp.
    pub fn resize_signal(&mut self, now_ms: u64) {
        self.debouncer.signal(now_ms);
    }

    /// Records an orientation change at the given host timestamp.
    ///
    /// Orientation changes settle through the same debouncer as resizes.
    pub fn orientation_signal(&mut self, now_ms: u64) {
        self.debouncer.signal(now_ms);
    }

    /// Polls for a settled resize burst.
    ///
    /// Returns `true` when a burst settled *and* the breakpoint class
    /// actually changed; in that case the responsive cache has been cleared
    /// and the animator asked to recompute trigger ranges. Width changes
    /// within one class settle silently.
    pub fn poll(
        &mut self,
        now_ms: u64,
        viewport: &impl Viewport,
        animator: &mut impl Animator,
    ) -> bool {
        if !self.debouncer.settled(now_ms) {
            return false;
        }
        match self.watcher.refresh(viewport) {
            Some(change) => {
                self.cx.set_breakpoint(change.to);
                animator.refresh_triggers();
                true
            }
            None => false,
        }
    }
}
