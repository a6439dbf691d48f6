// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized active-breakpoint tracking.

use crate::breakpoint::Breakpoint;

/// The host's viewport width query.
///
/// Implemented for `u32` so tests and fixed-size hosts can pass a width
/// directly.
pub trait Viewport {
    /// The current viewport width in pixels.
    fn width(&self) -> u32;
}

impl Viewport for u32 {
    fn width(&self) -> u32 {
        *self
    }
}

/// An observed transition between breakpoint classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BreakpointChange {
    /// The previously active breakpoint.
    pub from: Breakpoint,
    /// The newly active breakpoint.
    pub to: Breakpoint,
}

/// Memoizes the active breakpoint between explicit invalidations.
///
/// The viewport width is queried at most once per memo lifetime; resize
/// handling goes through [`refresh`](Self::refresh), which reports a
/// [`BreakpointChange`] only when the class actually changed. Width changes
/// within one class are absorbed silently.
///
/// # Example
///
/// ```rust
/// use stagehand_breakpoint::{Breakpoint, BreakpointWatcher};
///
/// let mut watcher = BreakpointWatcher::new();
/// assert_eq!(watcher.current(&500_u32), Breakpoint::MobileL);
///
/// // Same class: no change reported.
/// assert!(watcher.refresh(&700_u32).is_none());
///
/// // Different class: reported once.
/// assert!(watcher.refresh(&800_u32).is_some());
/// assert_eq!(watcher.current(&800_u32), Breakpoint::Tablet);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BreakpointWatcher {
    current: Option<Breakpoint>,
}

impl BreakpointWatcher {
    /// Creates a watcher with no memoized breakpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active breakpoint, computing and memoizing it on first
    /// use.
    pub fn current(&mut self, viewport: &impl Viewport) -> Breakpoint {
        match self.current {
            Some(bp) => bp,
            None => {
                let bp = Breakpoint::classify(viewport.width());
                self.current = Some(bp);
                bp
            }
        }
    }

    /// Drops the memoized breakpoint.
    ///
    /// The next [`current`](Self::current) call re-queries the viewport.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Recomputes the active breakpoint from the viewport.
    ///
    /// Returns a change record only when the class differs from the memoized
    /// one. The first computation memoizes without reporting a change.
    pub fn refresh(&mut self, viewport: &impl Viewport) -> Option<BreakpointChange> {
        let to = Breakpoint::classify(viewport.width());
        let from = self.current.replace(to);
        match from {
            Some(from) if from != to => Some(BreakpointChange { from, to }),
            _ => None,
        }
    }
}
