// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle-delay tracking for resize and orientation signals.
//!
//! Hosts deliver resize events in bursts. The engine only wants to recompute
//! the breakpoint once a burst has settled, so every signal pushes the
//! deadline out by a fixed delay and the host polls for settlement from its
//! event loop. The debouncer consumes caller-supplied millisecond timestamps
//! rather than owning a clock.

/// Settle delay applied after the last resize/orientation signal, in
/// milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 200;

/// Tracks whether a burst of resize signals has settled.
///
/// # Example
///
/// ```rust
/// use stagehand_breakpoint::ResizeDebouncer;
///
/// let mut debouncer = ResizeDebouncer::new(200);
///
/// debouncer.signal(1_000);
/// debouncer.signal(1_150); // burst continues, deadline pushed out
///
/// assert!(!debouncer.settled(1_200));
/// assert!(debouncer.settled(1_350));
/// // Settlement is reported once per burst.
/// assert!(!debouncer.settled(1_400));
/// ```
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    settle_ms: u64,
    deadline: Option<u64>,
}

impl ResizeDebouncer {
    /// Creates a debouncer with the given settle delay in milliseconds.
    #[must_use]
    pub const fn new(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            deadline: None,
        }
    }

    /// Records a resize or orientation signal at the given timestamp.
    pub fn signal(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + self.settle_ms);
    }

    /// Returns `true` if a pending burst is waiting to settle.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Polls for settlement at the given timestamp.
    ///
    /// Returns `true` exactly once per burst, when the settle delay has
    /// elapsed since the last signal.
    pub fn settled(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_MS)
    }
}
