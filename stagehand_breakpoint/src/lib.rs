// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Breakpoint: viewport classification and change tracking.
//!
//! Responsive animation parameters are keyed by a named viewport-width class,
//! the [`Breakpoint`]. Exactly one breakpoint is active at any instant,
//! determined solely by viewport width. The cascade order
//! `mobile-p < mobile-l < tablet < desktop` is what exclusion rules compare
//! against.
//!
//! - [`Breakpoint`]: the four classes, their inclusive pixel ranges, and the
//!   total cascade order.
//! - [`Viewport`]: the host's width query.
//! - [`BreakpointWatcher`]: memoizes the active breakpoint and reports actual
//!   transitions.
//! - [`ResizeDebouncer`]: settle-delay tracking for resize/orientation
//!   signals, driven by caller-supplied timestamps.
//!
//! ## Quick Start
//!
//! ```rust
//! use stagehand_breakpoint::{Breakpoint, BreakpointWatcher};
//!
//! let mut watcher = BreakpointWatcher::new();
//!
//! // A fixed-width viewport; real hosts query their window.
//! assert_eq!(watcher.current(&800_u32), Breakpoint::Tablet);
//!
//! // Memoized until a refresh observes a different class.
//! let change = watcher.refresh(&1280_u32).unwrap();
//! assert_eq!(change.from, Breakpoint::Tablet);
//! assert_eq!(change.to, Breakpoint::Desktop);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not allocate. It does not depend on `std`.

#![no_std]

mod breakpoint;
mod debounce;
mod watcher;

pub use breakpoint::Breakpoint;
pub use debounce::{DEFAULT_SETTLE_MS, ResizeDebouncer};
pub use watcher::{BreakpointChange, BreakpointWatcher, Viewport};
