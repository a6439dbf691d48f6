// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Resolve: breakpoint-aware attribute resolution and caching.
//!
//! Once presets have been expanded into flat attributes, every animation
//! parameter is resolved through one precedence chain:
//!
//! **Breakpoint-specific attribute → Generic attribute → Caller default**
//!
//! [`ResponsiveCx`] is the single per-page resolver instance. It owns the
//! active breakpoint and a lazy memo of every resolution; a breakpoint
//! transition clears the whole memo atomically, so no value resolved under
//! one breakpoint can ever be observed under another.
//!
//! ```rust
//! use stagehand_attrs::{Dom, MemoryDom};
//! use stagehand_breakpoint::Breakpoint;
//! use stagehand_resolve::{ParamValue, ResponsiveCx};
//!
//! let mut dom = MemoryDom::new();
//! let card = dom.add_element();
//! dom.set_attr(card, "data-gsap-start-y", "40");
//! dom.set_attr(card, "data-gsap-start-y-tablet", "20");
//!
//! let mut cx = ResponsiveCx::new(Breakpoint::Desktop);
//! assert_eq!(cx.get_value(&dom, card, "startY", 24.0), ParamValue::Number(40.0));
//!
//! cx.set_breakpoint(Breakpoint::Tablet);
//! assert_eq!(cx.get_value(&dom, card, "startY", 24.0), ParamValue::Number(20.0));
//! ```
//!
//! The same context evaluates exclusion:
//!
//! ```rust
//! use stagehand_attrs::{Dom, MemoryDom};
//! use stagehand_breakpoint::Breakpoint;
//! use stagehand_resolve::ResponsiveCx;
//!
//! let mut dom = MemoryDom::new();
//! let card = dom.add_element();
//! dom.set_attr(card, "data-gsap-exclude", "tablet");
//!
//! // Excluding tablet cascades down to the mobile classes, never up.
//! let mut cx = ResponsiveCx::new(Breakpoint::MobileP);
//! assert!(cx.is_excluded(&dom, card));
//! cx.set_breakpoint(Breakpoint::Desktop);
//! assert!(!cx.is_excluded(&dom, card));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod cx;
mod exclude;
mod value;

pub use cx::ResponsiveCx;
pub use value::ParamValue;
