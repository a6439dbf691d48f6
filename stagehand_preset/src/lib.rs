// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Preset: named animation-parameter bundles and their expansion.
//!
//! A preset document is one JSON object mapping animation categories
//! (`"init"`, `"view"`, `"words"`, `"parallax"`) to named [`Preset`]s —
//! reusable bundles of animation parameters, optionally overridden per
//! breakpoint. Expansion runs once at load and materializes presets as flat
//! `data-gsap-*` attributes on every element whose category attribute names
//! one.
//!
//! ```rust
//! use stagehand_attrs::{Dom, MemoryDom};
//! use stagehand_preset::{PresetDocument, expand};
//!
//! let doc = PresetDocument::from_json(
//!     r#"{"view": {"fadeUp": {"startY": 40, "tablet": {"startY": 20}}}}"#,
//! ).unwrap();
//!
//! let mut dom = MemoryDom::new();
//! let card = dom.add_element();
//! dom.set_attr(card, "data-gsap-view", "fadeUp");
//!
//! expand(&doc, &mut dom);
//!
//! assert_eq!(dom.attr(card, "data-gsap-start-y"), Some("40"));
//! assert_eq!(dom.attr(card, "data-gsap-start-y-tablet"), Some("20"));
//! ```
//!
//! Parsing is all-or-nothing: a missing or malformed document yields a
//! [`PresetError`] and no attributes are written. Per-element lookups are
//! best-effort: an unknown animation name logs a warning and skips that
//! element only.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod document;
mod expand;

pub use document::{PRESET_SOURCE_ID, Preset, PresetDocument, PresetError};
pub use expand::expand;
