// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Attrs: element attribute storage and the host-tree seam.
//!
//! Stagehand drives animations from flat `data-gsap-*` attributes written on
//! elements. This crate provides the pieces everything downstream reads and
//! writes through:
//!
//! - [`NodeId`]: opaque element identity.
//! - [`AttrStore`]: per-element sparse attribute storage (sorted vector with
//!   binary search, inline for small sets).
//! - [`Dom`]: the trait seam between stagehand and whatever tree the embedder
//!   actually renders. Stagehand never assumes a browser.
//! - [`MemoryDom`]: a concrete in-memory tree used by tests and by embedders
//!   without a native one.
//! - [`keys`]: the well-known attribute names and the conversion from
//!   camel-cased preset keys to hyphenated attribute names.
//!
//! ## Quick Start
//!
//! ```rust
//! use stagehand_attrs::{Dom, MemoryDom, keys};
//!
//! let mut dom = MemoryDom::new();
//! let hero = dom.add_element();
//! dom.set_attr(hero, keys::CATEGORY_VIEW, "fadeUp");
//! dom.set_attr(hero, &keys::attr_name("startY"), "40");
//!
//! assert_eq!(dom.attr(hero, "data-gsap-start-y"), Some("40"));
//! assert_eq!(dom.nodes_with_attr(keys::CATEGORY_VIEW), vec![hero]);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod dom;
mod id;
pub mod keys;
mod store;

pub use dom::{Dom, MemoryDom};
pub use id::NodeId;
pub use store::AttrStore;
