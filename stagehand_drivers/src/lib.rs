// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Drivers: attribute-driven animation issuing.
//!
//! Drivers are where the configuration layers meet the outside world. Each
//! one walks the elements of its category, asks the
//! [`ResponsiveCx`](stagehand_resolve::ResponsiveCx) whether the element is
//! excluded at the active breakpoint, resolves every parameter it needs with
//! a documented default, and issues requests to the embedder's [`Animator`].
//! The animation library itself — tweening, easing, timelines, scroll-linked
//! playback — stays behind that trait, as does word splitting behind
//! [`Tokenizer`].
//!
//! Four drivers cover the attribute surface:
//!
//! - [`run_entrance`]: load-time reveal (`data-gsap-init`).
//! - [`run_in_view`]: scroll-entry tween (`data-gsap-view`).
//! - [`run_parallax`]: scroll-scrubbed translation (`data-gsap-parallax`).
//! - [`run_word_stagger`]: staggered word reveal (`data-gsap-words`).
//!
//! [`Stage`] wires everything into the per-page lifecycle: preset expansion
//! at load (independently guarded), one driver pass, and debounced
//! resize/orientation handling that clears the responsive cache and asks the
//! animator to recompute trigger ranges only when the breakpoint class
//! actually changed.
//!
//! ```rust
//! use stagehand_attrs::{Dom, MemoryDom};
//! use stagehand_drivers::{Animator, ScrollTweenRequest, Stage, TweenRequest};
//!
//! struct NullAnimator;
//! impl Animator for NullAnimator {
//!     fn tween(&mut self, _: TweenRequest) {}
//!     fn scroll_tween(&mut self, _: ScrollTweenRequest) {}
//!     fn refresh_triggers(&mut self) {}
//! }
//!
//! let mut dom = MemoryDom::new();
//! let hero = dom.add_element();
//! dom.set_attr(hero, "data-gsap-init", "hero");
//!
//! let mut stage = Stage::new(&1280_u32);
//! let mut animator = NullAnimator;
//! stage.init(&mut dom, &mut animator, &mut stagehand_drivers::NoTokenizer);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod animator;
mod entrance;
mod in_view;
mod parallax;
mod params;
mod stage;
mod trigger;
mod words;

#[cfg(test)]
pub(crate) mod testing;

pub use animator::{Animator, MotionVars, NoTokenizer, ScrollTweenRequest, Tokenizer, TweenRequest};
pub use entrance::run_entrance;
pub use in_view::run_in_view;
pub use parallax::run_parallax;
pub use stage::Stage;
pub use trigger::resolve_trigger;
pub use words::run_word_stagger;
