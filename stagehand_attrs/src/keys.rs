// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known attribute names and key conversion.
//!
//! All stagehand attributes share the `data-gsap` prefix. Preset documents
//! use camel-cased parameter names internally (`startOpacity`); the attribute
//! surface is hyphenated lowercase (`data-gsap-start-opacity`). The
//! conversion is total and idempotent on already-hyphenated input.

use alloc::string::String;

/// The prefix shared by every stagehand attribute.
pub const ATTR_PREFIX: &str = "data-gsap";

/// Category selector for load-time entrance animations.
pub const CATEGORY_INIT: &str = "data-gsap-init";
/// Category selector for scroll-entry animations.
pub const CATEGORY_VIEW: &str = "data-gsap-view";
/// Category selector for word-stagger text animations.
pub const CATEGORY_WORDS: &str = "data-gsap-words";
/// Category selector for scroll-scrubbed parallax motion.
pub const CATEGORY_PARALLAX: &str = "data-gsap-parallax";

/// Comma-separated list of breakpoint names at which to suppress animation.
pub const EXCLUDE: &str = "data-gsap-exclude";
/// Marker written when a preset requests word splitting.
pub const SPLIT: &str = "data-gsap-split";
/// Selector reference for the scroll-trigger element.
pub const TRIGGER: &str = "data-gsap-trigger";

/// Converts a camel-cased preset key to its attribute name.
///
/// Uppercase ASCII becomes a hyphen plus the lowercase letter, and the
/// `data-gsap` prefix is prepended. Already-hyphenated input passes through
/// unchanged (modulo the prefix).
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::keys::attr_name;
///
/// assert_eq!(attr_name("startOpacity"), "data-gsap-start-opacity");
/// assert_eq!(attr_name("start-opacity"), "data-gsap-start-opacity");
/// assert_eq!(attr_name("duration"), "data-gsap-duration");
/// ```
#[must_use]
pub fn attr_name(key: &str) -> String {
    let mut out = String::with_capacity(ATTR_PREFIX.len() + 1 + key.len() + 2);
    out.push_str(ATTR_PREFIX);
    out.push('-');
    push_hyphenated(&mut out, key);
    out
}

/// Converts a preset key to a breakpoint-specific attribute name.
///
/// The breakpoint name is appended as a suffix
/// (`y` at `tablet` becomes `data-gsap-y-tablet`).
///
/// # Example
///
/// ```rust
/// use stagehand_attrs::keys::suffixed_attr_name;
///
/// assert_eq!(suffixed_attr_name("startY", "tablet"), "data-gsap-start-y-tablet");
/// ```
#[must_use]
pub fn suffixed_attr_name(key: &str, suffix: &str) -> String {
    let mut out = attr_name(key);
    out.push('-');
    out.push_str(suffix);
    out
}

fn push_hyphenated(out: &mut String, key: &str) {
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
}
