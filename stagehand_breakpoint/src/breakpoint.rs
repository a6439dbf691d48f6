// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The breakpoint classes, their ranges, and the cascade order.

use core::fmt;

/// A named viewport-width class.
///
/// The derived order is the cascade order used by exclusion rules:
/// `MobileP < MobileL < Tablet < Desktop`. Excluding a breakpoint suppresses
/// it and every breakpoint that orders below it — the cascade runs downward
/// only. Excluding `MobileP` does not touch `Tablet`; this asymmetry is
/// intentional.
///
/// # Example
///
/// ```rust
/// use stagehand_breakpoint::Breakpoint;
///
/// assert_eq!(Breakpoint::classify(375), Breakpoint::MobileP);
/// assert_eq!(Breakpoint::classify(992), Breakpoint::Desktop);
/// assert!(Breakpoint::MobileL < Breakpoint::Tablet);
/// assert_eq!(Breakpoint::from_name("mobile-l"), Some(Breakpoint::MobileL));
/// assert_eq!(Breakpoint::from_name("watch"), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Portrait phones, widths 0-479.
    MobileP,
    /// Landscape phones, widths 480-767.
    MobileL,
    /// Tablets, widths 768-991.
    Tablet,
    /// Desktops, widths 992 and up.
    Desktop,
}

impl Breakpoint {
    /// All breakpoints in cascade order, narrowest first.
    pub const ALL: [Self; 4] = [Self::MobileP, Self::MobileL, Self::Tablet, Self::Desktop];

    /// The inclusive width range of this breakpoint, in pixels.
    ///
    /// `None` as the upper bound means unbounded.
    #[must_use]
    pub const fn range(self) -> (u32, Option<u32>) {
        match self {
            Self::MobileP => (0, Some(479)),
            Self::MobileL => (480, Some(767)),
            Self::Tablet => (768, Some(991)),
            Self::Desktop => (992, None),
        }
    }

    /// Classifies a viewport width into its breakpoint.
    ///
    /// The ranges partition `[0, ∞)`, so the `Desktop` fallback is
    /// unreachable in practice.
    #[must_use]
    pub fn classify(width: u32) -> Self {
        for bp in Self::ALL {
            let (min, max) = bp.range();
            let in_range = width >= min && max.is_none_or(|max| width <= max);
            if in_range {
                return bp;
            }
        }
        Self::Desktop
    }

    /// Returns the hyphenated name used on the attribute surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MobileP => "mobile-p",
            Self::MobileL => "mobile-l",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Parses a hyphenated breakpoint name.
    ///
    /// Unrecognized names yield `None`; callers ignore them silently, which
    /// is what an exclude list with a typo resolves to.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
