// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved parameter values.

use alloc::boxed::Box;
use core::fmt;

/// A resolved animation parameter.
///
/// Attribute values that parse as base-10 floats become numbers; everything
/// else passes through as text. That lets offsets and durations arrive as
/// numbers while easing names and scroll-position expressions
/// (`"top bottom"`) survive untouched.
///
/// # Example
///
/// ```rust
/// use stagehand_resolve::ParamValue;
///
/// assert_eq!(ParamValue::parse("12.5"), ParamValue::Number(12.5));
/// assert_eq!(ParamValue::parse("top bottom"), ParamValue::from("top bottom"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A numeric parameter (offset, duration, delay, ...).
    Number(f64),
    /// A pass-through string parameter (easing name, scroll position, ...).
    Text(Box<str>),
}

impl ParamValue {
    /// Parses an attribute string into a value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(raw.into()),
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the numeric value, or `default` if this is text.
    #[must_use]
    pub fn number_or(&self, default: f64) -> f64 {
        self.as_number().unwrap_or(default)
    }

    /// Returns the text value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Interprets the value as a boolean flag.
    ///
    /// The text `"true"` and any non-zero number are truthy; everything else
    /// is falsy. This is how boolean attributes like `markers` read.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => &**s == "true",
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Text(if b { "true" } else { "false" }.into())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
