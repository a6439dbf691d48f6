// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parsed preset document.
//!
//! Parsing is strict about shape (objects at every level down to the preset)
//! and lenient about content: parameter values are open-ended scalars, and
//! anything the expander cannot render is dropped with a warning rather than
//! failing the document.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_json::Value;
use stagehand_attrs::Dom;
use stagehand_breakpoint::Breakpoint;

/// The reserved element id whose text content holds the preset JSON.
pub const PRESET_SOURCE_ID: &str = "gsap-presets";

/// Failure to obtain or parse a preset document.
///
/// Any of these aborts the expansion stage entirely — no attributes are
/// written. Other engine stages still run against whatever attributes already
/// exist on the tree.
#[derive(Debug)]
pub enum PresetError {
    /// No preset source was found.
    Missing,
    /// The source text is not valid JSON.
    Parse(serde_json::Error),
    /// The JSON is valid but some level that must be an object is not.
    Shape(&'static str),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no preset document found"),
            Self::Parse(err) => write!(f, "preset document is not valid JSON: {err}"),
            Self::Shape(level) => write!(f, "preset document: {level} must be a JSON object"),
        }
    }
}

impl core::error::Error for PresetError {}

/// A named bundle of animation parameters, reusable across elements.
///
/// Parameter values are stored pre-rendered as attribute strings; breakpoint
/// overrides are grouped per recognized breakpoint.
#[derive(Clone, Debug, Default)]
pub struct Preset {
    split: bool,
    exclude: Option<Box<str>>,
    trigger: Option<Box<str>>,
    params: Vec<(Box<str>, Box<str>)>,
    overrides: Vec<(Breakpoint, Vec<(Box<str>, Box<str>)>)>,
}

impl Preset {
    /// Whether the preset requests word splitting.
    #[must_use]
    pub fn split(&self) -> bool {
        self.split
    }

    /// The exclude list, written verbatim to the element.
    #[must_use]
    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_deref()
    }

    /// The trigger reference, subject to first-writer-wins on the element.
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    /// Breakpoint-agnostic parameters as `(camel key, rendered value)`.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params.iter().map(|(k, v)| (&**k, &**v))
    }

    /// Per-breakpoint parameter overrides.
    pub fn overrides(&self) -> impl Iterator<Item = (Breakpoint, &[(Box<str>, Box<str>)])> + '_ {
        self.overrides.iter().map(|(bp, params)| (*bp, &**params))
    }

    fn from_object(name: &str, object: &serde_json::Map<String, Value>) -> Self {
        let mut preset = Self::default();
        for (key, value) in object {
            match (key.as_str(), value) {
                ("split", Value::Bool(true)) => preset.split = true,
                ("split", _) => {}
                ("exclude", value) => preset.exclude = render_scalar(value),
                ("trigger", value) => preset.trigger = render_scalar(value),
                (key, Value::Object(nested)) => match Breakpoint::from_name(key) {
                    Some(bp) => {
                        let params = nested
                            .iter()
                            .filter_map(|(k, v)| render_scalar(v).map(|v| (k.as_str().into(), v)))
                            .collect();
                        preset.overrides.push((bp, params));
                    }
                    None => {
                        log::warn!("preset {name:?}: parameter {key:?} is not a scalar, dropped");
                    }
                },
                (key, value) => match render_scalar(value) {
                    Some(rendered) => preset.params.push((key.into(), rendered)),
                    None => {
                        log::warn!("preset {name:?}: parameter {key:?} is not a scalar, dropped");
                    }
                },
            }
        }
        preset
    }
}

/// Renders a JSON scalar as an attribute string.
///
/// Strings pass through unquoted; numbers and booleans use their JSON text.
/// Null, arrays, and non-breakpoint objects have no attribute form.
fn render_scalar(value: &Value) -> Option<Box<str>> {
    match value {
        Value::String(s) => Some(s.as_str().into()),
        Value::Number(n) => Some(n.to_string().into()),
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.into()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Default)]
struct DocData {
    categories: Vec<(Box<str>, Vec<(Box<str>, Preset)>)>,
}

/// An immutable preset document: category → animation name → [`Preset`].
///
/// Parsed once at startup and shared cheaply (`Rc` internally, the same
/// shape as a stylesheet that many elements reference).
#[derive(Clone, Debug)]
pub struct PresetDocument {
    inner: Rc<DocData>,
}

impl PresetDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// [`PresetError::Parse`] for malformed JSON, [`PresetError::Shape`] when
    /// the top level, a category, or a preset is not an object.
    pub fn from_json(text: &str) -> Result<Self, PresetError> {
        let value: Value = serde_json::from_str(text).map_err(PresetError::Parse)?;
        let Value::Object(root) = value else {
            return Err(PresetError::Shape("the top level"));
        };

        let mut categories = Vec::with_capacity(root.len());
        for (category, value) in &root {
            let Value::Object(group) = value else {
                return Err(PresetError::Shape("each category"));
            };
            let mut presets = Vec::with_capacity(group.len());
            for (name, value) in group {
                let Value::Object(object) = value else {
                    return Err(PresetError::Shape("each preset"));
                };
                presets.push((name.as_str().into(), Preset::from_object(name, object)));
            }
            categories.push((category.as_str().into(), presets));
        }

        Ok(Self {
            inner: Rc::new(DocData { categories }),
        })
    }

    /// Parses a document from the reserved element's text content.
    ///
    /// The source element is `#gsap-presets` (see [`PRESET_SOURCE_ID`]).
    ///
    /// # Errors
    ///
    /// [`PresetError::Missing`] when the element or its text is absent, plus
    /// everything [`from_json`](Self::from_json) reports.
    pub fn from_dom(dom: &impl Dom) -> Result<Self, PresetError> {
        let mut selector = String::with_capacity(PRESET_SOURCE_ID.len() + 1);
        selector.push('#');
        selector.push_str(PRESET_SOURCE_ID);

        let node = dom.query_selector(&selector).ok_or(PresetError::Missing)?;
        let text = dom.text(node).ok_or(PresetError::Missing)?.to_owned();
        Self::from_json(&text)
    }

    /// Returns the category names present in the document.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.categories.iter().map(|(name, _)| &**name)
    }

    /// Looks up a preset by category and animation name.
    #[must_use]
    pub fn get(&self, category: &str, name: &str) -> Option<&Preset> {
        let (_, presets) = self
            .inner
            .categories
            .iter()
            .find(|(cat, _)| &**cat == category)?;
        presets
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, preset)| preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use stagehand_attrs::MemoryDom;

    #[test]
    fn parse_minimal() {
        let doc = PresetDocument::from_json(r#"{"view": {"fadeUp": {"startY": 40}}}"#).unwrap();
        let preset = doc.get("view", "fadeUp").unwrap();
        let params: Vec<_> = preset.params().collect();
        assert_eq!(params, [("startY", "40")]);
        assert!(!preset.split());
        assert!(preset.exclude().is_none());
    }

    #[test]
    fn parse_special_keys() {
        let doc = PresetDocument::from_json(
            r##"{"words": {"lines": {
                "split": true,
                "exclude": "tablet, mobile-p",
                "trigger": "#hero",
                "stagger": 0.04
            }}}"##,
        )
        .unwrap();
        let preset = doc.get("words", "lines").unwrap();
        assert!(preset.split());
        assert_eq!(preset.exclude(), Some("tablet, mobile-p"));
        assert_eq!(preset.trigger(), Some("#hero"));
        let params: Vec<_> = preset.params().collect();
        assert_eq!(params, [("stagger", "0.04")]);
    }

    #[test]
    fn parse_breakpoint_overrides() {
        let doc = PresetDocument::from_json(
            r#"{"view": {"fadeUp": {"startY": 40, "tablet": {"startY": 20, "duration": 0.5}}}}"#,
        )
        .unwrap();
        let preset = doc.get("view", "fadeUp").unwrap();
        let overrides: Vec<_> = preset.overrides().collect();
        assert_eq!(overrides.len(), 1);
        let (bp, params) = overrides[0];
        assert_eq!(bp, Breakpoint::Tablet);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn unrecognized_breakpoint_object_is_not_an_override() {
        // "watch" is not a breakpoint, and an object value has no scalar form.
        let doc =
            PresetDocument::from_json(r#"{"view": {"a": {"watch": {"startY": 1}}}}"#).unwrap();
        let preset = doc.get("view", "a").unwrap();
        assert_eq!(preset.overrides().count(), 0);
        assert_eq!(preset.params().count(), 0);
    }

    #[test]
    fn split_must_be_true() {
        let doc =
            PresetDocument::from_json(r#"{"words": {"a": {"split": false}}}"#).unwrap();
        assert!(!doc.get("words", "a").unwrap().split());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(
            PresetDocument::from_json("{not json"),
            Err(PresetError::Parse(_))
        ));
    }

    #[test]
    fn non_object_levels_fail() {
        assert!(matches!(
            PresetDocument::from_json("[1, 2]"),
            Err(PresetError::Shape(_))
        ));
        assert!(matches!(
            PresetDocument::from_json(r#"{"view": 3}"#),
            Err(PresetError::Shape(_))
        ));
        assert!(matches!(
            PresetDocument::from_json(r#"{"view": {"fadeUp": "nope"}}"#),
            Err(PresetError::Shape(_))
        ));
    }

    #[test]
    fn from_dom_reads_reserved_element() {
        let mut dom = MemoryDom::new();
        let holder = dom.add_element_with_id(PRESET_SOURCE_ID);
        dom.set_text(holder, r#"{"init": {"hero": {"delay": 0.3}}}"#);

        let doc = PresetDocument::from_dom(&dom).unwrap();
        assert!(doc.get("init", "hero").is_some());
    }

    #[test]
    fn from_dom_missing_element() {
        let dom = MemoryDom::new();
        assert!(matches!(
            PresetDocument::from_dom(&dom),
            Err(PresetError::Missing)
        ));
    }

    #[test]
    fn lookup_misses() {
        let doc = PresetDocument::from_json(r#"{"view": {"fadeUp": {}}}"#).unwrap();
        assert!(doc.get("view", "fadeDown").is_none());
        assert!(doc.get("init", "fadeUp").is_none());
    }
}
