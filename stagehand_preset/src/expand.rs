// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preset expansion: materializing presets as element attributes.

use alloc::borrow::ToOwned;

use stagehand_attrs::{Dom, NodeId, keys};

use crate::document::{Preset, PresetDocument};

/// Expands the document over the whole tree.
///
/// For every category in the document, every element whose category attribute
/// (`data-gsap-view="fadeUp"` and friends) names a preset in that category
/// gets the preset's parameters written as flat attributes. Elements naming
/// an unknown preset are warned about and skipped; nothing else on them is
/// touched.
///
/// Expansion is idempotent: attribute writes either replace a value with the
/// same rendered text or, for `trigger`, are suppressed when the element
/// already carries one.
pub fn expand<D: Dom>(doc: &PresetDocument, dom: &mut D) {
    for category in doc.categories() {
        let selector = keys::attr_name(category);
        for node in dom.nodes_with_attr(&selector) {
            let Some(name) = dom.attr(node, &selector).map(ToOwned::to_owned) else {
                continue;
            };
            match doc.get(category, &name) {
                Some(preset) => apply(dom, node, preset),
                None => {
                    log::warn!("no {category:?} preset named {name:?}, element {node} skipped");
                }
            }
        }
    }
}

fn apply<D: Dom>(dom: &mut D, node: NodeId, preset: &Preset) {
    if preset.split() {
        dom.set_attr(node, keys::SPLIT, "true");
    }
    if let Some(exclude) = preset.exclude() {
        dom.set_attr(node, keys::EXCLUDE, exclude);
    }
    // First writer wins: a manual trigger attribute is never clobbered.
    if let Some(trigger) = preset.trigger() {
        dom.set_attr_if_absent(node, keys::TRIGGER, trigger);
    }
    for (key, value) in preset.params() {
        let attr = keys::attr_name(key);
        dom.set_attr(node, &attr, value);
    }
    for (bp, params) in preset.overrides() {
        for (key, value) in params {
            let attr = keys::suffixed_attr_name(key, bp.name());
            dom.set_attr(node, &attr, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use stagehand_attrs::MemoryDom;

    fn doc() -> PresetDocument {
        PresetDocument::from_json(
            r##"{
                "view": {
                    "fadeUp": {
                        "up": true,
                        "startY": 40,
                        "startOpacity": 0,
                        "tablet": {"startY": 20}
                    }
                },
                "words": {
                    "reveal": {
                        "split": true,
                        "exclude": "mobile-l",
                        "trigger": "#headline",
                        "stagger": 0.04
                    }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn expands_matched_elements() {
        let mut dom = MemoryDom::new();
        let card = dom.add_element();
        dom.set_attr(card, "data-gsap-view", "fadeUp");

        expand(&doc(), &mut dom);

        assert_eq!(dom.attr(card, "data-gsap-up"), Some("true"));
        assert_eq!(dom.attr(card, "data-gsap-start-y"), Some("40"));
        assert_eq!(dom.attr(card, "data-gsap-start-opacity"), Some("0"));
        assert_eq!(dom.attr(card, "data-gsap-start-y-tablet"), Some("20"));
    }

    #[test]
    fn writes_split_exclude_and_trigger() {
        let mut dom = MemoryDom::new();
        let headline = dom.add_element();
        dom.set_attr(headline, "data-gsap-words", "reveal");

        expand(&doc(), &mut dom);

        assert_eq!(dom.attr(headline, "data-gsap-split"), Some("true"));
        assert_eq!(dom.attr(headline, "data-gsap-exclude"), Some("mobile-l"));
        assert_eq!(dom.attr(headline, "data-gsap-trigger"), Some("#headline"));
        assert_eq!(dom.attr(headline, "data-gsap-stagger"), Some("0.04"));
    }

    #[test]
    fn manual_trigger_wins() {
        let mut dom = MemoryDom::new();
        let headline = dom.add_element();
        dom.set_attr(headline, "data-gsap-words", "reveal");
        dom.set_attr(headline, "data-gsap-trigger", "#custom");

        expand(&doc(), &mut dom);

        assert_eq!(dom.attr(headline, "data-gsap-trigger"), Some("#custom"));
    }

    #[test]
    fn unknown_preset_skips_element() {
        let mut dom = MemoryDom::new();
        let card = dom.add_element();
        dom.set_attr(card, "data-gsap-view", "spinWildly");

        expand(&doc(), &mut dom);

        // Only the category attribute remains; nothing was written.
        let attrs: Vec<_> = dom.attrs(card).iter().collect();
        assert_eq!(attrs, [("data-gsap-view", "spinWildly")]);
    }

    #[test]
    fn expansion_is_idempotent() {
        let mut dom = MemoryDom::new();
        let card = dom.add_element();
        dom.set_attr(card, "data-gsap-view", "fadeUp");
        let headline = dom.add_element();
        dom.set_attr(headline, "data-gsap-words", "reveal");
        dom.set_attr(headline, "data-gsap-trigger", "#custom");

        let doc = doc();
        expand(&doc, &mut dom);
        let after_once: Vec<Vec<_>> = [card, headline]
            .iter()
            .map(|&n| {
                dom.attrs(n)
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect()
            })
            .collect();

        expand(&doc, &mut dom);
        let after_twice: Vec<Vec<_>> = [card, headline]
            .iter()
            .map(|&n| {
                dom.attrs(n)
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect()
            })
            .collect();

        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn untagged_elements_untouched() {
        let mut dom = MemoryDom::new();
        let plain = dom.add_element();

        expand(&doc(), &mut dom);

        assert!(dom.attrs(plain).is_empty());
    }
}
