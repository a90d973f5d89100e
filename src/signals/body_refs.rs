// src/signals/body_refs.rs
//! In-body reference collector: structured links inside page bodies.
//!
//! Recognized forms: `[[slug]]` wiki links and root-relative markdown links
//! `](/slug)`. Repeated references from one source to one target count once,
//! and self-references are excluded.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::Corpus;
use crate::signals::{Edge, Signals, BODY_REF_WEIGHT};

static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([a-z0-9][a-z0-9-]*)\]\]").unwrap_or_else(|_| panic!("Invalid Regex")));
static MARKDOWN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(/([a-z0-9][a-z0-9-]*)\)").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Emits one weight-5 edge per distinct `(page, referenced slug)` pair.
pub fn collect(corpus: &Corpus, known: &BTreeSet<String>, out: &mut Signals) {
    for page in &corpus.pages {
        let Some(body) = &page.body else {
            continue;
        };
        for target in extract_targets(body) {
            if target != page.slug && known.contains(&target) {
                out.edges.push(Edge::new(&page.slug, &target, BODY_REF_WEIGHT));
            }
        }
    }
}

/// Distinct referenced slugs in a body, in sorted order.
#[must_use]
pub fn extract_targets(body: &str) -> BTreeSet<String> {
    let mut targets = BTreeSet::new();
    for capture in WIKI_LINK_RE.captures_iter(body) {
        targets.insert(capture[1].to_string());
    }
    for capture in MARKDOWN_LINK_RE.captures_iter(body) {
        targets.insert(capture[1].to_string());
    }
    targets
}
