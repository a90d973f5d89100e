// src/signals/prefix.rs
//! Slug-prefix affinity: `anthropic` and `anthropic-ipo` are related by
//! naming convention alone. Sub-topic slugs extend their parent with `-`.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::signals::{Edge, Signals, PREFIX_WEIGHT};

/// Emits one weight-6 edge for every pair where one slug is the other plus a
/// `-`-separated suffix.
///
/// Uses ordered range scans over the slug set, so each slug only visits its
/// actual extensions rather than the whole corpus.
pub fn collect(known: &BTreeSet<String>, out: &mut Signals) {
    for slug in known {
        let prefix = format!("{slug}-");
        let range = (Bound::Included(prefix.clone()), Bound::Unbounded);
        for extension in known.range(range) {
            if !extension.starts_with(&prefix) {
                break;
            }
            out.edges.push(Edge::new(slug, extension, PREFIX_WEIGHT));
        }
    }
}
