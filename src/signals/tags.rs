// src/signals/tags.rs
//! Shared-tag collector. Rarer tags say more: two entities sharing a tag
//! carried by four others are barely related, while sharing a two-entity tag
//! is a strong hint. Weight per shared tag is `2 / log2(n + 2)` where `n` is
//! the number of entities carrying it.

use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::signals::{Edge, Signals, TAG_BASE_WEIGHT};

/// Emits one edge per entity pair per shared tag; pairs sharing several tags
/// accumulate downstream.
pub fn collect(corpus: &Corpus, out: &mut Signals) {
    for carriers in tag_carriers(corpus).values() {
        let weight = shared_tag_weight(carriers.len());
        for (i, a) in carriers.iter().enumerate() {
            for b in &carriers[i + 1..] {
                out.edges.push(Edge::new(a, b, weight));
            }
        }
    }
}

/// Tag to sorted carrying-entity slugs.
fn tag_carriers(corpus: &Corpus) -> BTreeMap<String, Vec<String>> {
    let mut carriers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entity in &corpus.entities {
        for tag in &entity.tags {
            carriers.entry(tag.clone()).or_default().push(entity.slug.clone());
        }
    }
    for slugs in carriers.values_mut() {
        slugs.sort();
        slugs.dedup();
    }
    carriers
}

/// `2 / log2(n + 2)`: 1.0 for a two-entity tag, decaying as the tag spreads.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shared_tag_weight(carrier_count: usize) -> f64 {
    TAG_BASE_WEIGHT / ((carrier_count as f64) + 2.0).log2()
}
