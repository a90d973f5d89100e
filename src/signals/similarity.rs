// src/signals/similarity.rs
//! Content-similarity collector: consumes the external scorer's ranked pairs.
//! Similarity enriches the graph but is never required; an empty report
//! simply contributes nothing.

use std::collections::BTreeSet;

use crate::corpus::SimilarityReport;
use crate::signals::{Edge, Signals, SIMILARITY_MAX_WEIGHT};

/// Emits one edge per reported pair, scaled into `0..=3` from the scorer's
/// percentage.
pub fn collect(report: &SimilarityReport, known: &BTreeSet<String>, out: &mut Signals) {
    for (slug, similar) in &report.0 {
        if !known.contains(slug) {
            continue;
        }
        for hit in similar {
            if hit.id == *slug || !known.contains(&hit.id) {
                continue;
            }
            let weight = (hit.similarity_percent / 100.0) * SIMILARITY_MAX_WEIGHT;
            if weight > 0.0 {
                out.edges.push(Edge::new(slug, &hit.id, weight));
            }
        }
    }
}
