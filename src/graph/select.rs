// src/graph/select.rs
//! Type-diverse top-K selection. A pure ranking cut lets one over-represented
//! kind (usually whatever the corpus has most of) crowd out rarer but
//! relevant kinds; reserving a floor per kind keeps the list varied.

use std::collections::BTreeMap;

use crate::types::Kind;

/// A scored neighbor candidate prior to selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub slug: String,
    pub kind: Kind,
    pub score: f64,
}

/// Selects up to `max_total` candidates, guaranteeing the top `min_per_kind`
/// from every kind that has any candidate, then filling remaining slots by
/// descending score across all kinds.
///
/// Ordering is fully deterministic: score descending, then slug ascending as
/// the tie-break. The returned list is sorted the same way.
#[must_use]
pub fn diverse_top_k(
    mut candidates: Vec<Candidate>,
    min_per_kind: usize,
    max_total: usize,
) -> Vec<Candidate> {
    sort_ranked(&mut candidates);

    let mut by_kind: BTreeMap<Kind, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        by_kind.entry(candidate.kind.clone()).or_default().push(candidate);
    }

    // Per-kind floor first; kinds visited in stable order.
    let mut picked: Vec<Candidate> = Vec::new();
    let mut rest: Vec<Candidate> = Vec::new();
    for group in by_kind.into_values() {
        let floor = min_per_kind.min(group.len());
        let mut group = group.into_iter();
        picked.extend(group.by_ref().take(floor));
        rest.extend(group);
    }

    if picked.len() > max_total {
        sort_ranked(&mut picked);
        picked.truncate(max_total);
    }

    // Fill to the cap from the leftovers, best first.
    sort_ranked(&mut rest);
    let remaining = max_total - picked.len();
    picked.extend(rest.into_iter().take(remaining));

    sort_ranked(&mut picked);
    picked
}

fn sort_ranked(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}
