// src/signals/declared.rs
//! Declared-relation collector: the strongest signal. An author explicitly
//! listing B on A's record is worth more than anything inferred.

use std::collections::BTreeSet;

use crate::corpus::Corpus;
use crate::signals::{labels, Edge, Signals, DECLARED_WEIGHT};

/// Emits one weight-10 edge per declared relation whose target exists, and
/// populates the label overlay.
///
/// Explicit labels are recorded for the asserted direction. The inversion
/// table then fills the opposite direction, but only where no explicit label
/// was asserted there.
pub fn collect(corpus: &Corpus, known: &BTreeSet<String>, out: &mut Signals) {
    // Explicit labels first, so inference can never displace one.
    for entity in &corpus.entities {
        for relation in &entity.declared_relations {
            if relation.id == entity.slug || !known.contains(&relation.id) {
                continue;
            }
            out.edges
                .push(Edge::new(&entity.slug, &relation.id, DECLARED_WEIGHT));
            if let Some(label) = &relation.relationship {
                out.labels.set_explicit(&entity.slug, &relation.id, label);
            }
        }
    }

    for entity in &corpus.entities {
        for relation in &entity.declared_relations {
            if relation.id == entity.slug || !known.contains(&relation.id) {
                continue;
            }
            let Some(label) = &relation.relationship else {
                continue;
            };
            if let Some(inverse) = labels::invert(label) {
                out.labels.set_inferred(&relation.id, &entity.slug, inverse);
            }
        }
    }
}
