// src/index.rs
//! Backlink and tag indices: small inverted indices consumed by the graph
//! builder's display layers.
//!
//! Backlinks derive strictly from declared relations, the high-confidence
//! subset of the full graph; inferred signals never produce a backlink.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::Corpus;
use crate::registry::claims::Claims;
use crate::types::Backlink;

/// Target numeric id -> declared sources pointing at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BacklinkIndex(pub BTreeMap<String, Vec<Backlink>>);

/// Tag -> alphabetically ordered carrying-entity slugs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagIndex(pub BTreeMap<String, Vec<String>>);

/// Builds the backlink index from declared relations. Entries per target are
/// ordered by source slug.
#[must_use]
pub fn backlinks(corpus: &Corpus, claims: &Claims) -> BacklinkIndex {
    let mut index: BTreeMap<String, Vec<(String, Backlink)>> = BTreeMap::new();

    for entity in &corpus.entities {
        let Some(source_id) = claims.id_for(&entity.slug) else {
            continue;
        };
        for relation in &entity.declared_relations {
            if relation.id == entity.slug {
                continue;
            }
            let Some(target_id) = claims.id_for(&relation.id) else {
                continue;
            };
            index.entry(target_id.to_string()).or_default().push((
                entity.slug.clone(),
                Backlink {
                    source_id: source_id.to_string(),
                    kind: entity.kind.clone(),
                    title: entity.title.clone(),
                    relationship_label: relation.relationship.clone(),
                },
            ));
        }
    }

    let mut result = BacklinkIndex::default();
    for (target, mut sources) in index {
        sources.sort_by(|(a, _), (b, _)| a.cmp(b));
        result
            .0
            .insert(target, sources.into_iter().map(|(_, b)| b).collect());
    }
    result
}

/// Builds the tag index over entities.
#[must_use]
pub fn tags(corpus: &Corpus) -> TagIndex {
    let mut index = TagIndex::default();
    for entity in &corpus.entities {
        for tag in &entity.tags {
            index.0.entry(tag.clone()).or_default().push(entity.slug.clone());
        }
    }
    for slugs in index.0.values_mut() {
        slugs.sort();
        slugs.dedup();
    }
    index
}
