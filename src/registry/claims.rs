// src/registry/claims.rs
//! Scans per-record `numericId` fields into bidirectional maps and detects
//! conflicting claims.
//!
//! The scan reads the records themselves, not the registry file: the corpus
//! is the source of truth, the registry only a witness of the previous run.

use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::error::{LatticeError, Result};
use crate::types::Record;

/// Bidirectional id claims observed in the current corpus.
#[derive(Debug, Clone, Default)]
pub struct Claims {
    pub id_to_slug: BTreeMap<String, String>,
    pub slug_to_id: BTreeMap<String, String>,
}

impl Claims {
    /// Registers one claim. Returns the competing slug if the id is already
    /// held by a different slug.
    pub fn claim(&mut self, id: &str, slug: &str) -> Option<String> {
        match self.id_to_slug.get(id) {
            Some(existing) if existing != slug => Some(existing.clone()),
            _ => {
                self.id_to_slug.insert(id.to_string(), slug.to_string());
                self.slug_to_id.insert(slug.to_string(), id.to_string());
                None
            }
        }
    }

    #[must_use]
    pub fn id_for(&self, slug: &str) -> Option<&str> {
        self.slug_to_id.get(slug).map(String::as_str)
    }
}

/// One identifier claimed by more than one slug. Always fatal: picking a
/// winner silently corrupts every reference to the loser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdConflict {
    pub id: String,
    pub slugs: Vec<String>,
}

/// Collects every declared id, entities before pages, so a page sharing a
/// slug with an entity inherits the entity's id rather than competing for it.
///
/// # Errors
/// Returns `LatticeError::IdConflict` listing every conflicting id. The scan
/// is exhaustive: all conflicts are reported in one pass, not just the first.
pub fn collect_claims(corpus: &Corpus) -> Result<Claims> {
    let mut claims = Claims::default();
    let mut conflicts: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in corpus.records() {
        let Some(id) = record.numeric_id() else {
            continue;
        };
        let slug = record.slug();
        // A page backing an entity defers to the entity's claim.
        if matches!(record, Record::Page(_)) && corpus.entity(slug).is_some() {
            continue;
        }
        if let Some(holder) = claims.claim(id, slug) {
            let entry = conflicts.entry(id.to_string()).or_insert_with(|| vec![holder]);
            entry.push(slug.to_string());
        }
    }

    if conflicts.is_empty() {
        Ok(claims)
    } else {
        let list = conflicts
            .into_iter()
            .map(|(id, slugs)| IdConflict { id, slugs })
            .collect();
        Err(LatticeError::IdConflict(list))
    }
}
