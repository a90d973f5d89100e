// src/registry/assign.rs
//! Assigns fresh identifiers to records that lack one, and writes each new id
//! back into the record's own source file.

use std::fs;
use std::path::Path;

use crate::corpus::Corpus;
use crate::error::{LatticeError, Result};
use crate::registry::claims::Claims;
use crate::registry::{format_id, id_suffix, Registry};

/// One fresh id handed out during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub slug: String,
    pub id: String,
}

/// Next counter value: one past the highest numeric suffix observed anywhere.
///
/// Derived from the current claims rather than the persisted counter alone,
/// so ids edited into records out of band are tolerated. The persisted
/// registry still participates in the max: an id retired with its record must
/// never be handed out again, or the stability guard would trip on it.
#[must_use]
pub fn compute_next_id(claims: &Claims, previous: &Registry) -> u64 {
    let observed = claims.id_to_slug.keys().filter_map(|id| id_suffix(id));
    let persisted = previous.entities.keys().filter_map(|id| id_suffix(id));
    observed.chain(persisted).max().map_or(1, |n| n + 1)
}

/// Assigns `E<next>` to every record without an id, in scan order, entities
/// before pages. A page backing an entity inherits the entity's id in memory
/// and is never assigned its own.
///
/// Each fresh id is written back into the owning record file, keeping the
/// registry file a derived artifact rather than the sole source of truth.
///
/// # Errors
/// Returns an error if a write-back fails.
pub fn assign_missing(
    corpus: &mut Corpus,
    claims: &mut Claims,
    next_id: &mut u64,
) -> Result<Vec<Assignment>> {
    let mut assigned = Vec::new();

    for entity in &mut corpus.entities {
        if entity.numeric_id.is_some() {
            continue;
        }
        let id = format_id(*next_id);
        *next_id += 1;
        entity.numeric_id = Some(id.clone());
        claims.claim(&id, &entity.slug);
        if let Some(path) = corpus.entity_paths.get(&entity.slug) {
            write_back_id(path, &id)?;
        }
        assigned.push(Assignment {
            slug: entity.slug.clone(),
            id,
        });
    }

    let entity_slugs: std::collections::BTreeSet<String> =
        corpus.entities.iter().map(|e| e.slug.clone()).collect();

    for page in &mut corpus.pages {
        if entity_slugs.contains(&page.slug) {
            page.numeric_id = claims.id_for(&page.slug).map(String::from);
            continue;
        }
        if page.numeric_id.is_some() {
            continue;
        }
        let id = format_id(*next_id);
        *next_id += 1;
        page.numeric_id = Some(id.clone());
        claims.claim(&id, &page.slug);
        if let Some(path) = corpus.page_paths.get(&page.slug) {
            write_back_id(path, &id)?;
        }
        assigned.push(Assignment {
            slug: page.slug.clone(),
            id,
        });
    }

    Ok(assigned)
}

/// Inserts `numericId` into the record's JSON without disturbing fields the
/// compiler does not model.
fn write_back_id(path: &Path, id: &str) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| LatticeError::io(path, e))?;
    let mut value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| LatticeError::json(path, e))?;

    let Some(object) = value.as_object_mut() else {
        return Err(LatticeError::Other(format!(
            "record is not a JSON object: {}",
            path.display()
        )));
    };
    object.insert(
        "numericId".to_string(),
        serde_json::Value::String(id.to_string()),
    );

    let body =
        serde_json::to_string_pretty(&value).map_err(|e| LatticeError::json(path, e))?;
    fs::write(path, body).map_err(|e| LatticeError::io(path, e))
}
