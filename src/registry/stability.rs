// src/registry/stability.rs
//! The stability guard: numeric ids are embedded in external permalinks, so
//! an id silently moving to a different slug breaks outbound references
//! everywhere. Reassignment is fatal unless the operator explicitly
//! acknowledges an intentional restructuring.

use crate::error::{LatticeError, Result};
use crate::registry::claims::Claims;
use crate::registry::Registry;

/// A previously registered id now claimed by a different slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub id: String,
    pub previous_slug: String,
    pub current_slug: String,
}

/// Compares the previous run's registry against the current claims.
///
/// Ids present in the registry but absent from the corpus are not violations;
/// their records were removed, and the counter logic keeps their ids retired.
///
/// # Errors
/// Returns `LatticeError::Reassignment` listing every moved id, unless
/// `allow` is set, in which case the full list is returned for reporting as
/// acknowledged changes.
pub fn detect_reassignment(
    previous: &Registry,
    current: &Claims,
    allow: bool,
) -> Result<Vec<Reassignment>> {
    let mut moved = Vec::new();

    for (id, previous_slug) in &previous.entities {
        let Some(current_slug) = current.id_to_slug.get(id) else {
            continue;
        };
        if current_slug != previous_slug {
            moved.push(Reassignment {
                id: id.clone(),
                previous_slug: previous_slug.clone(),
                current_slug: current_slug.clone(),
            });
        }
    }

    if moved.is_empty() || allow {
        Ok(moved)
    } else {
        Err(LatticeError::Reassignment(moved))
    }
}
