// src/registry/mod.rs
//! The identifier registry: a conflict-free bidirectional map between opaque
//! numeric ids (`E<n>`) and slugs, stable across builds.
//!
//! The persisted file is a derived artifact. Every id also lives in its own
//! record's source file, so a lost or corrupt registry is reconstructed from
//! the corpus rather than aborting the build. What the registry file uniquely
//! provides is the previous run's mapping, which is what makes reassignment
//! detectable.

pub mod assign;
pub mod claims;
pub mod stability;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};

pub use assign::{assign_missing, compute_next_id, Assignment};
pub use claims::{collect_claims, Claims, IdConflict};
pub use stability::{detect_reassignment, Reassignment};

/// Persisted registry state: monotonic counter plus `E<n> -> slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub next_id: u64,
    pub entities: BTreeMap<String, String>,
}

impl Registry {
    /// A fresh registry with no assignments.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            next_id: 1,
            entities: BTreeMap::new(),
        }
    }

    /// Loads the persisted registry. Missing or corrupt files reset to empty:
    /// the mapping is reconstructible from per-record ids, so refusing to
    /// start would turn a recoverable state into an outage.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::empty();
        };
        match serde_json::from_str(&raw) {
            Ok(reg) => reg,
            Err(_) => Self::empty(),
        }
    }

    /// Builds the post-run registry from verified claims.
    #[must_use]
    pub fn from_claims(claims: &Claims, next_id: u64) -> Self {
        Self {
            next_id,
            entities: claims.id_to_slug.clone(),
        }
    }

    /// Atomically rewrites the registry file: write to a sibling temp file,
    /// then rename over the target. Called only after a complete successful
    /// pass, so a failed build never clobbers the previous run's state.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written or renamed.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self)
            .map_err(|e| LatticeError::json(path, e))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| LatticeError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| LatticeError::io(path, e))?;
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parses the numeric suffix of an `E<n>` identifier.
#[must_use]
pub fn id_suffix(id: &str) -> Option<u64> {
    id.strip_prefix('E')?.parse().ok()
}

/// Formats a numeric suffix as an opaque identifier.
#[must_use]
pub fn format_id(n: u64) -> String {
    format!("E{n}")
}
