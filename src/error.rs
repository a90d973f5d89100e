// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::registry::claims::IdConflict;
use crate::registry::stability::Reassignment;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("{} numeric id conflict(s): multiple slugs claim the same identifier", .0.len())]
    IdConflict(Vec<IdConflict>),

    #[error("{} stability violation(s): registered identifiers now map to different slugs", .0.len())]
    Reassignment(Vec<Reassignment>),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LatticeError>;

impl LatticeError {
    /// Wraps an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LatticeError::Io {
            source,
            path: path.into(),
        }
    }

    /// Wraps a serde_json error with the file it came from.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LatticeError::Json {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting with unknown path.
impl From<std::io::Error> for LatticeError {
    fn from(source: std::io::Error) -> Self {
        LatticeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for LatticeError {
    fn from(e: walkdir::Error) -> Self {
        LatticeError::Other(e.to_string())
    }
}
