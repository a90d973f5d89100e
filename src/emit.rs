// src/emit.rs
//! Artifact emission. Graph and index artifacts are plain overwrites; the
//! registry alone gets the atomic treatment, since it is the only artifact
//! the next build depends on.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{LatticeError, Result};
use crate::graph::RelationGraph;
use crate::index::{BacklinkIndex, TagIndex};

/// Writes `graph.json`, `backlinks.json`, and `tags.json` under `out_dir`,
/// creating the directory if needed.
///
/// # Errors
/// Returns an error on any write failure.
pub fn write_artifacts(
    out_dir: &Path,
    graph: &RelationGraph,
    backlinks: &BacklinkIndex,
    tags: &TagIndex,
) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| LatticeError::io(out_dir, e))?;
    write_json(&out_dir.join("graph.json"), graph)?;
    write_json(&out_dir.join("backlinks.json"), backlinks)?;
    write_json(&out_dir.join("tags.json"), tags)?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(|e| LatticeError::json(path, e))?;
    fs::write(path, body).map_err(|e| LatticeError::io(path, e))
}
