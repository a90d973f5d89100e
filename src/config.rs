// src/config.rs
//! Compiler configuration: CLI-provided paths and flags, with optional
//! tuning overrides from `lattice.toml` in the content root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LatticeError, Result};
use crate::graph::{MAX_PER_ENTITY, MIN_PER_TYPE, SCORE_THRESHOLD};

#[derive(Debug, Clone)]
pub struct Config {
    pub content_dir: PathBuf,
    pub out_dir: PathBuf,
    pub registry_path: PathBuf,
    pub similarity_path: Option<PathBuf>,
    /// Operator acknowledgment for intentional slug restructuring. Suppresses
    /// only the reassignment-class fatal error, never id conflicts.
    pub allow_reassignment: bool,
    pub verbose: bool,
    pub tuning: Tuning,
}

/// Graph tuning knobs. Signal weights are deliberately not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub max_per_entity: usize,
    pub min_per_type: usize,
    pub score_threshold: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_per_entity: MAX_PER_ENTITY,
            min_per_type: MIN_PER_TYPE,
            score_threshold: SCORE_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TuningFile {
    #[serde(default)]
    graph: TuningSection,
}

#[derive(Debug, Default, Deserialize)]
struct TuningSection {
    max_per_entity: Option<usize>,
    min_per_type: Option<usize>,
    score_threshold: Option<f64>,
}

impl Config {
    #[must_use]
    pub fn new(content_dir: PathBuf, out_dir: PathBuf, registry_path: PathBuf) -> Self {
        Self {
            content_dir,
            out_dir,
            registry_path,
            similarity_path: None,
            allow_reassignment: false,
            verbose: false,
            tuning: Tuning::default(),
        }
    }

    /// Applies `lattice.toml` from the content root, if present. Absent file
    /// means defaults; a malformed file is an error rather than a silent
    /// fallback.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_tuning(&mut self) -> Result<()> {
        let path = self.content_dir.join("lattice.toml");
        if !path.exists() {
            return Ok(());
        }
        let raw = fs::read_to_string(&path).map_err(|e| LatticeError::io(&path, e))?;
        let file: TuningFile = toml::from_str(&raw)
            .map_err(|e| LatticeError::Other(format!("{}: {e}", path.display())))?;

        if let Some(v) = file.graph.max_per_entity {
            self.tuning.max_per_entity = v;
        }
        if let Some(v) = file.graph.min_per_type {
            self.tuning.min_per_type = v;
        }
        if let Some(v) = file.graph.score_threshold {
            self.tuning.score_threshold = v;
        }
        Ok(())
    }
}

/// Default registry location under a content root.
#[must_use]
pub fn default_registry_path(content_dir: &Path) -> PathBuf {
    content_dir.join("registry.json")
}
