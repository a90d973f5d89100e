// src/corpus.rs
//! Corpus loading: entity and page records from disk, plus the optional
//! similarity report produced by the external content-similarity scorer.
//!
//! Loading completes fully before any downstream pass runs; the compiler
//! operates on a static in-memory snapshot.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{LatticeError, Result};
use crate::types::{Entity, Page, Record};

/// The full in-memory corpus. Source paths are retained per slug so that
/// freshly assigned identifiers can be written back into the owning file.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub entities: Vec<Entity>,
    pub pages: Vec<Page>,
    pub entity_paths: HashMap<String, PathBuf>,
    pub page_paths: HashMap<String, PathBuf>,
}

impl Corpus {
    /// Builds an in-memory corpus with no backing files. Write-back is a
    /// no-op for records without a source path.
    #[must_use]
    pub fn in_memory(entities: Vec<Entity>, pages: Vec<Page>) -> Self {
        Self {
            entities,
            pages,
            entity_paths: HashMap::new(),
            page_paths: HashMap::new(),
        }
    }

    /// All records in resolution order: entities first, then pages.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.entities
            .iter()
            .map(Record::Entity)
            .chain(self.pages.iter().map(Record::Page))
    }

    /// Every addressable slug in the corpus.
    #[must_use]
    pub fn known_slugs(&self) -> BTreeSet<String> {
        self.records().map(|r| r.slug().to_string()).collect()
    }

    #[must_use]
    pub fn entity(&self, slug: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.slug == slug)
    }

    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

/// Loads every `*.json` record under `<root>/entities` and `<root>/pages`.
///
/// Scan order is sorted by path, so identifier assignment downstream is
/// deterministic across runs and platforms.
///
/// # Errors
/// Returns an error if a record file cannot be read or parsed. A missing
/// `entities/` or `pages/` directory is treated as an empty set, not an error.
pub fn load(root: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::default();

    for path in json_files(&root.join("entities")) {
        let entity: Entity = read_record(&path)?;
        corpus.entity_paths.insert(entity.slug.clone(), path);
        corpus.entities.push(entity);
    }
    for path in json_files(&root.join("pages")) {
        let page: Page = read_record(&path)?;
        corpus.page_paths.insert(page.slug.clone(), path);
        corpus.pages.push(page);
    }

    Ok(corpus)
}

fn json_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

fn read_record<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|e| LatticeError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| LatticeError::json(path, e))
}

/// One ranked hit from the external similarity scorer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarPage {
    /// Slug of the similar page.
    pub id: String,
    pub similarity_percent: f64,
}

/// Per-page ranked similarity lists, keyed by source slug. Treated as an
/// opaque oracle: the compiler never recomputes or validates the scores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarityReport(pub BTreeMap<String, Vec<SimilarPage>>);

/// Loads the similarity report, if the collaborator produced one.
///
/// Absence degrades gracefully: the graph is built from the remaining four
/// signals. A present-but-unparseable file is an error, since silently
/// dropping a collaborator's output would under-count weights.
///
/// # Errors
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_similarity(path: Option<&Path>) -> Result<SimilarityReport> {
    let Some(path) = path else {
        return Ok(SimilarityReport::default());
    };
    if !path.exists() {
        return Ok(SimilarityReport::default());
    }
    let raw = fs::read_to_string(path).map_err(|e| LatticeError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| LatticeError::json(path, e))
}
