// src/compiler.rs
//! The compile pipeline, end to end:
//! load -> collect claims -> stability check -> assign -> signals -> graph ->
//! indices -> emit -> persist registry.
//!
//! State is threaded explicitly through each stage; nothing is ambient. All
//! integrity and stability checks complete before the first byte is written,
//! and the registry is rewritten only after everything else succeeded.

use crate::config::Config;
use crate::corpus::{self, Corpus};
use crate::emit;
use crate::error::Result;
use crate::graph::{self, RelationGraph};
use crate::index::{self, BacklinkIndex, TagIndex};
use crate::registry::{self, Assignment, Reassignment, Registry};
use crate::signals;

/// What a run did, for reporting and tests.
#[derive(Debug, Clone, Default)]
pub struct CompileStats {
    pub entity_count: usize,
    pub page_count: usize,
    pub assigned: Vec<Assignment>,
    pub reassigned: Vec<Reassignment>,
    pub edge_count: usize,
    pub graph_size: usize,
    pub backlink_targets: usize,
    pub tag_count: usize,
}

/// Full compiler output for one run.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub registry: Registry,
    pub graph: RelationGraph,
    pub backlinks: BacklinkIndex,
    pub tags: TagIndex,
    pub stats: CompileStats,
}

/// Runs a complete build against the configured content root and writes all
/// artifacts.
///
/// # Errors
/// Fatal on id conflicts, on reassignment without the override flag, and on
/// I/O failures. The persisted registry is untouched on any error path.
pub fn run(config: &Config) -> Result<CompileOutput> {
    let mut corpus = corpus::load(&config.content_dir)?;
    let similarity = corpus::load_similarity(config.similarity_path.as_deref())?;
    let previous = Registry::load(&config.registry_path);

    let output = compile(&mut corpus, &previous, &similarity, config)?;

    emit::write_artifacts(
        &config.out_dir,
        &output.graph,
        &output.backlinks,
        &output.tags,
    )?;
    output.registry.persist(&config.registry_path)?;

    Ok(output)
}

/// The pure core of a run: everything except disk artifact emission.
/// Identifier write-back into record files still happens here, as part of
/// assignment.
///
/// # Errors
/// Same failure classes as [`run`], minus artifact writes.
pub fn compile(
    corpus: &mut Corpus,
    previous: &Registry,
    similarity: &corpus::SimilarityReport,
    config: &Config,
) -> Result<CompileOutput> {
    // Integrity and stability run exhaustively before anything mutates.
    let mut claims = registry::collect_claims(corpus)?;
    let reassigned =
        registry::detect_reassignment(previous, &claims, config.allow_reassignment)?;

    let mut next_id = registry::compute_next_id(&claims, previous);
    let assigned = registry::assign_missing(corpus, &mut claims, &mut next_id)?;

    let collected = signals::collect(corpus, similarity);
    let graph = graph::builder::build_with(
        corpus,
        &claims,
        &collected,
        config.tuning.min_per_type,
        config.tuning.max_per_entity,
        config.tuning.score_threshold,
    );
    let backlinks = index::backlinks(corpus, &claims);
    let tags = index::tags(corpus);

    let stats = CompileStats {
        entity_count: corpus.entities.len(),
        page_count: corpus.pages.len(),
        assigned,
        reassigned,
        edge_count: collected.edges.len(),
        graph_size: graph.0.len(),
        backlink_targets: backlinks.0.len(),
        tag_count: tags.0.len(),
    };

    Ok(CompileOutput {
        registry: Registry::from_claims(&claims, next_id),
        graph,
        backlinks,
        tags,
        stats,
    })
}
