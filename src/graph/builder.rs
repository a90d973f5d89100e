// src/graph/builder.rs
//! Graph construction: accumulate collector edges into one symmetric
//! adjacency, boost by candidate quality, threshold, and select.

use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::graph::select::{diverse_top_k, Candidate};
use crate::graph::{boost, MAX_PER_ENTITY, MIN_PER_TYPE, SCORE_THRESHOLD};
use crate::registry::claims::Claims;
use crate::signals::Signals;
use crate::types::{Kind, RelatedNeighbor};

/// Undirected adjacency: slug -> neighbor slug -> summed raw weight.
/// `BTreeMap` throughout keeps iteration, and therefore the emitted graph,
/// deterministic for identical input.
pub type Adjacency = BTreeMap<String, BTreeMap<String, f64>>;

/// The compiled relationship graph: numeric id -> ranked neighbor list.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RelationGraph(pub BTreeMap<String, Vec<RelatedNeighbor>>);

/// Sums every collector edge into a symmetric adjacency. Repeated pairs add;
/// self-edges never form.
#[must_use]
pub fn accumulate(signals: &Signals) -> Adjacency {
    let mut adjacency = Adjacency::new();
    for edge in &signals.edges {
        if edge.a == edge.b {
            continue;
        }
        *adjacency
            .entry(edge.a.clone())
            .or_default()
            .entry(edge.b.clone())
            .or_default() += edge.weight;
        *adjacency
            .entry(edge.b.clone())
            .or_default()
            .entry(edge.a.clone())
            .or_default() += edge.weight;
    }
    adjacency
}

/// Builds the final graph: boost, threshold, type-diverse selection, emit.
///
/// Records whose every candidate fell below the threshold, and records with
/// no identifier, are absent from the output entirely.
#[must_use]
pub fn build(corpus: &Corpus, claims: &Claims, signals: &Signals) -> RelationGraph {
    build_with(corpus, claims, signals, MIN_PER_TYPE, MAX_PER_ENTITY, SCORE_THRESHOLD)
}

/// `build` with explicit tuning, for configuration overrides.
#[must_use]
pub fn build_with(
    corpus: &Corpus,
    claims: &Claims,
    signals: &Signals,
    min_per_kind: usize,
    max_total: usize,
    threshold: f64,
) -> RelationGraph {
    let adjacency = accumulate(signals);
    let mut graph = RelationGraph::default();

    for (slug, neighbors) in &adjacency {
        let Some(source_id) = claims.id_for(slug) else {
            continue;
        };

        let candidates: Vec<Candidate> = neighbors
            .iter()
            .filter_map(|(neighbor, &raw)| score_candidate(corpus, neighbor, raw, threshold))
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let selected = diverse_top_k(candidates, min_per_kind, max_total);
        let list: Vec<RelatedNeighbor> = selected
            .into_iter()
            .filter_map(|c| to_neighbor(corpus, claims, signals, slug, c))
            .collect();
        if !list.is_empty() {
            graph.0.insert(source_id.to_string(), list);
        }
    }

    graph
}

/// Boosts a raw weight by the candidate's own page ratings and applies the
/// threshold. Unrated candidates use the documented defaults.
fn score_candidate(
    corpus: &Corpus,
    neighbor: &str,
    raw: f64,
    threshold: f64,
) -> Option<Candidate> {
    let (quality, importance) = corpus
        .page(neighbor)
        .map_or((None, None), |p| (p.quality, p.importance));
    let score = boost::round2(raw * boost::factor(quality, importance));
    if score < threshold {
        return None;
    }
    Some(Candidate {
        slug: neighbor.to_string(),
        kind: kind_of(corpus, neighbor),
        score,
    })
}

fn to_neighbor(
    corpus: &Corpus,
    claims: &Claims,
    signals: &Signals,
    source: &str,
    candidate: Candidate,
) -> Option<RelatedNeighbor> {
    let id = claims.id_for(&candidate.slug)?;
    Some(RelatedNeighbor {
        id: id.to_string(),
        kind: candidate.kind,
        title: title_of(corpus, &candidate.slug),
        score: candidate.score,
        label: signals
            .labels
            .get(source, &candidate.slug)
            .map(String::from),
    })
}

fn kind_of(corpus: &Corpus, slug: &str) -> Kind {
    corpus
        .entity(slug)
        .map_or(Kind::Page, |e| e.kind.clone())
}

/// Entity title where one exists; page slugs stand in for themselves.
fn title_of(corpus: &Corpus, slug: &str) -> String {
    corpus
        .entity(slug)
        .map_or_else(|| slug.to_string(), |e| e.title.clone())
}
