// src/signals/mod.rs
//! Signal collectors: five independent, pure sources of relatedness evidence.
//!
//! Each collector walks the static corpus snapshot and emits weighted edges.
//! Edges are symmetric by construction; direction exists only in the label
//! overlay, which records what an author asserted about an ordered pair.

pub mod body_refs;
pub mod declared;
pub mod labels;
pub mod prefix;
pub mod similarity;
pub mod tags;

use std::collections::HashMap;

use crate::corpus::{Corpus, SimilarityReport};

/// Signal weights, fixed by design rather than configurable: the relative
/// ordering (declared > prefix > body ref > similarity > shared tag) is what
/// the ranking semantics rest on.
pub const DECLARED_WEIGHT: f64 = 10.0;
pub const PREFIX_WEIGHT: f64 = 6.0;
pub const BODY_REF_WEIGHT: f64 = 5.0;
pub const SIMILARITY_MAX_WEIGHT: f64 = 3.0;
pub const TAG_BASE_WEIGHT: f64 = 2.0;

/// One weighted, undirected piece of evidence between two slugs.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl Edge {
    #[must_use]
    pub fn new(a: &str, b: &str, weight: f64) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        }
    }
}

/// Directional relationship labels keyed by ordered `(source, target)` pair.
/// Kept out of the weight accumulation entirely.
#[derive(Debug, Clone, Default)]
pub struct LabelOverlay {
    labels: HashMap<(String, String), String>,
}

impl LabelOverlay {
    /// Records an author-asserted label for an ordered pair.
    pub fn set_explicit(&mut self, source: &str, target: &str, label: &str) {
        self.labels
            .insert((source.to_string(), target.to_string()), label.to_string());
    }

    /// Records an inferred inverse label, only where no label already exists.
    /// Inferred labels never overwrite explicit ones.
    pub fn set_inferred(&mut self, source: &str, target: &str, label: &str) {
        self.labels
            .entry((source.to_string(), target.to_string()))
            .or_insert_with(|| label.to_string());
    }

    #[must_use]
    pub fn get(&self, source: &str, target: &str) -> Option<&str> {
        self.labels
            .get(&(source.to_string(), target.to_string()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Combined collector output: every edge from every signal, plus the label
/// overlay from declared relations.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    pub edges: Vec<Edge>,
    pub labels: LabelOverlay,
}

/// Runs all five collectors over a complete corpus snapshot.
///
/// The similarity report may be empty (collaborator degradation); the other
/// four signals carry the graph on their own.
#[must_use]
pub fn collect(corpus: &Corpus, similarity: &SimilarityReport) -> Signals {
    let known = corpus.known_slugs();
    let mut signals = Signals::default();

    declared::collect(corpus, &known, &mut signals);
    prefix::collect(&known, &mut signals);
    body_refs::collect(corpus, &known, &mut signals);
    similarity::collect(similarity, &known, &mut signals);
    tags::collect(corpus, &mut signals);

    signals
}
