// src/graph/mod.rs
//! The relationship graph builder: edge accumulation, quality boosting, and
//! type-diverse neighbor selection.

pub mod boost;
pub mod builder;
pub mod select;

pub use builder::{accumulate, build, Adjacency, RelationGraph};

/// Hard cap on a record's related-items list.
pub const MAX_PER_ENTITY: usize = 25;
/// Guaranteed minimum slots per kind with any qualifying candidate.
pub const MIN_PER_TYPE: usize = 2;
/// Boosted scores below this are dropped; filters weak tag-only association.
pub const SCORE_THRESHOLD: f64 = 1.0;
