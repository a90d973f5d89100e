// src/signals/labels.rs
//! Fixed inversion table for directional relationship labels.
//!
//! Data, not branching: labels without an entry simply have no natural
//! inverse, and the reverse direction of such an edge stays unlabeled.

const INVERSIONS: &[(&str, &str)] = &[
    ("causes", "caused by"),
    ("caused by", "causes"),
    ("mitigates", "mitigated by"),
    ("mitigated by", "mitigates"),
    ("regulates", "regulated by"),
    ("regulated by", "regulates"),
    ("funds", "funded by"),
    ("funded by", "funds"),
    ("employs", "employed by"),
    ("employed by", "employs"),
    ("created", "created by"),
    ("created by", "created"),
    ("supersedes", "superseded by"),
    ("superseded by", "supersedes"),
    ("part of", "contains"),
    ("contains", "part of"),
];

/// Returns the natural inverse of a relationship label, if one is defined.
#[must_use]
pub fn invert(label: &str) -> Option<&'static str> {
    INVERSIONS
        .iter()
        .find(|(forward, _)| *forward == label)
        .map(|(_, inverse)| *inverse)
}
