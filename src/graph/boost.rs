// src/graph/boost.rs
//! Quality-based re-ranking: a candidate's own editorial ratings scale its
//! raw relatedness weight before selection, so well-maintained pages surface
//! ahead of equally-related thin ones.

/// Median-ish defaults for unrated pages. Chosen so an unrated page is not
/// penalized relative to the middle of the rated population.
pub const DEFAULT_QUALITY: f64 = 5.0;
pub const DEFAULT_IMPORTANCE: f64 = 50.0;

/// `1 + quality/40 + importance/400`.
#[must_use]
pub fn factor(quality: Option<f64>, importance: Option<f64>) -> f64 {
    let quality = quality.unwrap_or(DEFAULT_QUALITY);
    let importance = importance.unwrap_or(DEFAULT_IMPORTANCE);
    1.0 + quality / 40.0 + importance / 400.0
}

/// Rounds to two decimals, half away from zero. The rounding convention for
/// every emitted score.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
