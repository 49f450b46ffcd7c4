//! Anomaly scoring of dataset rows against a built ensemble
//!
//! Scoring each row only reads the dataset and the ensemble, so rows are
//! mapped in parallel with rayon. Output order matches dataset row order.

use rayon::prelude::*;

use crate::dataset::Dataset;
use crate::distance::euclidean;
use crate::ensemble::{Ensemble, NnSet};

/// Anomaly score of every dataset row, in row order. Each score is in [0,1].
pub fn score_all(dataset: &Dataset, ensemble: &Ensemble) -> Vec<f64> {
    (0..dataset.num_rows())
        .into_par_iter()
        .map(|r| score_row(dataset, ensemble, dataset.row(r)))
        .collect()
}

/// Anomaly score of a single feature vector against the ensemble.
pub fn score_row(dataset: &Dataset, ensemble: &Ensemble, row: &[f64]) -> f64 {
    let total: f64 = ensemble
        .members()
        .iter()
        .map(|member| member_score(dataset, member, row))
        .sum();

    total / ensemble.len() as f64
}

/// Score contributed by one member: the isolation score of the smallest
/// hypersphere enclosing the row, or 1.0 when no sphere encloses it.
fn member_score(dataset: &Dataset, member: &NnSet, row: &[f64]) -> f64 {
    let mut min_radius = f64::INFINITY;
    let mut candidate = 1.0;

    for k in 0..member.len() {
        let radius = member.enclosure_radius(k);
        let distance = euclidean(row, dataset.row(member.sample_indices()[k]));
        if distance <= radius && radius < min_radius {
            min_radius = radius;
            candidate = member.isolation_score(k);
        }
    }

    candidate
}
