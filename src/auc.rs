//! Rank-based AUC evaluation
//!
//! Area under the ROC curve computed as the Mann-Whitney U statistic
//! normalized by (positives x negatives). Rows with equal scores are
//! resolved by sort stability (original row order), matching the
//! rank-sum reference rather than applying exact tie correction.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// AUC of `scores` against binary `labels` (1.0 = positive/anomaly,
/// anything else = negative).
///
/// A label vector with no positives or no negatives leaves the statistic
/// undefined and returns [`Error::UndefinedAuc`] instead of NaN/Inf.
pub fn compute_auc(scores: &[f64], labels: &[f64]) -> Result<f64> {
    if scores.len() != labels.len() {
        return Err(Error::DegenerateInput(format!(
            "{} scores but {} labels",
            scores.len(),
            labels.len()
        )));
    }

    // Stable sort by ascending score keeps original order among ties.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));

    let mut tp = 0u64;
    let mut fp = 0u64;
    let mut rank_sum = 0.0f64;

    for &idx in &order {
        if labels[idx] == 1.0 {
            tp += 1;
        } else {
            rank_sum += tp as f64;
            fp += 1;
        }
    }

    if tp == 0 || fp == 0 {
        return Err(Error::UndefinedAuc {
            positives: tp,
            negatives: fp,
        });
    }

    Ok(rank_sum / (tp as f64 * fp as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_separation_is_one() {
        let scores = vec![0.1, 0.2, 0.3, 0.8, 0.9];
        let labels = vec![0.0, 0.0, 0.0, 1.0, 1.0];
        assert_eq!(compute_auc(&scores, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_inverted_separation_is_zero() {
        let scores = vec![0.9, 0.8, 0.1, 0.2];
        let labels = vec![0.0, 0.0, 1.0, 1.0];
        assert_eq!(compute_auc(&scores, &labels).unwrap(), 0.0);
    }

    #[test]
    fn test_tie_break_follows_stable_sort() {
        // Stable ascending order: [(0.2, neg), (0.2, pos), (0.8, pos)].
        // The only negative is scanned before the tied positive with tp
        // still 0, so the rank sum is 0 and AUC = 0 / (2 * 1) = 0.
        let scores = vec![0.2, 0.2, 0.8];
        let labels = vec![0.0, 1.0, 1.0];
        assert_eq!(compute_auc(&scores, &labels).unwrap(), 0.0);
    }

    #[test]
    fn test_random_scores_near_half() {
        // Interleaved labels over evenly spaced scores.
        let scores: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let labels: Vec<f64> = (0..100).map(|i| (i % 2) as f64).collect();
        let auc = compute_auc(&scores, &labels).unwrap();
        assert!((auc - 0.5).abs() < 0.02, "auc = {}", auc);
    }

    #[test]
    fn test_nonunit_labels_count_as_negative() {
        let scores = vec![0.1, 0.9];
        let labels = vec![2.0, 1.0];
        assert_eq!(compute_auc(&scores, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_all_positive_is_undefined() {
        let scores = vec![0.1, 0.9];
        let labels = vec![1.0, 1.0];
        let err = compute_auc(&scores, &labels).unwrap_err();
        assert!(matches!(
            err,
            Error::UndefinedAuc {
                positives: 2,
                negatives: 0
            }
        ));
    }

    #[test]
    fn test_all_negative_is_undefined() {
        let scores = vec![0.1, 0.9];
        let labels = vec![0.0, 0.0];
        let err = compute_auc(&scores, &labels).unwrap_err();
        assert!(matches!(err, Error::UndefinedAuc { positives: 0, .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = compute_auc(&[0.5], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }
}
