// Property-based tests for the core algorithm: score range, permutation
// bijectivity, and AUC bounds.

use inne::auc::compute_auc;
use inne::dataset::Dataset;
use inne::ensemble::Ensemble;
use inne::error::Error;
use inne::permutation::random_permutation;
use inne::scorer::score_all;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Strategy: a rectangular table of 2..30 rows with a shared width 1..5.
fn dataset_rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..5).prop_flat_map(|width| {
        prop::collection::vec(
            prop::collection::vec(-1.0e3..1.0e3f64, width..=width),
            2..30,
        )
    })
}

proptest! {
    #[test]
    fn prop_scores_always_in_unit_interval(
        rows in dataset_rows(),
        sample_size in 2usize..10,
        ensemble_size in 1usize..15,
        seed in any::<u64>(),
    ) {
        let dataset = Dataset::new(rows, None).unwrap();
        let ensemble = Ensemble::build(
            &dataset,
            sample_size,
            ensemble_size,
            StdRng::seed_from_u64(seed),
        )
        .unwrap();
        let scores = score_all(&dataset, &ensemble);

        prop_assert_eq!(scores.len(), dataset.num_rows());
        for &s in &scores {
            prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn prop_permutation_is_bijective(length in 1usize..200, seed in any::<u64>()) {
        let perm = random_permutation(length, &mut StdRng::seed_from_u64(seed));
        let mut sorted = perm.clone();
        sorted.sort_unstable();
        let identity: Vec<usize> = (0..length).collect();
        prop_assert_eq!(sorted, identity);
    }

    #[test]
    fn prop_member_isolation_scores_in_unit_interval(
        rows in dataset_rows(),
        sample_size in 2usize..10,
        seed in any::<u64>(),
    ) {
        let dataset = Dataset::new(rows, None).unwrap();
        let ensemble =
            Ensemble::build(&dataset, sample_size, 5, StdRng::seed_from_u64(seed)).unwrap();

        for member in ensemble.members() {
            for k in 0..member.len() {
                let score = member.isolation_score(k);
                prop_assert!((0.0..=1.0).contains(&score), "isolation score {}", score);
                if member.enclosure_radius(k) == 0.0 {
                    prop_assert_eq!(score, 0.0);
                }
            }
        }
    }

    #[test]
    fn prop_auc_bounded_or_undefined(
        scored in prop::collection::vec((0.0..1.0f64, any::<bool>()), 2..50),
    ) {
        let scores: Vec<f64> = scored.iter().map(|(s, _)| *s).collect();
        let labels: Vec<f64> = scored
            .iter()
            .map(|(_, positive)| if *positive { 1.0 } else { 0.0 })
            .collect();

        match compute_auc(&scores, &labels) {
            Ok(auc) => prop_assert!((0.0..=1.0).contains(&auc), "auc {}", auc),
            Err(Error::UndefinedAuc { positives, negatives }) => {
                prop_assert!(positives == 0 || negatives == 0);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
