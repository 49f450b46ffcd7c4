//! Nearest-neighbour ensemble construction
//!
//! Each ensemble member samples ψ rows without replacement and records, for
//! every sampled point, its 1-NN distance within the sample (the enclosure
//! radius of that point's hypersphere) and an isolation score derived from
//! the radius of its nearest neighbour.
//!
//! # References
//!
//! Bandaragoda, T. R., Ting, K. M., Albrecht, D., Liu, F. T., & Wells, J. R.
//! (2014). Efficient anomaly detection by isolation using nearest neighbour
//! ensemble. In 2014 IEEE International Conference on Data Mining Workshop.

use rand::Rng;

use crate::dataset::Dataset;
use crate::distance::euclidean;
use crate::error::{Error, Result};
use crate::permutation::WindowSampler;

/// One randomized nearest-neighbour partition, immutable once built.
#[derive(Debug, Clone)]
pub struct NnSet {
    sample_indices: Vec<usize>,
    enclosure_radius: Vec<f64>,
    isolation_score: Vec<f64>,
}

impl NnSet {
    /// Build one member from ψ distinct row indices.
    fn build(dataset: &Dataset, indices: &[usize]) -> Self {
        let psi = indices.len();

        // Symmetric pairwise distance matrix over the sample, diagonal 0.
        let mut pairwise = vec![vec![0.0f64; psi]; psi];
        for n in 0..psi {
            for m in (n + 1)..psi {
                let d = euclidean(dataset.row(indices[n]), dataset.row(indices[m]));
                pairwise[n][m] = d;
                pairwise[m][n] = d;
            }
        }

        // 1-NN radius per sampled point; first minimum in iteration order wins.
        let mut enclosure_radius = vec![0.0f64; psi];
        let mut min_idx = vec![0usize; psi];
        for n in 0..psi {
            let mut min_radius = f64::MAX;
            for idx in 0..psi {
                if idx != n && pairwise[n][idx] < min_radius {
                    min_radius = pairwise[n][idx];
                    min_idx[n] = idx;
                }
            }
            enclosure_radius[n] = min_radius;
        }

        // A point whose nearest neighbour has a much smaller radius is a
        // more isolating hypersphere centre, driving the score toward 1.
        let isolation_score = (0..psi)
            .map(|n| {
                if enclosure_radius[n] == 0.0 {
                    0.0
                } else {
                    1.0 - enclosure_radius[min_idx[n]] / enclosure_radius[n]
                }
            })
            .collect();

        Self {
            sample_indices: indices.to_vec(),
            enclosure_radius,
            isolation_score,
        }
    }

    /// Number of sampled points (ψ).
    pub fn len(&self) -> usize {
        self.sample_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_indices.is_empty()
    }

    /// Row indices of the sampled points.
    pub fn sample_indices(&self) -> &[usize] {
        &self.sample_indices
    }

    /// Enclosure radius of the hypersphere centred at sampled point `k`.
    pub fn enclosure_radius(&self, k: usize) -> f64 {
        self.enclosure_radius[k]
    }

    /// Isolation score contributed by sampled point `k`.
    pub fn isolation_score(&self, k: usize) -> f64 {
        self.isolation_score[k]
    }
}

/// Ordered collection of independently built members, read-only after build.
#[derive(Debug, Clone)]
pub struct Ensemble {
    members: Vec<NnSet>,
    sample_size: usize,
}

impl Ensemble {
    /// Build `ensemble_size` members over random ψ-subsamples of the dataset.
    ///
    /// `sample_size` is clamped to the row count. Fewer than 2 points per
    /// member leaves the nearest neighbour undefined and is rejected.
    pub fn build<R: Rng>(
        dataset: &Dataset,
        sample_size: usize,
        ensemble_size: usize,
        rng: R,
    ) -> Result<Self> {
        let psi = sample_size.min(dataset.num_rows());
        if psi < 2 {
            return Err(Error::DegenerateInput(format!(
                "subsample size must be at least 2, got {}",
                psi
            )));
        }
        if ensemble_size == 0 {
            return Err(Error::DegenerateInput(
                "ensemble size must be at least 1".to_string(),
            ));
        }

        let mut sampler = WindowSampler::new(dataset.num_rows(), rng);
        let mut members = Vec::with_capacity(ensemble_size);
        for _ in 0..ensemble_size {
            members.push(NnSet::build(dataset, sampler.next_window(psi)));
        }

        Ok(Self {
            members,
            sample_size: psi,
        })
    }

    /// Number of members (T).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Effective subsample size after clamping (ψ).
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn members(&self) -> &[NnSet] {
        &self.members
    }
}
