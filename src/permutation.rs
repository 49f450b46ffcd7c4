//! Random permutations and the windowed subsample draw
//!
//! Ensemble members are sampled without replacement by walking fixed-size
//! windows across a random permutation of the row indices. When fewer than
//! a full window of unused indices remain, a fresh permutation is generated
//! and the cursor resets. Within one permutation cycle each row index is
//! therefore drawn at most once across consecutive members.

use rand::Rng;

/// Uniformly random permutation of `[0, length)` via Fisher-Yates.
pub fn random_permutation<R: Rng>(length: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..length).collect();

    for i in 0..length {
        let j = rng.gen_range(i..length);
        indices.swap(i, j);
    }

    indices
}

/// Draws successive windows of distinct row indices from a cycling permutation.
#[derive(Debug)]
pub struct WindowSampler<R: Rng> {
    permutation: Vec<usize>,
    cursor: usize,
    rng: R,
}

impl<R: Rng> WindowSampler<R> {
    /// Create a sampler over the index range `[0, length)`.
    pub fn new(length: usize, mut rng: R) -> Self {
        let permutation = random_permutation(length, &mut rng);
        Self {
            permutation,
            cursor: 0,
            rng,
        }
    }

    /// Next window of `size` distinct indices.
    ///
    /// `size` must not exceed the index range length; callers clamp the
    /// subsample size to the row count before building.
    pub fn next_window(&mut self, size: usize) -> &[usize] {
        assert!(size <= self.permutation.len());

        if self.cursor + size > self.permutation.len() {
            self.permutation = random_permutation(self.permutation.len(), &mut self.rng);
            self.cursor = 0;
        }

        let window = &self.permutation[self.cursor..self.cursor + size];
        self.cursor += size;
        window
    }
}
