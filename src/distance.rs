//! Euclidean distance between feature vectors

/// Euclidean distance between two feature vectors of equal dimensionality.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "feature vectors must have equal length");

    let squared: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    if squared > 0.0 {
        squared.sqrt()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let v = vec![1.5, -2.0, 3.25];
        assert_eq!(euclidean(&v, &v), 0.0);
    }

    #[test]
    fn test_pythagorean_triple() {
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert_eq!(euclidean(&a, &b), 5.0);
    }

    #[test]
    fn test_single_feature() {
        assert_eq!(euclidean(&[4.0], &[100.0]), 96.0);
        assert_eq!(euclidean(&[100.0], &[4.0]), 96.0);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-4.0, 0.5, 9.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }
}
