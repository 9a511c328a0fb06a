//! Configuration-space distance functions.
//!
//! Nearest-neighbour queries in the roadmap are parameterised by a
//! [`Distance`]. Implementations must be pure and symmetric; the triangle
//! inequality is not assumed anywhere in the core.

use crate::core::Configuration;

/// Scalar distance between two configurations.
pub trait Distance: Send + Sync {
    /// Distance between `q1` and `q2`. Must be nonnegative, symmetric and
    /// free of hidden state.
    fn distance(&self, q1: &Configuration, q2: &Configuration) -> f64;

    /// Lower bound on the distance from `q` to any configuration inside the
    /// axis-aligned box `[min, max]`.
    ///
    /// The k-d index uses this to prune subtrees. The default returns 0,
    /// which disables pruning (every subtree is visited) but stays correct
    /// for metrics with no usable box bound.
    fn lower_bound_to_box(&self, _q: &Configuration, _min: &[f64], _max: &[f64]) -> f64 {
        0.0
    }
}

/// Weighted Euclidean distance over all degrees of freedom.
#[derive(Clone, Debug)]
pub struct WeightedDistance {
    weights: Vec<f64>,
}

impl WeightedDistance {
    /// Distance with one weight per degree of freedom.
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Uniform weights (plain Euclidean distance) for `dim` DOFs.
    pub fn uniform(dim: usize) -> Self {
        Self::new(vec![1.0; dim])
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Distance for WeightedDistance {
    fn distance(&self, q1: &Configuration, q2: &Configuration) -> f64 {
        debug_assert_eq!(q1.dim(), q2.dim());
        let mut sum = 0.0;
        for (i, w) in self.weights.iter().enumerate() {
            let d = q1[i] - q2[i];
            sum += w * d * d;
        }
        sum.sqrt()
    }

    fn lower_bound_to_box(&self, q: &Configuration, min: &[f64], max: &[f64]) -> f64 {
        let mut sum = 0.0;
        for (i, w) in self.weights.iter().enumerate() {
            let v = q[i];
            let d = if v < min[i] {
                min[i] - v
            } else if v > max[i] {
                v - max[i]
            } else {
                0.0
            };
            sum += w * d * d;
        }
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_is_euclidean() {
        let d = WeightedDistance::uniform(2);
        let q1 = Configuration::new(vec![0.0, 0.0]);
        let q2 = Configuration::new(vec![3.0, 4.0]);
        assert_relative_eq!(d.distance(&q1, &q2), 5.0);
    }

    #[test]
    fn test_symmetry() {
        let d = WeightedDistance::new(vec![2.0, 0.5, 1.0]);
        let q1 = Configuration::new(vec![0.1, -2.0, 3.0]);
        let q2 = Configuration::new(vec![1.4, 0.7, -0.2]);
        assert_relative_eq!(d.distance(&q1, &q2), d.distance(&q2, &q1));
    }

    #[test]
    fn test_box_bound_inside_is_zero() {
        let d = WeightedDistance::uniform(2);
        let q = Configuration::new(vec![0.5, 0.5]);
        assert_eq!(d.lower_bound_to_box(&q, &[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_box_bound_never_exceeds_point_distance() {
        let d = WeightedDistance::uniform(2);
        let q = Configuration::new(vec![-1.0, 2.0]);
        let inside = Configuration::new(vec![0.0, 1.0]);
        let bound = d.lower_bound_to_box(&q, &[0.0, 0.0], &[1.0, 1.0]);
        assert!(bound <= d.distance(&q, &inside));
    }
}
