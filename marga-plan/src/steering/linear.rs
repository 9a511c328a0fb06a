//! Straight-line steering.

use crate::core::Configuration;
use crate::error::Result;
use crate::path::{LinearPath, Path};

use super::SteeringMethod;

/// Steering method producing a single straight segment in configuration
/// space. Suitable for purely geometric problems with no differential
/// constraints.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearSteering;

impl LinearSteering {
    pub fn new() -> Self {
        Self
    }
}

impl SteeringMethod for LinearSteering {
    fn steer(&self, q1: &Configuration, q2: &Configuration) -> Result<Path> {
        Ok(Path::from_direct_path(Box::new(LinearPath::new(
            q1.clone(),
            q2.clone(),
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steer_endpoints() {
        let sm = LinearSteering::new();
        let q1 = Configuration::from(&[0.0, 0.0][..]);
        let q2 = Configuration::from(&[1.0, 2.0][..]);
        let path = sm.steer(&q1, &q2).unwrap();
        assert_eq!(path.initial().unwrap(), &q1);
        assert_eq!(path.end().unwrap(), &q2);
        assert_eq!(path.count_direct_paths(), 1);
    }

    #[test]
    fn test_equal_configurations_still_produce_a_path() {
        let sm = LinearSteering::new();
        let q = Configuration::from(&[1.0][..]);
        let path = sm.steer(&q, &q).unwrap();
        assert!(!path.is_empty());
        assert_eq!(path.duration(), 0.0);
    }
}
