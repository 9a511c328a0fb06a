//! Robot configuration vectors.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// A point in a robot's configuration space.
///
/// A fixed-length vector of joint positions, optionally followed by extra
/// degrees of freedom (velocities, accelerations). Immutable once built;
/// clones share the underlying storage, so handing configurations to nodes,
/// paths and events is cheap.
///
/// For kinodynamic problems the convention is: the first `dof` entries are
/// positions, the trailing `dof` entries are the matching velocities.
#[derive(Clone, PartialEq)]
pub struct Configuration {
    values: Arc<[f64]>,
}

impl Configuration {
    /// Create a configuration from raw values.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Zero configuration of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self::new(vec![0.0; dim])
    }

    /// Number of degrees of freedom (including extra DOFs).
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// The raw values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the values.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Index<usize> for Configuration {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl From<Vec<f64>> for Configuration {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Configuration {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Compact comma-separated form used in roadmap logging.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration[{}]", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Configuration::new(vec![1.0, 2.0]);
        let b = Configuration::new(vec![1.0, 2.0]);
        let c = Configuration::new(vec![1.0, 2.5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = Configuration::new(vec![1.0, 2.0, 3.0]);
        let b = a.clone();
        assert_eq!(a.values().as_ptr(), b.values().as_ptr());
    }

    #[test]
    fn test_display() {
        let q = Configuration::new(vec![0.5, -1.0]);
        assert_eq!(format!("{}", q), "0.5,-1");
    }

    #[test]
    fn test_zeros() {
        let q = Configuration::zeros(4);
        assert_eq!(q.dim(), 4);
        assert!(q.iter().all(|v| v == 0.0));
    }
}
