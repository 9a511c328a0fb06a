//! Steering methods.
//!
//! A steering method creates a path between a pair of configurations,
//! ignoring obstacles. It is the local planner the driver uses for direct
//! connections and roadmap builders use for expansion. Implementations must
//! produce a (possibly degenerate) path when both configurations are equal.

mod kinodynamic;
mod linear;

pub use kinodynamic::{AxisProfile, KinodynamicPath, KinodynamicSteering};
pub use linear::LinearSteering;

use crate::core::Configuration;
use crate::error::Result;
use crate::path::Path;

/// Creates paths between pairs of configurations.
pub trait SteeringMethod: Send + Sync {
    /// Compute a path from `q1` to `q2`.
    ///
    /// Errors signal that no path could be built (for the kinodynamic
    /// method, a numerical failure); the driver treats that as "no direct
    /// path" and falls back to the roadmap builder.
    fn steer(&self, q1: &Configuration, q2: &Configuration) -> Result<Path>;
}
