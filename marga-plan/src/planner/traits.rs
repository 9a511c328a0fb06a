//! Collaborator interfaces consumed by the planning driver.
//!
//! The core never implements robot models, collision checking, sampling
//! heuristics or optimisation algorithms; it drives them through these
//! traits. Null handles are expressed as `Option`, invalid indices as
//! `None` or [`PlanError::IndexOutOfRange`].
//!
//! [`PlanError::IndexOutOfRange`]: crate::error::PlanError::IndexOutOfRange

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::core::Configuration;
use crate::error::Result;
use crate::path::Path;
use crate::roadmap::Roadmap;

/// A rigid body of a robot.
pub trait Body: Send + Sync {
    fn name(&self) -> &str;
}

/// The kinematic robot model a problem plans for.
pub trait Robot: Send + Sync {
    /// Total configuration size, extra DOFs included.
    fn config_size(&self) -> usize;

    /// Dimension of the extra configuration space (velocities,
    /// accelerations).
    fn extra_config_dim(&self) -> usize;

    fn current_config(&self) -> Configuration;

    /// Set the current configuration without side effects.
    fn set_current_config(&self, q: &Configuration) -> Result<()>;

    /// Set the current configuration and propagate it through the model
    /// (forward kinematics, attached geometry).
    fn apply_current_config(&self, q: &Configuration) -> Result<()>;

    /// The robot's bodies.
    fn bodies(&self) -> Vec<Arc<dyn Body>>;
}

/// An opaque obstacle handle, owned by the planner and snapshotted into
/// problems. The core never inspects obstacles beyond their name.
pub trait Obstacle: Send + Sync {
    fn name(&self) -> &str;
}

pub type ObstacleList = Vec<Arc<dyn Obstacle>>;

/// Collision validation of paths against the obstacle set.
pub trait CollisionValidator: Send + Sync {
    /// Check every segment of `path` and set its validity flag.
    /// `penetration` is the tolerance driving the discretisation step along
    /// each segment. Returns true iff the whole path is collision-free.
    fn validate(&self, path: &mut Path, penetration: f64) -> bool;

    /// Receive the problem's new obstacle snapshot.
    fn set_obstacles(&mut self, obstacles: &ObstacleList);
}

/// Sampling-based roadmap construction.
///
/// The one long-running collaborator: `solve_problem` is expected to poll
/// the stop flag registered through [`set_stop_flag`] between iterations
/// and return early, without a partial path, when it is raised.
///
/// [`set_stop_flag`]: RoadmapBuilder::set_stop_flag
pub trait RoadmapBuilder: Send + Sync {
    /// Grow the roadmap until `init` and `goal` are connected and return
    /// the resulting path.
    fn solve_problem(&mut self, init: &Configuration, goal: &Configuration) -> Result<Path>;

    fn roadmap(&self) -> &Roadmap;

    fn roadmap_mut(&mut self) -> &mut Roadmap;

    /// Penetration tolerance used for collision checking along paths.
    fn penetration(&self) -> f64;

    /// Register the planner's stop flag. The default ignores it; builders
    /// that loop should store and poll it.
    fn set_stop_flag(&mut self, _flag: Arc<AtomicBool>) {}
}

/// Post-processing of solved paths.
pub trait PathOptimizer: Send + Sync {
    /// Produce an improved path equivalent to `path` at its endpoints.
    fn optimize_path(&self, path: &Path, penetration: f64) -> Result<Path>;
}
