//! Error types for marga-plan

use thiserror::Error;

/// Planner error type
#[derive(Error, Debug)]
pub enum PlanError {
    /// A problem or path index exceeds the container size.
    #[error("index {index} out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// A field required at solve time (robot, init config, goal config,
    /// steering method, roadmap builder) is missing.
    #[error("problem ill-defined: {0} not set")]
    Configuration(&'static str),

    /// A steering-method quadratic produced a negative discriminant.
    #[error("numerical failure in steering method: {0}")]
    NumericalFailure(String),

    /// The roadmap builder returned failure or produced no path.
    #[error("planning failed: {0}")]
    PlanningFailure(String),

    /// A computed direct path failed collision validation. Recovered
    /// locally by the driver (fallback to the roadmap builder).
    #[error("direct path failed collision validation")]
    ValidationFailure,

    /// A roadmap or connected-component invariant is broken.
    #[error("roadmap invariant violated: {0}")]
    InvariantViolation(String),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PlanError {
    fn from(e: toml::de::Error) -> Self {
        PlanError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
