//! Configuration loading for marga-plan

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level planner configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub roadmap: RoadmapConfig,
    #[serde(default)]
    pub kinodynamic: KinodynamicConfig,
}

impl PlanConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Roadmap and spatial-index settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// Maximum number of entries per k-d tree leaf before it splits.
    #[serde(default = "default_bucket_size")]
    pub bucket_size: usize,
}

fn default_bucket_size() -> usize {
    30
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            bucket_size: default_bucket_size(),
        }
    }
}

/// Kinodynamic steering limits, applied per axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KinodynamicConfig {
    /// Maximum acceleration magnitude (must be > 0).
    #[serde(default = "default_a_max")]
    pub a_max: f64,

    /// Maximum velocity magnitude (must be > 0).
    #[serde(default = "default_v_max")]
    pub v_max: f64,
}

fn default_a_max() -> f64 {
    0.5
}

fn default_v_max() -> f64 {
    1.0
}

impl Default for KinodynamicConfig {
    fn default() -> Self {
        Self {
            a_max: default_a_max(),
            v_max: default_v_max(),
        }
    }
}
