//! # Marga-Plan: Roadmap-Based Motion Planning Core
//!
//! A sampling-based motion-planning library core for articulated robots:
//! the roadmap graph engine, a kinodynamic two-point boundary-value solver,
//! and the planning driver that orchestrates them. Robot models, collision
//! checkers, sampling heuristics and path optimisers are external
//! collaborators driven through narrow traits.
//!
//! ## Features
//!
//! - **Roadmap graph**: directed multigraph of configurations with
//!   incremental connected-component bookkeeping and cycle merging
//! - **Spatial index**: bucket k-d tree answering nearest-neighbour queries
//!   under a user-supplied distance, filtered by component
//! - **Kinodynamic steering**: minimum-time and fixed-time bang-bang
//!   trajectories under per-axis acceleration and velocity bounds, with
//!   multi-axis synchronisation
//! - **Planning driver**: per-problem direct-connection attempt with
//!   roadmap-builder fallback, observer events, cooperative interruption
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use marga_plan::{Configuration, Roadmap, WeightedDistance};
//!
//! let distance = Arc::new(WeightedDistance::uniform(2));
//! let mut roadmap = Roadmap::new(distance, 2);
//!
//! roadmap.set_init_node(Configuration::from(&[0.0, 0.0][..]));
//! roadmap.add_goal_node(Configuration::from(&[1.0, 0.0][..]));
//! println!("path exists: {}", roadmap.path_exists());
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types ([`Configuration`])
//! - [`config`]: configuration structs and TOML loading
//! - [`distance`]: configuration-space metrics
//! - [`path`]: motion segments and composite paths
//! - [`roadmap`]: the graph engine and its spatial index
//! - [`steering`]: steering methods (linear, kinodynamic)
//! - [`planner`]: problems, collaborator traits, events, the driver
//!
//! ## Control Flow
//!
//! ```text
//!              ┌──────────────┐
//!              │   Planner    │ solve_one_problem / solve
//!              └──────┬───────┘
//!                     │
//!              ┌──────▼───────┐
//!              │   Problem    │ robot, configs, obstacles, paths
//!              └──────┬───────┘
//!        ┌────────────┼─────────────────┐
//!        ▼            ▼                 ▼
//! ┌─────────────┐ ┌────────────────┐ ┌───────────────┐
//! │  Steering   │ │ RoadmapBuilder │ │ PathOptimizer │
//! │  (direct)   │ │   (fallback)   │ │  (optional)   │
//! └──────┬──────┘ └───────┬────────┘ └───────────────┘
//!        │                │
//!        │         ┌──────▼───────┐
//!        └────────►│   Roadmap    │ nodes, edges, components
//!                  └──────┬───────┘
//!                         │
//!                  ┌──────▼───────┐
//!                  │   KdIndex    │ nearest neighbour per component
//!                  └──────────────┘
//! ```
//!
//! All operations run on the caller's thread; the only long-running call is
//! `RoadmapBuilder::solve_problem`, which polls the planner's stop flag.

pub mod config;
pub mod core;
pub mod distance;
pub mod error;
pub mod path;
pub mod planner;
pub mod roadmap;
pub mod steering;

// Re-export main types at crate root
pub use crate::core::Configuration;
pub use config::{KinodynamicConfig, PlanConfig, RoadmapConfig};
pub use distance::{Distance, WeightedDistance};
pub use error::{PlanError, Result};
pub use path::{DirectPath, LinearPath, Path};
pub use planner::{
    Body, CollisionValidator, EventKind, Notification, Obstacle, ObstacleList, PathOptimizer,
    PayloadValue, Planner, Problem, RoadmapBuilder, Robot,
};
pub use roadmap::{ConnectedComponent, Edge, KdIndex, Node, Roadmap};
pub use steering::{
    AxisProfile, KinodynamicPath, KinodynamicSteering, LinearSteering, SteeringMethod,
};
