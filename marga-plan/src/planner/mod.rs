//! Planning problems and the driver that solves them.

mod driver;
mod events;
mod problem;
mod traits;

pub use driver::Planner;
pub use events::{
    EventBus, EventKind, Notification, PayloadValue, CONFIG_KEY, OBSTACLE_KEY, ROADMAP_KEY,
    ROBOT_KEY,
};
pub use problem::Problem;
pub use traits::{
    Body, CollisionValidator, Obstacle, ObstacleList, PathOptimizer, RoadmapBuilder, Robot,
};
