//! A single planning problem.

use std::sync::Arc;

use crate::core::Configuration;
use crate::path::Path;
use crate::steering::SteeringMethod;

use super::traits::{
    CollisionValidator, Obstacle, ObstacleList, PathOptimizer, RoadmapBuilder, Robot,
};

/// One robot with its start/goal configurations, roadmap builder, steering
/// method, optional optimiser and solved paths.
///
/// Setters replace their collaborator atomically; solved paths accumulate
/// in insertion order and are never reordered.
pub struct Problem {
    robot: Arc<dyn Robot>,
    obstacles: ObstacleList,
    init_config: Option<Configuration>,
    goal_configs: Vec<Configuration>,
    roadmap_builder: Option<Box<dyn RoadmapBuilder>>,
    steering_method: Option<Box<dyn SteeringMethod>>,
    path_optimizer: Option<Box<dyn PathOptimizer>>,
    validator: Option<Box<dyn CollisionValidator>>,
    paths: Vec<Path>,
}

impl Problem {
    /// Problem for `robot`, starting from the planner's obstacle snapshot.
    pub fn new(robot: Arc<dyn Robot>, obstacles: ObstacleList) -> Self {
        Self {
            robot,
            obstacles,
            init_config: None,
            goal_configs: Vec::new(),
            roadmap_builder: None,
            steering_method: None,
            path_optimizer: None,
            validator: None,
            paths: Vec::new(),
        }
    }

    pub fn robot(&self) -> &Arc<dyn Robot> {
        &self.robot
    }

    pub fn obstacles(&self) -> &ObstacleList {
        &self.obstacles
    }

    /// Replace the obstacle snapshot and broadcast it to the collision
    /// validator.
    pub fn set_obstacles(&mut self, obstacles: ObstacleList) {
        self.obstacles = obstacles;
        if let Some(validator) = &mut self.validator {
            validator.set_obstacles(&self.obstacles);
        }
    }

    /// Append one obstacle and re-broadcast the snapshot.
    pub fn add_obstacle(&mut self, obstacle: Arc<dyn Obstacle>) {
        self.obstacles.push(obstacle);
        if let Some(validator) = &mut self.validator {
            validator.set_obstacles(&self.obstacles);
        }
    }

    pub fn init_config(&self) -> Option<&Configuration> {
        self.init_config.as_ref()
    }

    pub fn set_init_config(&mut self, q: Configuration) {
        self.init_config = Some(q);
    }

    pub fn goal_configs(&self) -> &[Configuration] {
        &self.goal_configs
    }

    pub fn add_goal_config(&mut self, q: Configuration) {
        self.goal_configs.push(q);
    }

    pub fn clear_goal_configs(&mut self) {
        self.goal_configs.clear();
    }

    pub fn roadmap_builder(&self) -> Option<&dyn RoadmapBuilder> {
        self.roadmap_builder.as_deref()
    }

    pub fn roadmap_builder_mut(&mut self) -> Option<&mut (dyn RoadmapBuilder + '_)> {
        match &mut self.roadmap_builder {
            Some(builder) => Some(builder.as_mut()),
            None => None,
        }
    }

    pub fn set_roadmap_builder(&mut self, builder: Box<dyn RoadmapBuilder>) {
        self.roadmap_builder = Some(builder);
    }

    pub fn steering_method(&self) -> Option<&dyn SteeringMethod> {
        self.steering_method.as_deref()
    }

    pub fn set_steering_method(&mut self, steering: Box<dyn SteeringMethod>) {
        self.steering_method = Some(steering);
    }

    pub fn path_optimizer(&self) -> Option<&dyn PathOptimizer> {
        self.path_optimizer.as_deref()
    }

    pub fn set_path_optimizer(&mut self, optimizer: Box<dyn PathOptimizer>) {
        self.path_optimizer = Some(optimizer);
    }

    pub fn collision_validator(&self) -> Option<&dyn CollisionValidator> {
        self.validator.as_deref()
    }

    pub fn set_collision_validator(&mut self, mut validator: Box<dyn CollisionValidator>) {
        validator.set_obstacles(&self.obstacles);
        self.validator = Some(validator);
    }

    /// Solved paths in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn path(&self, id: usize) -> Option<&Path> {
        self.paths.get(id)
    }

    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub(crate) fn replace_path(&mut self, id: usize, path: Path) {
        self.paths[id] = path;
    }
}
