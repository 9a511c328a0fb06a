//! The planning driver.
//!
//! A [`Planner`] owns an ordered collection of [`Problem`]s, the shared
//! obstacle list, the observer event bus and the cooperative stop flag.
//! Solving a problem first attempts a direct connection with the steering
//! method and falls back to the roadmap builder.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use log::debug;

use crate::core::Configuration;
use crate::error::{PlanError, Result};
use crate::path::Path;
use crate::steering::SteeringMethod;

use super::events::{
    EventBus, EventKind, Notification, PayloadValue, CONFIG_KEY, OBSTACLE_KEY, ROADMAP_KEY,
    ROBOT_KEY,
};
use super::problem::Problem;
use super::traits::{
    Body, CollisionValidator, Obstacle, ObstacleList, PathOptimizer, RoadmapBuilder, Robot,
};

/// Outcome of the direct-connection attempt.
enum DirectAttempt {
    /// A valid direct path was stored; the problem is solved.
    Solved,
    /// The steering method produced no usable path; fall back to the
    /// roadmap builder.
    Fallback,
}

/// Ordered collection of planning problems with solve-one / solve-all.
#[derive(Default)]
pub struct Planner {
    problems: VecDeque<Problem>,
    obstacles: ObstacleList,
    events: EventBus,
    stop: Arc<AtomicBool>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to this planner's observer notifications.
    pub fn subscribe(&mut self) -> Receiver<Notification> {
        self.events.subscribe()
    }

    /// The cooperative stop flag polled by roadmap builders.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    // ────────────────────────────────────────────────────────────────────
    // Problem management
    // ────────────────────────────────────────────────────────────────────

    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    pub fn problem(&self, rank: usize) -> Option<&Problem> {
        self.problems.get(rank)
    }

    pub fn problem_mut(&mut self, rank: usize) -> Option<&mut Problem> {
        self.problems.get_mut(rank)
    }

    /// Append a problem for `robot`, seeded with the current obstacle list.
    pub fn add_problem(&mut self, robot: Arc<dyn Robot>) -> usize {
        debug!("[Planner] adding problem {}", self.problems.len());
        self.problems
            .push_back(Problem::new(robot.clone(), self.obstacles.clone()));
        self.events.notify(
            Notification::new(EventKind::AddRobot).with(ROBOT_KEY, PayloadValue::Robot(robot)),
        );
        self.problems.len() - 1
    }

    /// Insert a problem for `robot` at the front of the collection.
    pub fn add_problem_at_beginning(&mut self, robot: Arc<dyn Robot>) {
        self.problems
            .push_front(Problem::new(robot.clone(), self.obstacles.clone()));
        self.events.notify(
            Notification::new(EventKind::AddRobot).with(ROBOT_KEY, PayloadValue::Robot(robot)),
        );
    }

    /// Remove the last problem, if any.
    pub fn remove_problem(&mut self) -> Option<Problem> {
        self.problems.pop_back()
    }

    /// Remove the first problem, if any.
    pub fn remove_problem_at_beginning(&mut self) -> Option<Problem> {
        self.problems.pop_front()
    }

    // ────────────────────────────────────────────────────────────────────
    // Per-rank accessors and setters
    // ────────────────────────────────────────────────────────────────────

    pub fn robot(&self, rank: usize) -> Option<Arc<dyn Robot>> {
        self.problems.get(rank).map(|p| p.robot().clone())
    }

    pub fn current_config(&self, rank: usize) -> Option<Configuration> {
        self.problems.get(rank).map(|p| p.robot().current_config())
    }

    /// Apply `q` as the robot's current configuration and notify observers.
    pub fn set_current_config(&mut self, rank: usize, q: &Configuration) -> Result<()> {
        let problem = self.get_problem_mut(rank)?;
        problem.robot().apply_current_config(q)?;
        self.events.notify(
            Notification::new(EventKind::SetCurrentConfig)
                .with(CONFIG_KEY, PayloadValue::Config(q.clone())),
        );
        Ok(())
    }

    pub fn init_config(&self, rank: usize) -> Option<&Configuration> {
        self.problems.get(rank).and_then(|p| p.init_config())
    }

    pub fn set_init_config(&mut self, rank: usize, q: Configuration) -> Result<()> {
        self.get_problem_mut(rank)?.set_init_config(q);
        Ok(())
    }

    pub fn goal_configs(&self, rank: usize) -> Option<&[Configuration]> {
        self.problems.get(rank).map(|p| p.goal_configs())
    }

    pub fn add_goal_config(&mut self, rank: usize, q: Configuration) -> Result<()> {
        self.get_problem_mut(rank)?.add_goal_config(q);
        Ok(())
    }

    /// Replace the roadmap builder, registering the planner's stop flag and
    /// notifying observers with a remove + add pair.
    pub fn set_roadmap_builder(
        &mut self,
        rank: usize,
        mut builder: Box<dyn RoadmapBuilder>,
    ) -> Result<()> {
        self.events.notify(
            Notification::new(EventKind::RemoveRoadmapBuilder)
                .with(ROADMAP_KEY, PayloadValue::ProblemRank(rank)),
        );
        builder.set_stop_flag(self.stop.clone());
        self.get_problem_mut(rank)?.set_roadmap_builder(builder);
        self.events.notify(
            Notification::new(EventKind::AddRoadmapBuilder)
                .with(ROADMAP_KEY, PayloadValue::ProblemRank(rank)),
        );
        Ok(())
    }

    pub fn set_steering_method(
        &mut self,
        rank: usize,
        steering: Box<dyn SteeringMethod>,
    ) -> Result<()> {
        self.get_problem_mut(rank)?.set_steering_method(steering);
        Ok(())
    }

    pub fn set_path_optimizer(
        &mut self,
        rank: usize,
        optimizer: Box<dyn PathOptimizer>,
    ) -> Result<()> {
        self.get_problem_mut(rank)?.set_path_optimizer(optimizer);
        Ok(())
    }

    pub fn set_collision_validator(
        &mut self,
        rank: usize,
        validator: Box<dyn CollisionValidator>,
    ) -> Result<()> {
        self.get_problem_mut(rank)?.set_collision_validator(validator);
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Obstacles
    // ────────────────────────────────────────────────────────────────────

    pub fn obstacles(&self) -> &ObstacleList {
        &self.obstacles
    }

    /// Replace the obstacle list and hand a snapshot to every problem.
    pub fn set_obstacle_list(&mut self, obstacles: ObstacleList) {
        self.events
            .notify(Notification::new(EventKind::RemoveObstacles));
        self.obstacles = obstacles;
        for problem in &mut self.problems {
            problem.set_obstacles(self.obstacles.clone());
        }
        self.events.notify(
            Notification::new(EventKind::SetObstacleList)
                .with(OBSTACLE_KEY, PayloadValue::Obstacles(self.obstacles.clone())),
        );
    }

    /// Append one obstacle and broadcast the extended list.
    pub fn add_obstacle(&mut self, obstacle: Arc<dyn Obstacle>) {
        self.obstacles.push(obstacle.clone());
        for problem in &mut self.problems {
            problem.add_obstacle(obstacle.clone());
        }
        self.events.notify(
            Notification::new(EventKind::AddObstacle)
                .with(OBSTACLE_KEY, PayloadValue::Obstacles(self.obstacles.clone())),
        );
    }

    /// Search every problem's robot for a body with the given name.
    pub fn find_body_by_name(&self, name: &str) -> Option<Arc<dyn Body>> {
        for problem in &self.problems {
            for body in problem.robot().bodies() {
                if body.name() == name {
                    return Some(body);
                }
            }
        }
        None
    }

    // ────────────────────────────────────────────────────────────────────
    // Solving
    // ────────────────────────────────────────────────────────────────────

    /// Solve problem `rank`: direct connection first, roadmap builder
    /// otherwise. Solved paths are appended to the problem; on failure the
    /// roadmap keeps whatever progress it made.
    pub fn solve_one_problem(&mut self, rank: usize) -> Result<()> {
        let size = self.problems.len();
        let problem = self
            .problems
            .get_mut(rank)
            .ok_or(PlanError::IndexOutOfRange { index: rank, size })?;

        let init = problem
            .init_config()
            .cloned()
            .ok_or(PlanError::Configuration("init config"))?;
        let goal = problem
            .goal_configs()
            .first()
            .cloned()
            .ok_or(PlanError::Configuration("goal config"))?;
        if problem.steering_method().is_none() {
            return Err(PlanError::Configuration("steering method"));
        }
        if problem.roadmap_builder().is_none() {
            return Err(PlanError::Configuration("roadmap builder"));
        }

        match Self::try_direct_path(problem, &init, &goal) {
            Ok(DirectAttempt::Solved) => {
                debug!("[Planner] problem {} solved with direct connection", rank);
                return Ok(());
            }
            Ok(DirectAttempt::Fallback) => {}
            Err(PlanError::ValidationFailure) => {
                debug!("[Planner] direct path failed collision validation, falling back");
            }
            Err(e) => return Err(e),
        }

        let builder = problem
            .roadmap_builder_mut()
            .expect("builder validated above");
        let path = builder
            .solve_problem(&init, &goal)
            .map_err(|e| PlanError::PlanningFailure(e.to_string()))?;
        if path.is_empty() {
            return Err(PlanError::PlanningFailure(
                "roadmap builder produced an empty path".into(),
            ));
        }
        let penetration = builder.penetration();
        debug!("[Planner] problem {} solved by roadmap builder", rank);

        problem.add_path(path.clone());
        if let Some(optimizer) = problem.path_optimizer() {
            match optimizer.optimize_path(&path, penetration) {
                Ok(optimized) => problem.add_path(optimized),
                Err(e) => debug!("[Planner] path optimization failed: {}", e),
            }
        }
        Ok(())
    }

    /// Attempt a direct connection from `init` to `goal`.
    ///
    /// On success the path is validated, mirrored into the roadmap (nodes
    /// deduplicated by configuration; the edge only added when the goal is
    /// not already reachable) and appended to the problem's paths. A path
    /// that fails collision validation surfaces as
    /// [`PlanError::ValidationFailure`], which the caller recovers from by
    /// falling back to the roadmap builder.
    fn try_direct_path(
        problem: &mut Problem,
        init: &Configuration,
        goal: &Configuration,
    ) -> Result<DirectAttempt> {
        let steering = problem.steering_method().expect("validated by caller");
        let mut path = match steering.steer(init, goal) {
            Ok(path) => path,
            Err(PlanError::NumericalFailure(msg)) => {
                debug!("[Planner] direct steering failed numerically: {}", msg);
                return Ok(DirectAttempt::Fallback);
            }
            Err(e) => return Err(e),
        };
        if path.is_empty() {
            return Ok(DirectAttempt::Fallback);
        }

        let penetration = problem
            .roadmap_builder()
            .expect("validated by caller")
            .penetration();
        let valid = match problem.collision_validator() {
            Some(validator) => validator.validate(&mut path, penetration),
            None => {
                // No validator configured: nothing to collide with.
                for segment in path.segments_mut() {
                    segment.set_valid(true);
                }
                true
            }
        };
        if !valid {
            return Err(PlanError::ValidationFailure);
        }

        let roadmap = problem
            .roadmap_builder_mut()
            .expect("validated by caller")
            .roadmap_mut();
        let start = roadmap.add_node(init.clone());
        let end = roadmap.add_node(goal.clone());
        let cc_start = roadmap.nodes()[start].component();
        let cc_end = roadmap.nodes()[end].component();
        if !roadmap.can_reach(cc_start, cc_end) {
            roadmap.add_edge(start, end, path.clone());
        }

        problem.add_path(path);
        Ok(DirectAttempt::Solved)
    }

    /// Solve every problem in order. All problems are attempted even after
    /// a failure; the first error is reported.
    pub fn solve(&mut self) -> Result<()> {
        let mut first_error = None;
        for rank in 0..self.problems.len() {
            if let Err(e) = self.solve_one_problem(rank) {
                debug!("[Planner] problem {} failed: {}", rank, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Re-run the optimiser on a stored path, replacing it in place.
    /// Without an optimiser configured this is a no-op.
    pub fn optimize_path(&mut self, problem_id: usize, path_id: usize) -> Result<()> {
        let size = self.problems.len();
        let problem = self
            .problems
            .get_mut(problem_id)
            .ok_or(PlanError::IndexOutOfRange {
                index: problem_id,
                size,
            })?;
        let path_count = problem.paths().len();
        let path = problem
            .path(path_id)
            .cloned()
            .ok_or(PlanError::IndexOutOfRange {
                index: path_id,
                size: path_count,
            })?;

        let Some(optimizer) = problem.path_optimizer() else {
            debug!("[Planner] no optimizer defined");
            return Ok(());
        };
        let penetration = problem
            .roadmap_builder()
            .ok_or(PlanError::Configuration("roadmap builder"))?
            .penetration();
        let optimized = optimizer.optimize_path(&path, penetration)?;
        problem.replace_path(path_id, optimized);
        Ok(())
    }

    pub fn path_count(&self, problem_id: usize) -> usize {
        self.problems
            .get(problem_id)
            .map_or(0, |p| p.paths().len())
    }

    pub fn path(&self, problem_id: usize, path_id: usize) -> Option<&Path> {
        self.problems.get(problem_id).and_then(|p| p.path(path_id))
    }

    // ────────────────────────────────────────────────────────────────────
    // Interruption
    // ────────────────────────────────────────────────────────────────────

    /// Raise the stop flag. Roadmap builders poll it between iterations
    /// and terminate cooperatively, producing no partial path. Idempotent;
    /// already-returned paths are unaffected.
    pub fn interrupt_path_planning(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Lower the stop flag. Must be called before the next solve after an
    /// interruption.
    pub fn reset_interruption(&self) {
        self.stop.store(false, Ordering::SeqCst);
    }

    fn get_problem_mut(&mut self, rank: usize) -> Result<&mut Problem> {
        let size = self.problems.len();
        self.problems
            .get_mut(rank)
            .ok_or(PlanError::IndexOutOfRange { index: rank, size })
    }
}
