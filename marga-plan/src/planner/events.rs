//! Planner observer events.
//!
//! Each planner owns an event bus; observers subscribe and receive
//! notifications synchronously, in the order the triggering operations
//! complete. A notification carries a kind and a small payload map keyed by
//! the string constants below.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::Configuration;

use super::traits::{ObstacleList, Robot};

/// Payload key for the robot handle.
pub const ROBOT_KEY: &str = "robot";
/// Payload key for the obstacle list.
pub const OBSTACLE_KEY: &str = "obstacle";
/// Payload key for a configuration.
pub const CONFIG_KEY: &str = "config";
/// Payload key for a roadmap-builder problem rank.
pub const ROADMAP_KEY: &str = "roadmap";

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    AddRobot,
    SetCurrentConfig,
    RemoveObstacles,
    SetObstacleList,
    AddObstacle,
    RemoveRoadmapBuilder,
    AddRoadmapBuilder,
}

/// A payload entry.
#[derive(Clone)]
pub enum PayloadValue {
    Robot(Arc<dyn Robot>),
    Config(Configuration),
    Obstacles(ObstacleList),
    ProblemRank(usize),
}

impl fmt::Debug for PayloadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadValue::Robot(_) => write!(f, "Robot"),
            PayloadValue::Config(q) => write!(f, "Config({})", q),
            PayloadValue::Obstacles(list) => write!(f, "Obstacles(len {})", list.len()),
            PayloadValue::ProblemRank(rank) => write!(f, "ProblemRank({})", rank),
        }
    }
}

/// One observer notification.
#[derive(Clone, Debug)]
pub struct Notification {
    pub kind: EventKind,
    payload: HashMap<&'static str, PayloadValue>,
}

impl Notification {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: HashMap::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: PayloadValue) -> Self {
        self.payload.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.payload.get(key)
    }
}

/// Per-planner event sink.
///
/// Dropped receivers are pruned on the next delivery.
#[derive(Default)]
pub struct EventBus {
    senders: Vec<Sender<Notification>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to this planner's notifications.
    pub fn subscribe(&mut self) -> Receiver<Notification> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.senders
            .retain(|sender| sender.send(notification.clone()).is_ok());
    }
}
