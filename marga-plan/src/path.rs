//! Paths and motion segments.
//!
//! A [`DirectPath`] is a single motion segment produced by a steering
//! method: a parameterised curve between two configurations with a validity
//! flag owned by collision validation. A [`Path`] is an ordered sequence of
//! direct paths, the unit stored on roadmap edges and in a problem's solved
//! path list.

use crate::core::Configuration;

/// A single motion segment between two configurations.
///
/// Implementations are immutable in shape; only the validity flag is
/// mutable, and only collision validators are expected to set it.
pub trait DirectPath: Send + Sync {
    /// Start configuration.
    fn initial(&self) -> &Configuration;

    /// End configuration.
    fn end(&self) -> &Configuration;

    /// Parameter length of the segment (seconds for timed paths, metric
    /// length for geometric ones). Zero for a degenerate segment.
    fn duration(&self) -> f64;

    /// Sample the configuration at parameter `t`, clamped to
    /// `[0, duration]`.
    fn at(&self, t: f64) -> Configuration;

    /// The time-reversed segment.
    fn reversed(&self) -> Box<dyn DirectPath>;

    fn box_clone(&self) -> Box<dyn DirectPath>;

    /// Whether the segment passed collision validation.
    fn is_valid(&self) -> bool;

    /// Set by a collision validator after checking the segment.
    fn set_valid(&mut self, valid: bool);
}

impl Clone for Box<dyn DirectPath> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// A straight segment in configuration space.
///
/// The parameter is arc length under the Euclidean metric, so sampling at
/// equally spaced parameters yields equally spaced configurations.
#[derive(Clone)]
pub struct LinearPath {
    start: Configuration,
    goal: Configuration,
    length: f64,
    valid: bool,
}

impl LinearPath {
    pub fn new(start: Configuration, goal: Configuration) -> Self {
        debug_assert_eq!(start.dim(), goal.dim());
        let length = start
            .iter()
            .zip(goal.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt();
        Self {
            start,
            goal,
            length,
            valid: false,
        }
    }
}

impl DirectPath for LinearPath {
    fn initial(&self) -> &Configuration {
        &self.start
    }

    fn end(&self) -> &Configuration {
        &self.goal
    }

    fn duration(&self) -> f64 {
        self.length
    }

    fn at(&self, t: f64) -> Configuration {
        if self.length == 0.0 {
            return self.start.clone();
        }
        let s = (t / self.length).clamp(0.0, 1.0);
        let values = self
            .start
            .iter()
            .zip(self.goal.iter())
            .map(|(a, b)| a + s * (b - a))
            .collect();
        Configuration::new(values)
    }

    fn reversed(&self) -> Box<dyn DirectPath> {
        Box::new(Self {
            start: self.goal.clone(),
            goal: self.start.clone(),
            length: self.length,
            valid: self.valid,
        })
    }

    fn box_clone(&self) -> Box<dyn DirectPath> {
        Box::new(self.clone())
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}

/// An ordered sequence of direct paths.
///
/// Stored on roadmap edges and appended to a problem's solved paths.
/// Once attached to an edge a path is treated as immutable.
#[derive(Clone, Default)]
pub struct Path {
    segments: Vec<Box<dyn DirectPath>>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path made of a single segment.
    pub fn from_direct_path(segment: Box<dyn DirectPath>) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of direct paths composing this path.
    pub fn count_direct_paths(&self) -> usize {
        self.segments.len()
    }

    /// Append a segment at the end.
    pub fn append_direct_path(&mut self, segment: Box<dyn DirectPath>) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Box<dyn DirectPath>] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Box<dyn DirectPath>] {
        &mut self.segments
    }

    /// Start configuration, if the path is non-empty.
    pub fn initial(&self) -> Option<&Configuration> {
        self.segments.first().map(|s| s.initial())
    }

    /// End configuration, if the path is non-empty.
    pub fn end(&self) -> Option<&Configuration> {
        self.segments.last().map(|s| s.end())
    }

    /// Total parameter length over all segments.
    pub fn duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// True iff every segment passed collision validation.
    pub fn is_valid(&self) -> bool {
        self.segments.iter().all(|s| s.is_valid())
    }

    /// Sample the configuration at global parameter `t`, clamped to the
    /// path's total duration. Returns `None` on an empty path.
    pub fn at(&self, t: f64) -> Option<Configuration> {
        let last = self.segments.last()?;
        let mut remaining = t.max(0.0);
        for segment in &self.segments {
            if remaining <= segment.duration() {
                return Some(segment.at(remaining));
            }
            remaining -= segment.duration();
        }
        Some(last.at(last.duration()))
    }

    /// The reversed path: segments in reverse order, each time-reversed.
    pub fn reverse(&self) -> Path {
        Path {
            segments: self.segments.iter().rev().map(|s| s.reversed()).collect(),
        }
    }
}
