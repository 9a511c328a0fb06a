//! Roadmap graph engine.
//!
//! This module provides the directed roadmap multigraph with:
//!
//! - **Arena storage**: nodes and edges addressed by index, components by id
//! - **Incremental connected components**: one-way reachability between
//!   components, cycles merged as they form
//! - **Spatial index**: bucket k-d tree for nearest-neighbour queries
//!   filtered by component

mod component;
mod graph;
mod kd_tree;
mod node;

pub use component::ConnectedComponent;
pub use graph::Roadmap;
pub use kd_tree::KdIndex;
pub use node::{Edge, Node};
