//! The roadmap graph.
//!
//! A directed multigraph of configurations with incremental
//! connected-component bookkeeping. Nodes and edges are stored in arena
//! vectors and addressed by index; components live in an id map so merges
//! can erase the absorbed ones. Nearest-neighbour queries are delegated to
//! the k-d index with a component-membership filter.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::config::RoadmapConfig;
use crate::core::Configuration;
use crate::distance::Distance;
use crate::error::{PlanError, Result};
use crate::path::Path;

use super::component::ConnectedComponent;
use super::kd_tree::KdIndex;
use super::node::{Edge, Node};

/// Roadmap of configurations for one robot.
///
/// Owns its nodes, edges, components and spatial index; everything is
/// released by [`clear`](Roadmap::clear) or on drop. External code refers
/// to nodes and edges by id and must treat them as read-only.
pub struct Roadmap {
    distance: Arc<dyn Distance>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    components: BTreeMap<usize, ConnectedComponent>,
    next_component: usize,
    index: KdIndex,
    init_node: Option<usize>,
    goal_nodes: Vec<usize>,
}

impl Roadmap {
    /// Roadmap over `dim`-dimensional configurations with default index
    /// settings.
    pub fn new(distance: Arc<dyn Distance>, dim: usize) -> Self {
        Self::with_config(distance, dim, &RoadmapConfig::default())
    }

    pub fn with_config(distance: Arc<dyn Distance>, dim: usize, config: &RoadmapConfig) -> Self {
        Self {
            distance,
            nodes: Vec::new(),
            edges: Vec::new(),
            components: BTreeMap::new(),
            next_component: 0,
            index: KdIndex::new(dim, config.bucket_size),
            init_node: None,
            goal_nodes: Vec::new(),
        }
    }

    pub fn distance(&self) -> &Arc<dyn Distance> {
        &self.distance
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: usize) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Live connected components, keyed by id.
    pub fn components(&self) -> &BTreeMap<usize, ConnectedComponent> {
        &self.components
    }

    pub fn init_node(&self) -> Option<usize> {
        self.init_node
    }

    /// Goal nodes in insertion order.
    pub fn goal_nodes(&self) -> &[usize] {
        &self.goal_nodes
    }

    /// Destroy all nodes, edges and components; reset the goal list, the
    /// init node and the spatial index.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.components.clear();
        self.next_component = 0;
        self.index.clear();
        self.init_node = None;
        self.goal_nodes.clear();
    }

    // ────────────────────────────────────────────────────────────────────
    // Node insertion
    // ────────────────────────────────────────────────────────────────────

    /// Add a node for `q`, or return the existing node whose configuration
    /// equals `q` under value equality. A new node starts in a fresh
    /// singleton component.
    pub fn add_node(&mut self, q: Configuration) -> usize {
        if let Some((nearest, _)) = self.nearest_node(&q) {
            if self.nodes[nearest].configuration == q {
                return nearest;
            }
        }
        let component = self.fresh_component();
        self.push_node(q, component)
    }

    /// Add a node for `q` inside component `component`, deduplicating
    /// against that component's nodes only.
    pub fn add_node_in_component(&mut self, q: Configuration, component: usize) -> usize {
        debug_assert!(self.components.contains_key(&component));
        if let Some((nearest, _)) = self.nearest_node_in_component(&q, component) {
            if self.nodes[nearest].configuration == q {
                return nearest;
            }
        }
        self.push_node(q, component)
    }

    /// Add (or find) the node for `q` and record it as the start node.
    pub fn set_init_node(&mut self, q: Configuration) -> usize {
        let id = self.add_node(q);
        self.init_node = Some(id);
        id
    }

    /// Add (or find) the node for `q` and append it to the goal list.
    pub fn add_goal_node(&mut self, q: Configuration) -> usize {
        let id = self.add_node(q);
        self.goal_nodes.push(id);
        id
    }

    fn fresh_component(&mut self) -> usize {
        let id = self.next_component;
        self.next_component += 1;
        self.components.insert(id, ConnectedComponent::new(id));
        id
    }

    fn push_node(&mut self, q: Configuration, component: usize) -> usize {
        let id = self.nodes.len();
        debug!("[Roadmap] added node {}: {}", id, q);
        self.index.add(id, q.clone());
        self.components
            .get_mut(&component)
            .expect("node added to a dead component")
            .add_node(id);
        self.nodes.push(Node::new(q, component));
        id
    }

    // ────────────────────────────────────────────────────────────────────
    // Edge insertion
    // ────────────────────────────────────────────────────────────────────

    /// Append one directed edge and connect the endpoint components.
    ///
    /// Re-adding an existing pair is allowed and stored as a distinct
    /// edge; self-edges are allowed.
    pub fn add_edge(&mut self, from: usize, to: usize, path: Path) -> usize {
        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, path));
        self.nodes[from].out_edges.push(id);
        self.nodes[to].in_edges.push(id);
        debug!(
            "[Roadmap] added edge {} -> {} ({} -> {})",
            from, to, self.nodes[from].configuration, self.nodes[to].configuration
        );
        let cc1 = self.nodes[from].component;
        let cc2 = self.nodes[to].component;
        self.connect(cc1, cc2);
        id
    }

    /// Append the edge pair for an undirected connection: `from -> to`
    /// carrying `path`, and `to -> from` carrying its reverse.
    pub fn add_edges(&mut self, from: usize, to: usize, path: Path) {
        let reversed = path.reverse();
        self.add_edge(from, to, path);
        self.add_edge(to, from, reversed);
    }

    /// Add (or find) the node for `q` in `from`'s component and connect it
    /// to `from` with an undirected edge pair.
    pub fn add_node_and_edges(&mut self, from: usize, q: Configuration, path: Path) -> usize {
        let component = self.nodes[from].component;
        let to = self.add_node_in_component(q, component);
        self.add_edges(from, to, path);
        to
    }

    // ────────────────────────────────────────────────────────────────────
    // Nearest-neighbour queries
    // ────────────────────────────────────────────────────────────────────

    /// Node nearest to `q` over the whole roadmap, with its distance.
    pub fn nearest_node(&self, q: &Configuration) -> Option<(usize, f64)> {
        self.index.search(q, &*self.distance, &|_| true)
    }

    /// Node of `component` nearest to `q`, with its distance.
    pub fn nearest_node_in_component(
        &self,
        q: &Configuration,
        component: usize,
    ) -> Option<(usize, f64)> {
        let nodes = &self.nodes;
        self.index
            .search(q, &*self.distance, &|id| nodes[id].component == component)
    }

    // ────────────────────────────────────────────────────────────────────
    // Component reachability
    // ────────────────────────────────────────────────────────────────────

    /// Whether component `from` can reach component `to` through directed
    /// edges, transitively.
    pub fn can_reach(&self, from: usize, to: usize) -> bool {
        let mut stack = vec![from];
        let mut visited = BTreeSet::new();
        while let Some(cc) = stack.pop() {
            if cc == to {
                return true;
            }
            if !visited.insert(cc) {
                continue;
            }
            if let Some(component) = self.components.get(&cc) {
                stack.extend(component.reachable_to.iter().copied());
            }
        }
        false
    }

    /// Every component lying on some path from `from` to `to` (endpoints
    /// included), or `None` when `to` is unreachable. These are exactly the
    /// components a new `to -> from` edge would put on a cycle.
    fn reach_chain(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let forward = self.reachable_set(from, true);
        if !forward.contains(&to) {
            return None;
        }
        let backward = self.reachable_set(to, false);
        Some(forward.intersection(&backward).copied().collect())
    }

    fn reachable_set(&self, start: usize, forward: bool) -> BTreeSet<usize> {
        let mut stack = vec![start];
        let mut visited = BTreeSet::new();
        while let Some(cc) = stack.pop() {
            if !visited.insert(cc) {
                continue;
            }
            if let Some(component) = self.components.get(&cc) {
                let next = if forward {
                    &component.reachable_to
                } else {
                    &component.reachable_from
                };
                stack.extend(next.iter().copied());
            }
        }
        visited
    }

    /// Record that `cc1` now reaches `cc2` through a new edge.
    ///
    /// Three cases: already reachable (nothing to do); the new edge closes
    /// a cycle (merge every component on the cycle into `cc1`); otherwise
    /// record the direct reachability pair.
    fn connect(&mut self, cc1: usize, cc2: usize) {
        if self.can_reach(cc1, cc2) {
            return;
        }
        if let Some(chain) = self.reach_chain(cc2, cc1) {
            debug!("[Roadmap] merging components {:?} into {}", chain, cc1);
            for cc in chain {
                if cc != cc1 {
                    self.merge_into(cc1, cc);
                }
            }
        } else {
            let c1 = self.components.get_mut(&cc1).expect("dead component");
            c1.reachable_to.insert(cc2);
            let c2 = self.components.get_mut(&cc2).expect("dead component");
            c2.reachable_from.insert(cc1);
        }
    }

    /// Absorb `absorbed` into `survivor`: move its nodes, union its
    /// reachability sets, and rewrite every other component's sets to
    /// reference the survivor.
    fn merge_into(&mut self, survivor: usize, absorbed: usize) {
        let Some(dead) = self.components.remove(&absorbed) else {
            return;
        };
        for node in &dead.nodes {
            self.nodes[*node].component = survivor;
        }
        let surv = self
            .components
            .get_mut(&survivor)
            .expect("merge into a dead component");
        surv.nodes.extend(dead.nodes);
        surv.reachable_to.extend(dead.reachable_to);
        surv.reachable_from.extend(dead.reachable_from);

        for component in self.components.values_mut() {
            if component.reachable_to.remove(&absorbed) {
                component.reachable_to.insert(survivor);
            }
            if component.reachable_from.remove(&absorbed) {
                component.reachable_from.insert(survivor);
            }
        }
    }

    /// Whether the init-node component reaches any goal-node component.
    ///
    /// # Panics
    ///
    /// Panics if no init node has been set; calling this earlier is a
    /// caller bug.
    pub fn path_exists(&self) -> bool {
        let init = self
            .init_node
            .expect("path_exists called before the init node is set");
        let cc_init = self.nodes[init].component;
        self.goal_nodes
            .iter()
            .any(|&goal| self.can_reach(cc_init, self.nodes[goal].component))
    }

    // ────────────────────────────────────────────────────────────────────
    // Invariant checking
    // ────────────────────────────────────────────────────────────────────

    /// Verify the graph and component invariants, returning
    /// [`PlanError::InvariantViolation`] on the first breach. Used by the
    /// test layer after mutating sequences.
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |msg: String| Err(PlanError::InvariantViolation(msg));

        // Components partition the node set, and membership is mirrored.
        let mut seen = vec![false; self.nodes.len()];
        for (&id, component) in &self.components {
            for &node in &component.nodes {
                if node >= self.nodes.len() {
                    return violation(format!("component {} lists unknown node {}", id, node));
                }
                if seen[node] {
                    return violation(format!("node {} listed by two components", node));
                }
                seen[node] = true;
                if self.nodes[node].component != id {
                    return violation(format!(
                        "node {} points at component {} but is listed by {}",
                        node, self.nodes[node].component, id
                    ));
                }
            }
        }
        if let Some(orphan) = seen.iter().position(|s| !s) {
            return violation(format!("node {} not listed by any component", orphan));
        }

        // Reachability sets are mirrored and reference live components.
        for (&id, component) in &self.components {
            for &to in &component.reachable_to {
                match self.components.get(&to) {
                    None => {
                        return violation(format!("component {} reaches dead component {}", id, to))
                    }
                    Some(target) if !target.reachable_from.contains(&id) => {
                        return violation(format!(
                            "reachability not mirrored between {} and {}",
                            id, to
                        ))
                    }
                    _ => {}
                }
            }
            for &from in &component.reachable_from {
                match self.components.get(&from) {
                    None => {
                        return violation(format!(
                            "component {} reached from dead component {}",
                            id, from
                        ))
                    }
                    Some(source) if !source.reachable_to.contains(&id) => {
                        return violation(format!(
                            "reachability not mirrored between {} and {}",
                            from, id
                        ))
                    }
                    _ => {}
                }
            }
        }

        // Every edge is witnessed by component reachability.
        for (id, edge) in self.edges.iter().enumerate() {
            let cc_from = self.nodes[edge.from].component;
            let cc_to = self.nodes[edge.to].component;
            if !self.can_reach(cc_from, cc_to) {
                return violation(format!(
                    "edge {} ({} -> {}) not reflected by component reachability",
                    id, edge.from, edge.to
                ));
            }
        }

        // No duplicate configuration inside a component.
        for (&id, component) in &self.components {
            for (i, &a) in component.nodes.iter().enumerate() {
                for &b in &component.nodes[i + 1..] {
                    if self.nodes[a].configuration == self.nodes[b].configuration {
                        return violation(format!(
                            "nodes {} and {} of component {} share a configuration",
                            a, b, id
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

const RULE: &str = "----------------------------------------------------------------------";

/// Human-readable dump: node list, `from -> to` edge list, then one section
/// per component with members and reachable-to / reachable-from sets.
impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Roadmap")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Nodes")?;
        writeln!(f, "{}", RULE)?;
        for (id, node) in self.nodes.iter().enumerate() {
            writeln!(f, "Node {}: {}", id, node.configuration)?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Edges")?;
        writeln!(f, "{}", RULE)?;
        for edge in &self.edges {
            writeln!(f, "Edge: {} -> {}", edge.from, edge.to)?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Connected components")?;
        writeln!(f, "{}", RULE)?;
        for (id, component) in &self.components {
            writeln!(f, "Connected component {}", id)?;
            let nodes: Vec<String> = component.nodes.iter().map(|n| n.to_string()).collect();
            writeln!(f, "Nodes: {}", nodes.join(", "))?;
            let to: Vec<String> = component.reachable_to.iter().map(|c| c.to_string()).collect();
            writeln!(f, "Reachable to: {}", to.join(", "))?;
            let from: Vec<String> =
                component.reachable_from.iter().map(|c| c.to_string()).collect();
            writeln!(f, "Reachable from: {}", from.join(", "))?;
        }
        Ok(())
    }
}
