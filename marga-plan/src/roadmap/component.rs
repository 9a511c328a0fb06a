//! Connected components of the roadmap.

use std::collections::BTreeSet;

/// A maximal set of mutually reachable roadmap nodes, with one-way
/// reachability tracked to other components.
///
/// `reachable_to` / `reachable_from` hold the component-level edges induced
/// by roadmap edges, plus the component itself; transitive queries walk
/// these sets (see [`Roadmap::can_reach`]). The two sets stay mirrored:
/// `c1 ∈ c2.reachable_from ⇔ c2 ∈ c1.reachable_to`.
///
/// [`Roadmap::can_reach`]: super::Roadmap::can_reach
#[derive(Clone, Debug)]
pub struct ConnectedComponent {
    /// Member node ids in insertion order.
    pub(crate) nodes: Vec<usize>,
    /// Components reachable from this one (including itself).
    pub(crate) reachable_to: BTreeSet<usize>,
    /// Components that can reach this one (including itself).
    pub(crate) reachable_from: BTreeSet<usize>,
}

impl ConnectedComponent {
    /// Fresh component with the given id; every component reaches itself.
    pub(crate) fn new(id: usize) -> Self {
        Self {
            nodes: Vec::new(),
            reachable_to: BTreeSet::from([id]),
            reachable_from: BTreeSet::from([id]),
        }
    }

    pub(crate) fn add_node(&mut self, node: usize) {
        self.nodes.push(node);
    }

    /// Member node ids, in insertion order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn reachable_to(&self) -> &BTreeSet<usize> {
        &self.reachable_to
    }

    pub fn reachable_from(&self) -> &BTreeSet<usize> {
        &self.reachable_from
    }
}
