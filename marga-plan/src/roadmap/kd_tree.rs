//! Incremental k-d index over roadmap nodes.
//!
//! A bucket k-d tree keyed by configuration, used by the roadmap to answer
//! nearest-neighbour queries under a user-supplied [`Distance`]. Leaves hold
//! up to `bucket_size` entries (default 30) and split on the axis of
//! largest spread once full.
//!
//! Queries take an *accept* filter over node ids. The roadmap passes a
//! connected-component membership test, so component merges never require
//! touching the index: membership is looked up live at query time.
//!
//! Subtree pruning relies on [`Distance::lower_bound_to_box`]. A metric
//! without a usable box bound returns 0 there, which degrades the search to
//! a full scan but keeps the result exact.

use crate::core::Configuration;
use crate::distance::Distance;

/// One indexed node.
#[derive(Clone, Debug)]
struct Entry {
    node: usize,
    config: Configuration,
}

/// A tree cell with its bounding box.
struct Cell {
    min: Vec<f64>,
    max: Vec<f64>,
    kind: CellKind,
}

enum CellKind {
    Leaf {
        entries: Vec<Entry>,
    },
    Split {
        axis: usize,
        threshold: f64,
        lower: Box<Cell>,
        upper: Box<Cell>,
    },
}

impl Cell {
    fn leaf(dim: usize) -> Self {
        Self {
            min: vec![f64::INFINITY; dim],
            max: vec![f64::NEG_INFINITY; dim],
            kind: CellKind::Leaf {
                entries: Vec::new(),
            },
        }
    }

    fn from_entries(dim: usize, entries: Vec<Entry>) -> Self {
        let mut cell = Cell::leaf(dim);
        for entry in &entries {
            cell.expand(&entry.config);
        }
        cell.kind = CellKind::Leaf { entries };
        cell
    }

    fn expand(&mut self, q: &Configuration) {
        for i in 0..self.min.len() {
            self.min[i] = self.min[i].min(q[i]);
            self.max[i] = self.max[i].max(q[i]);
        }
    }
}

/// Incremental spatial index over roadmap nodes.
pub struct KdIndex {
    bucket_size: usize,
    dim: usize,
    root: Option<Cell>,
    len: usize,
}

impl KdIndex {
    /// Create an index for `dim`-dimensional configurations.
    pub fn new(dim: usize, bucket_size: usize) -> Self {
        assert!(bucket_size > 0, "bucket size must be positive");
        Self {
            bucket_size,
            dim,
            root: None,
            len: 0,
        }
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Insert a node under its configuration.
    ///
    /// The roadmap guarantees no duplicate configuration is inserted.
    pub fn add(&mut self, node: usize, config: Configuration) {
        debug_assert_eq!(config.dim(), self.dim);
        let bucket_size = self.bucket_size;
        let cell = self.root.get_or_insert_with(|| Cell::leaf(config.dim()));
        Self::insert(cell, Entry { node, config }, bucket_size);
        self.len += 1;
    }

    fn insert(cell: &mut Cell, entry: Entry, bucket_size: usize) {
        cell.expand(&entry.config);
        match &mut cell.kind {
            CellKind::Split {
                axis,
                threshold,
                lower,
                upper,
            } => {
                if entry.config[*axis] < *threshold {
                    Self::insert(lower, entry, bucket_size);
                } else {
                    Self::insert(upper, entry, bucket_size);
                }
            }
            CellKind::Leaf { entries } => {
                entries.push(entry);
                if entries.len() > bucket_size {
                    Self::split(cell);
                }
            }
        }
    }

    /// Split an over-full leaf on the axis of largest spread. A leaf whose
    /// entries all coincide is left oversized.
    fn split(cell: &mut Cell) {
        let entries = match &mut cell.kind {
            CellKind::Leaf { entries } => std::mem::take(entries),
            CellKind::Split { .. } => unreachable!("split called on an inner cell"),
        };

        let dim = cell.min.len();
        let (axis, spread) = (0..dim)
            .map(|i| (i, cell.max[i] - cell.min[i]))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or((0, 0.0));

        if !(spread > 0.0) {
            cell.kind = CellKind::Leaf { entries };
            return;
        }

        // Midpoint split: both halves are guaranteed non-empty because the
        // extrema on `axis` differ.
        let threshold = 0.5 * (cell.min[axis] + cell.max[axis]);
        let (lower, upper): (Vec<Entry>, Vec<Entry>) = entries
            .into_iter()
            .partition(|e| e.config[axis] < threshold);

        cell.kind = CellKind::Split {
            axis,
            threshold,
            lower: Box::new(Cell::from_entries(dim, lower)),
            upper: Box::new(Cell::from_entries(dim, upper)),
        };
    }

    /// Nearest accepted node to `q` under `distance`, with its distance.
    ///
    /// Returns `None` when no indexed node passes the filter. Ties keep the
    /// earlier-visited entry, so results are deterministic for a given
    /// insertion order.
    pub fn search(
        &self,
        q: &Configuration,
        distance: &dyn Distance,
        accept: &dyn Fn(usize) -> bool,
    ) -> Option<(usize, f64)> {
        let root = self.root.as_ref()?;
        let mut best: Option<(usize, f64)> = None;
        Self::search_cell(root, q, distance, accept, &mut best);
        best
    }

    fn search_cell(
        cell: &Cell,
        q: &Configuration,
        distance: &dyn Distance,
        accept: &dyn Fn(usize) -> bool,
        best: &mut Option<(usize, f64)>,
    ) {
        if let Some((_, best_dist)) = best {
            if distance.lower_bound_to_box(q, &cell.min, &cell.max) > *best_dist {
                return;
            }
        }
        match &cell.kind {
            CellKind::Leaf { entries } => {
                for entry in entries {
                    if !accept(entry.node) {
                        continue;
                    }
                    let d = distance.distance(q, &entry.config);
                    if best.as_ref().map_or(true, |(_, bd)| d < *bd) {
                        *best = Some((entry.node, d));
                    }
                }
            }
            CellKind::Split {
                axis,
                threshold,
                lower,
                upper,
            } => {
                // Descend the side containing the query first.
                let (near, far) = if q[*axis] < *threshold {
                    (lower, upper)
                } else {
                    (upper, lower)
                };
                Self::search_cell(near, q, distance, accept, best);
                Self::search_cell(far, q, distance, accept, best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::WeightedDistance;

    fn q(values: &[f64]) -> Configuration {
        Configuration::from(values)
    }

    fn accept_all(_: usize) -> bool {
        true
    }

    #[test]
    fn test_empty_search() {
        let index = KdIndex::new(2, 30);
        let d = WeightedDistance::uniform(2);
        assert!(index.search(&q(&[0.0, 0.0]), &d, &accept_all).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_single_entry() {
        let mut index = KdIndex::new(2, 30);
        index.add(7, q(&[1.0, 2.0]));
        let d = WeightedDistance::uniform(2);

        let (node, dist) = index.search(&q(&[1.0, 3.0]), &d, &accept_all).unwrap();
        assert_eq!(node, 7);
        assert!((dist - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_splits_keep_all_entries_reachable() {
        // Small bucket forces several splits
        let mut index = KdIndex::new(1, 2);
        for i in 0..50 {
            index.add(i, q(&[i as f64]));
        }
        assert_eq!(index.len(), 50);

        let d = WeightedDistance::uniform(1);
        for i in 0..50 {
            let (node, dist) = index
                .search(&q(&[i as f64 + 0.1]), &d, &accept_all)
                .unwrap();
            assert_eq!(node, i, "query near {} found {}", i, node);
            assert!(dist < 0.2);
        }
    }

    #[test]
    fn test_filter_excludes_nodes() {
        let mut index = KdIndex::new(1, 30);
        index.add(0, q(&[0.0]));
        index.add(1, q(&[10.0]));
        let d = WeightedDistance::uniform(1);

        // Node 0 is closest, but only node 1 is accepted
        let (node, dist) = index.search(&q(&[1.0]), &d, &|n| n == 1).unwrap();
        assert_eq!(node, 1);
        assert!((dist - 9.0).abs() < 1e-12);

        assert!(index.search(&q(&[1.0]), &d, &|_| false).is_none());
    }

    #[test]
    fn test_matches_brute_force() {
        let mut index = KdIndex::new(3, 4);
        let mut configs = Vec::new();
        // Deterministic pseudo-random points
        let mut state = 42u64;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64 - 0.5
        };
        for i in 0..200 {
            let config = q(&[next() * 10.0, next() * 10.0, next() * 10.0]);
            index.add(i, config.clone());
            configs.push(config);
        }

        let d = WeightedDistance::new(vec![1.0, 2.0, 0.5]);
        for _ in 0..25 {
            let query = q(&[next() * 10.0, next() * 10.0, next() * 10.0]);
            let (node, dist) = index.search(&query, &d, &accept_all).unwrap();

            let (expected, expected_dist) = configs
                .iter()
                .enumerate()
                .map(|(i, c)| (i, d.distance(&query, c)))
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
                .unwrap();

            assert_eq!(node, expected);
            assert!((dist - expected_dist).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clear() {
        let mut index = KdIndex::new(1, 30);
        index.add(0, q(&[1.0]));
        index.clear();
        assert!(index.is_empty());
        let d = WeightedDistance::uniform(1);
        assert!(index.search(&q(&[1.0]), &d, &accept_all).is_none());
    }
}
