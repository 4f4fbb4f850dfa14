use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::hash_map::{Entry, HashMap};

use crate::traits::GraphNode;

/// Per-node bookkeeping for one search.
struct NodeState<N> {
    g: f64,
    parent: Option<N>,
    open: bool,
}

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
///
/// `seq` is a monotonically increasing insertion counter: entries with equal
/// `f` pop in insertion order, which keeps results deterministic for a fixed
/// input graph.
struct OpenEntry<N> {
    f: f64,
    seq: u64,
    node: N,
}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest insertion.
        other
            .f
            .total_cmp(&self.f)
            .then(other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<N> Eq for OpenEntry<N> {}

/// A* search over any [`GraphNode`] type.
///
/// `PathFinder` owns its open heap and per-node state so that repeated
/// queries reuse allocations. None of that state is graph state: concurrent
/// searches against the same graph each need their own `PathFinder`.
pub struct PathFinder<N: GraphNode> {
    nodes: HashMap<N, NodeState<N>>,
    open: BinaryHeap<OpenEntry<N>>,
    seq: u64,
}

impl<N: GraphNode> Default for PathFinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GraphNode> PathFinder<N> {
    /// Create a new `PathFinder` with empty caches.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Compute the cheapest path from `start` to `goal`.
    ///
    /// Returns the full node sequence including both endpoints, or `None`
    /// if the goal is unreachable. `start == goal` yields the trivial
    /// single-node path.
    pub fn find_path(&mut self, start: N, goal: N) -> Option<Vec<N>> {
        self.nodes.clear();
        self.open.clear();
        self.seq = 0;

        if start == goal {
            return Some(vec![start]);
        }

        self.nodes.insert(
            start,
            NodeState {
                g: 0.0,
                parent: None,
                open: true,
            },
        );
        self.push(start, start.estimated_cost_to(&goal));

        while let Some(entry) = self.open.pop() {
            let current = entry.node;
            let Some(state) = self.nodes.get_mut(&current) else {
                continue;
            };
            // Skip stale entries for nodes already finalized.
            if !state.open {
                continue;
            }
            state.open = false;
            let current_g = state.g;

            if current == goal {
                log::trace!("path found, {} nodes touched", self.nodes.len());
                return Some(self.reconstruct(goal));
            }

            for neighbour in current.neighbours() {
                let tentative = current_g + current.cost_to(&neighbour);
                match self.nodes.entry(neighbour) {
                    Entry::Occupied(mut e) => {
                        let s = e.get_mut();
                        if tentative >= s.g {
                            continue;
                        }
                        // Strictly better route; reopen even if finalized
                        // (the heuristic may be admissible but inconsistent).
                        s.g = tentative;
                        s.parent = Some(current);
                        s.open = true;
                    }
                    Entry::Vacant(e) => {
                        e.insert(NodeState {
                            g: tentative,
                            parent: Some(current),
                            open: true,
                        });
                    }
                }
                self.push(neighbour, tentative + neighbour.estimated_cost_to(&goal));
            }
        }

        log::trace!("no path, {} nodes touched", self.nodes.len());
        None
    }

    fn push(&mut self, node: N, f: f64) {
        self.open.push(OpenEntry {
            f,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    /// Follow back-pointers from `goal` to the start, then reverse.
    fn reconstruct(&self, goal: N) -> Vec<N> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(n) = cur {
            path.push(n);
            cur = self.nodes.get(&n).and_then(|s| s.parent);
        }
        path.reverse();
        path
    }
}

/// One-shot convenience wrapper around [`PathFinder::find_path`].
pub fn find_path<N: GraphNode>(start: N, goal: N) -> Option<Vec<N>> {
    PathFinder::new().find_path(start, goal)
}
