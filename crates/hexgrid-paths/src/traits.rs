use std::hash::Hash;

/// The capability a pathfinding endpoint must offer.
///
/// Implementors are cheap copyable handles (an index plus a borrow of the
/// underlying graph, typically); the search clones them freely and uses them
/// as hash-map keys.
pub trait GraphNode: Copy + Eq + Hash {
    /// The nodes directly reachable from this one in a single step.
    ///
    /// An empty iterator is valid and means "dead end".
    fn neighbours(&self) -> impl Iterator<Item = Self>;

    /// Cost of stepping from this node into `neighbour`. Must be >= 0.
    ///
    /// Only called for pairs yielded by [`neighbours`](Self::neighbours).
    fn cost_to(&self, neighbour: &Self) -> f64;

    /// Estimated remaining cost from this node to `goal`.
    ///
    /// Must never overestimate the true remaining cost (admissible), or the
    /// search loses its optimality guarantee.
    fn estimated_cost_to(&self, goal: &Self) -> f64;
}
