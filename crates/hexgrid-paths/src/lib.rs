//! **hexgrid-paths** — generic best-first pathfinding.
//!
//! This crate knows nothing about hexagons or tiles. It provides:
//!
//! - [`GraphNode`] — the capability a search endpoint must offer: its
//!   neighbours, the cost of stepping to a neighbour, and an admissible
//!   estimate of the remaining cost to a goal.
//! - [`PathFinder`] — an A* search over any `GraphNode`, with reusable
//!   internal caches for repeated queries.
//! - [`find_path`] — one-shot convenience entry point.
//!
//! Any node type satisfying the trait can be searched; the hex tile map in
//! `hexgrid-map` is one implementor, the mesh fixture in this crate's tests
//! is another.

mod astar;
mod traits;

pub use astar::{PathFinder, find_path};
pub use traits::GraphNode;
