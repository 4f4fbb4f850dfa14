//! **hexgrid-map** — hex tile maps for turn-based strategy games.
//!
//! This crate builds rectangular hex grids in offset coordinates (odd-r
//! layout) and exposes them to the generic search in `hexgrid-paths`:
//!
//! - [`Terrain`] — the five tile types with their traversal costs.
//! - [`HexMap`] — the tile arena: construction, parity-aware neighbour
//!   linking, and the [`HexMap::find_path`] entry point.
//! - [`TileSelector`] / [`TerrainSelector`] — per-cell `(cost, walkable)`
//!   strategies, random or deterministic.
//! - [`Selection`] — explicit start/goal endpoint selection state.
//!
//! A map is built once and is immutable afterwards; paths are ephemeral
//! values computed per request.

pub mod map;
pub mod selection;
pub mod selector;
pub mod terrain;
pub mod tile;

pub use map::{HexMap, MapError, PathError, TileRef};
pub use selection::Selection;
pub use selector::{TerrainSelector, TileSelector};
pub use terrain::Terrain;
pub use tile::{Tile, TileId};
