//! Tiles and their arena handles.

use hexgrid_core::Offset;

/// Index of a tile within its [`HexMap`](crate::HexMap)'s arena.
///
/// Neighbour links are stored as `TileId`s rather than references because the
/// adjacency graph is cyclic and every tile shares the map's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub usize);

impl TileId {
    /// The underlying arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single hex cell: position, traversal cost, walkability and the resolved
/// outgoing neighbour set.
///
/// All fields are fixed at construction time; the neighbour set is populated
/// exactly once, after every tile of the map exists.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub(crate) position: Offset,
    pub(crate) cost: f64,
    pub(crate) walkable: bool,
    pub(crate) neighbours: Vec<TileId>,
}

impl Tile {
    /// Grid position of this tile.
    #[inline]
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Cost charged for moving into this tile from any neighbour.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether this tile may serve as a path endpoint and contributes
    /// outgoing edges.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }

    /// Outgoing neighbour links. Empty for unwalkable tiles.
    #[inline]
    pub fn neighbours(&self) -> &[TileId] {
        &self.neighbours
    }
}
