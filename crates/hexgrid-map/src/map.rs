//! The tile arena and its construction.

use std::ops::Index;

use hexgrid_core::Offset;
use hexgrid_paths::{GraphNode, PathFinder};
use thiserror::Error;

use crate::selector::TileSelector;
use crate::tile::{Tile, TileId};

/// Map construction failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// The tile selector produced a negative (or NaN) cost. A* optimality
    /// requires nonnegative edge costs, so the map is rejected outright.
    #[error("tile {pos} has invalid cost {cost}")]
    NegativeCost { pos: Offset, cost: f64 },
}

/// Search input failure. An unreachable goal is *not* an error; it is a
/// normal `Ok(None)` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("start position {0} is not on the map")]
    UnknownStart(Offset),
    #[error("goal position {0} is not on the map")]
    UnknownGoal(Offset),
}

/// A rectangular hex map: one [`Tile`] per position with
/// `0 <= col < width` and `0 <= row < height`, stored row-major.
///
/// Built once by [`HexMap::generate`] and immutable afterwards, so shared
/// read access from any number of searches is safe.
#[derive(Debug)]
pub struct HexMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl HexMap {
    /// Build a `width` x `height` map, filling every cell from `selector`
    /// and then resolving neighbour links in a single pass.
    ///
    /// Non-positive dimensions yield an empty map rather than an error. A
    /// selector returning a negative cost aborts construction before any
    /// linking happens, so a partially linked map never escapes.
    pub fn generate(
        width: i32,
        height: i32,
        selector: &mut impl TileSelector,
    ) -> Result<HexMap, MapError> {
        if width <= 0 || height <= 0 {
            log::debug!("degenerate dimensions {width}x{height}, producing empty map");
            return Ok(HexMap {
                width: 0,
                height: 0,
                tiles: Vec::new(),
            });
        }

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            for col in 0..width {
                let pos = Offset::new(col, row);
                let (cost, walkable) = selector.pick(pos);
                if !(cost >= 0.0) {
                    return Err(MapError::NegativeCost { pos, cost });
                }
                tiles.push(Tile {
                    position: pos,
                    cost,
                    walkable,
                    neighbours: Vec::new(),
                });
            }
        }

        let mut map = HexMap {
            width,
            height,
            tiles,
        };
        map.link_neighbours();
        log::debug!(
            "generated {width}x{height} map, {} unwalkable tiles",
            map.tiles().filter(|t| !t.walkable()).count()
        );
        Ok(map)
    }

    /// Resolve every tile's outgoing neighbour set from the parity-aware
    /// candidate offsets.
    ///
    /// The linking is deliberately asymmetric, matching the turn rules this
    /// engine serves: an unwalkable tile keeps an empty outgoing set, while a
    /// walkable tile links to every in-range candidate even when that
    /// candidate is itself unwalkable. A route may therefore end *on* an
    /// unwalkable tile but can never pass through one.
    fn link_neighbours(&mut self) {
        for i in 0..self.tiles.len() {
            if !self.tiles[i].walkable {
                continue;
            }
            let neighbours = self.tiles[i]
                .position
                .hex_neighbors()
                .into_iter()
                .filter_map(|cand| self.tile_id(cand))
                .collect();
            self.tiles[i].neighbours = neighbours;
        }
    }

    /// Grid width in columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `pos` lies on the map.
    #[inline]
    pub fn contains(&self, pos: Offset) -> bool {
        pos.col >= 0 && pos.col < self.width && pos.row >= 0 && pos.row < self.height
    }

    /// Arena id of the tile at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn tile_id(&self, pos: Offset) -> Option<TileId> {
        if !self.contains(pos) {
            return None;
        }
        Some(TileId((pos.row * self.width + pos.col) as usize))
    }

    /// The tile at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, pos: Offset) -> Option<&Tile> {
        self.tile_id(pos).map(|id| &self.tiles[id.index()])
    }

    /// A search handle for the tile at `pos`.
    #[inline]
    pub fn tile_ref(&self, pos: Offset) -> Option<TileRef<'_>> {
        self.tile_id(pos).map(|id| TileRef { map: self, id })
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Compute the cheapest route from `start` to `goal`.
    ///
    /// Returns the full position sequence including both endpoints,
    /// `Ok(None)` when the goal is unreachable, or an error when either
    /// endpoint is off the map (in which case no search runs). A route from
    /// a position to itself is the trivial single-position route.
    pub fn find_path(
        &self,
        start: Offset,
        goal: Offset,
    ) -> Result<Option<Vec<Offset>>, PathError> {
        let s = self.tile_ref(start).ok_or(PathError::UnknownStart(start))?;
        let g = self.tile_ref(goal).ok_or(PathError::UnknownGoal(goal))?;
        let path = PathFinder::new().find_path(s, g);
        Ok(path.map(|nodes| nodes.iter().map(|n| n.position()).collect()))
    }

    /// Total cost of a route: the sum of the costs of every tile entered
    /// (the start tile is free). Positions off the map are ignored.
    pub fn path_cost(&self, path: &[Offset]) -> f64 {
        path.iter()
            .skip(1)
            .filter_map(|&pos| self.tile(pos))
            .map(|t| t.cost())
            .sum()
    }
}

impl Index<TileId> for HexMap {
    type Output = Tile;

    #[inline]
    fn index(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }
}

// ---------------------------------------------------------------------------
// TileRef
// ---------------------------------------------------------------------------

/// A copyable search handle: one tile plus a borrow of its map.
///
/// This is the map's [`GraphNode`] implementation. Handles from different
/// maps never compare equal, so mixing them in one search simply finds no
/// path instead of producing nonsense.
#[derive(Clone, Copy)]
pub struct TileRef<'m> {
    map: &'m HexMap,
    id: TileId,
}

impl<'m> TileRef<'m> {
    /// The tile this handle points at.
    #[inline]
    pub fn tile(&self) -> &'m Tile {
        &self.map.tiles[self.id.index()]
    }

    /// Arena id of the tile.
    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Grid position of the tile.
    #[inline]
    pub fn position(&self) -> Offset {
        self.tile().position()
    }
}

impl PartialEq for TileRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.map, other.map)
    }
}

impl Eq for TileRef<'_> {}

impl std::hash::Hash for TileRef<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for TileRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TileRef({})", self.position())
    }
}

impl GraphNode for TileRef<'_> {
    fn neighbours(&self) -> impl Iterator<Item = Self> {
        let map = self.map;
        self.tile()
            .neighbours()
            .iter()
            .map(move |&id| TileRef { map, id })
    }

    fn cost_to(&self, neighbour: &Self) -> f64 {
        // Cost depends only on the destination tile, never on the edge.
        neighbour.tile().cost()
    }

    fn estimated_cost_to(&self, goal: &Self) -> f64 {
        // Hex distance in steps. Admissible as long as every tile cost is
        // at least 1, which holds for the whole terrain table.
        self.position().hex_distance(goal.position()) as f64
    }
}
