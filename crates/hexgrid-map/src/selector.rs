//! Per-cell tile selection strategies.

use hexgrid_core::Offset;
use rand::{Rng, RngExt};

use crate::terrain::Terrain;

/// Strategy producing the `(cost, walkable)` pair for each grid cell during
/// map construction.
///
/// Implemented for any `FnMut(Offset) -> (f64, bool)` closure, so
/// deterministic test maps need no dedicated type.
pub trait TileSelector {
    /// Choose the cost and walkability of the tile at `pos`.
    fn pick(&mut self, pos: Offset) -> (f64, bool);
}

impl<F: FnMut(Offset) -> (f64, bool)> TileSelector for F {
    fn pick(&mut self, pos: Offset) -> (f64, bool) {
        self(pos)
    }
}

/// Selector drawing a uniformly random [`Terrain`] for every cell.
pub struct TerrainSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> TerrainSelector<R> {
    /// Create a selector using the given random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one random terrain.
    pub fn draw(&mut self) -> Terrain {
        Terrain::ALL[self.rng.random_range(0..Terrain::ALL.len())]
    }
}

impl<R: Rng> TileSelector for TerrainSelector<R> {
    fn pick(&mut self, _pos: Offset) -> (f64, bool) {
        let terrain = self.draw();
        (terrain.cost(), terrain.walkable())
    }
}
