//! Tile terrain types and their traversal costs.

/// The terrain of a single hex tile.
///
/// Costs are charged for moving *into* a tile of this terrain. Water is the
/// only impassable terrain; its cost is still defined because an unwalkable
/// tile can appear in a walkable neighbour's outgoing edge set (see
/// [`crate::map::HexMap`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Grass,
    Hills,
    Forest,
    Mountain,
    Water,
}

impl Terrain {
    /// All terrain types, in random-draw order.
    pub const ALL: [Terrain; 5] = [
        Terrain::Forest,
        Terrain::Hills,
        Terrain::Grass,
        Terrain::Mountain,
        Terrain::Water,
    ];

    /// Cost of moving into a tile of this terrain.
    pub const fn cost(self) -> f64 {
        match self {
            Terrain::Grass => 1.0,
            Terrain::Hills => 3.0,
            Terrain::Forest => 5.0,
            Terrain::Mountain => 10.0,
            Terrain::Water => 1000.0,
        }
    }

    /// Whether a tile of this terrain can be entered and left normally.
    pub const fn walkable(self) -> bool {
        !matches!(self, Terrain::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_positive() {
        for t in Terrain::ALL {
            assert!(t.cost() >= 1.0, "{t:?} cost below 1");
        }
    }

    #[test]
    fn only_water_is_impassable() {
        for t in Terrain::ALL {
            assert_eq!(t.walkable(), t != Terrain::Water);
        }
    }
}
