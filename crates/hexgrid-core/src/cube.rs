//! Cube coordinates and hex distance.
//!
//! Cube coordinates place a hex grid on the diagonal plane `x + y + z == 0`
//! of a 3D integer lattice, which makes distance a plain component-wise
//! computation. The conversion from [`Offset`] uses the odd-r family (odd
//! rows shifted right), the same layout the adjacency rule in
//! [`Offset::hex_neighbors`] encodes, so the distance here is exactly the
//! minimum number of adjacency steps between two cells.

use std::fmt;

use crate::geom::Offset;

/// A hex position in cube coordinates. Invariant: `x + y + z == 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    /// Construct from the two free axes; `y` is derived so the invariant holds.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Hex distance between two cube coordinates.
    ///
    /// `(|dx| + |dy| + |dz|) / 2`, always an exact integer because the
    /// component deltas of two on-plane coordinates sum to zero.
    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()) / 2
    }
}

impl Offset {
    /// Convert this offset position to cube coordinates (odd-r layout).
    #[inline]
    pub const fn to_cube(self) -> Cube {
        let x = self.col - (self.row - (self.row & 1)) / 2;
        Cube::new(x, self.row)
    }

    /// Hex distance to another offset position, in adjacency steps.
    #[inline]
    pub fn hex_distance(self, other: Offset) -> i32 {
        self.to_cube().distance(other.to_cube())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_matches_odd_r_layout() {
        assert_eq!(Offset::new(0, 0).to_cube(), Cube::new(0, 0));
        assert_eq!(Offset::new(1, 0).to_cube(), Cube::new(1, 0));
        assert_eq!(Offset::new(0, 1).to_cube(), Cube::new(0, 1));
        assert_eq!(Offset::new(1, 1).to_cube(), Cube::new(1, 1));
        assert_eq!(Offset::new(2, 2).to_cube(), Cube::new(1, 2));
        assert_eq!(Offset::new(2, 3).to_cube(), Cube::new(1, 3));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Offset::new(4, 5);
        assert_eq!(p.hex_distance(p), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Offset::new(0, 0);
        let b = Offset::new(5, 3);
        assert_eq!(a.hex_distance(b), b.hex_distance(a));
    }

    #[test]
    fn neighbors_are_at_distance_one() {
        // Both parities: every adjacency step moves distance exactly 1.
        for &p in &[Offset::new(2, 2), Offset::new(2, 3)] {
            for n in p.hex_neighbors() {
                assert_eq!(p.hex_distance(n), 1, "{p} -> {n}");
            }
        }
    }

    #[test]
    fn distance_matches_known_values() {
        assert_eq!(Offset::new(0, 0).hex_distance(Offset::new(2, 2)), 3);
        assert_eq!(Offset::new(0, 0).hex_distance(Offset::new(2, 0)), 2);
        assert_eq!(Offset::new(0, 0).hex_distance(Offset::new(0, 2)), 2);
        assert_eq!(Offset::new(0, 2).hex_distance(Offset::new(2, 0)), 3);
    }

    #[test]
    fn distance_satisfies_triangle_inequality() {
        let pts = [
            Offset::new(0, 0),
            Offset::new(3, 1),
            Offset::new(1, 4),
            Offset::new(5, 5),
        ];
        for a in pts {
            for b in pts {
                for c in pts {
                    assert!(a.hex_distance(c) <= a.hex_distance(b) + b.hex_distance(c));
                }
            }
        }
    }
}
