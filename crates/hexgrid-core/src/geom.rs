//! Offset coordinates: the grid-facing `(col, row)` addressing scheme.

use std::fmt;
use std::ops::{Add, Sub};

/// A 0-indexed position on a rectangular hex grid in offset coordinates.
///
/// The grid uses the odd-r layout: odd rows are shifted half a tile to the
/// right. `col` grows right, `row` grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { col: 0, row: 0 };

    /// Create a new offset position.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Row parity: 0 for even rows, 1 for odd (right-shifted) rows.
    #[inline]
    pub const fn parity(self) -> i32 {
        self.row & 1
    }

    /// Return a position shifted by (dcol, drow).
    #[inline]
    pub const fn shift(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// The six candidate neighbour positions of this cell, parity-aware.
    ///
    /// Candidates may fall outside any particular grid; callers filter by
    /// their own bounds. Order: W, NW, SW, E, NE, SE.
    #[inline]
    pub fn hex_neighbors(self) -> [Offset; 6] {
        let p = self.parity();
        [
            self.shift(-1, 0),
            self.shift(-1 + p, -1),
            self.shift(-1 + p, 1),
            self.shift(1, 0),
            self.shift(p, -1),
            self.shift(p, 1),
        ]
    }
}

impl PartialOrd for Offset {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Offset {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Add for Offset {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Offset {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(1, 2);
        let b = Offset::new(3, 4);
        assert_eq!(a + b, Offset::new(4, 6));
        assert_eq!(b - a, Offset::new(2, 2));
        assert_eq!(Offset::ZERO + a, a);
    }

    #[test]
    fn parity_follows_row() {
        assert_eq!(Offset::new(3, 0).parity(), 0);
        assert_eq!(Offset::new(0, 1).parity(), 1);
        assert_eq!(Offset::new(7, 4).parity(), 0);
        assert_eq!(Offset::new(2, 5).parity(), 1);
    }

    #[test]
    fn even_row_neighbors() {
        let n: HashSet<_> = Offset::new(2, 2).hex_neighbors().into_iter().collect();
        let want: HashSet<_> = [
            Offset::new(1, 2),
            Offset::new(1, 1),
            Offset::new(1, 3),
            Offset::new(3, 2),
            Offset::new(2, 1),
            Offset::new(2, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(n, want);
    }

    #[test]
    fn odd_row_neighbors() {
        let n: HashSet<_> = Offset::new(2, 3).hex_neighbors().into_iter().collect();
        let want: HashSet<_> = [
            Offset::new(1, 3),
            Offset::new(2, 2),
            Offset::new(2, 4),
            Offset::new(3, 3),
            Offset::new(3, 2),
            Offset::new(3, 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(n, want);
    }

    #[test]
    fn neighbors_are_distinct() {
        for row in 0..4 {
            for col in 0..4 {
                let p = Offset::new(col, row);
                let set: HashSet<_> = p.hex_neighbors().into_iter().collect();
                assert_eq!(set.len(), 6);
                assert!(!set.contains(&p));
            }
        }
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Offset::new(1, 1),
            Offset::new(0, 0),
            Offset::new(2, 0),
            Offset::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Offset::new(0, 0),
                Offset::new(2, 0),
                Offset::new(0, 1),
                Offset::new(1, 1),
            ]
        );
    }
}
