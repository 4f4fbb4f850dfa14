//! **hexgrid-core** — coordinate primitives for hexagonal grids.
//!
//! This crate provides the two coordinate systems used across the *hexgrid*
//! workspace:
//!
//! - [`Offset`] — the `(col, row)` addressing scheme of a rectangular grid
//!   with horizontally-shifted alternating rows (odd-r layout).
//! - [`Cube`] — the three-axis hex coordinate system satisfying
//!   `x + y + z == 0`, used for distance computation.
//!
//! Everything here is pure data and pure functions; no state, no I/O.

pub mod cube;
pub mod geom;

pub use cube::Cube;
pub use geom::Offset;
