//! Explicit start/goal endpoint selection.
//!
//! The routing engine itself accepts any endpoints; the rule that routes may
//! only start and end on walkable tiles lives here, in the selection layer.
//! `Selection` is a plain value passed in and out by the caller, not ambient
//! state.

use hexgrid_core::Offset;

use crate::map::HexMap;

/// Two-step endpoint selection: first pick fills the start, second fills the
/// goal, further picks are ignored until [`Selection::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<Offset>,
    goal: Option<Offset>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected start position, if any.
    #[inline]
    pub fn start(&self) -> Option<Offset> {
        self.start
    }

    /// The selected goal position, if any.
    #[inline]
    pub fn goal(&self) -> Option<Offset> {
        self.goal
    }

    /// Whether both endpoints are selected.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.goal.is_some()
    }

    /// Try to select `pos` as the next endpoint on `map`.
    ///
    /// Rejected (returning `false`) when the position is off the map, on an
    /// unwalkable tile, already selected, or when the selection is complete.
    pub fn pick(&mut self, map: &HexMap, pos: Offset) -> bool {
        if self.is_complete() {
            return false;
        }
        let Some(tile) = map.tile(pos) else {
            return false;
        };
        if !tile.walkable() {
            return false;
        }
        if self.start == Some(pos) {
            return false;
        }
        if self.start.is_none() {
            self.start = Some(pos);
        } else {
            self.goal = Some(pos);
        }
        true
    }

    /// Reset both endpoints.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
