//! Axial coordinates for pointy-top hex grids.
//!
//! Every hex is addressed by an integer pair (q, r). Two hexes are neighbors
//! iff their coordinate difference is one of the six canonical unit
//! directions. Coordinates carry no topology knowledge: `neighbors` always
//! returns all six candidates and leaves membership checks to the caller.

use serde::{Deserialize, Serialize};

/// The six axial direction vectors, clockwise from east.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// An axial hex coordinate.
///
/// `Eq + Hash` on the pair makes the coordinate itself usable as a map key,
/// so no string or packed-integer encoding is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        AxialCoord { q, r }
    }

    /// Returns the six neighboring coordinates, one per direction.
    ///
    /// No existence check is performed; coordinates outside a given board
    /// are filtered out by the adjacency builder.
    pub fn neighbors(self) -> [AxialCoord; 6] {
        let mut out = [self; 6];
        for (i, (dq, dr)) in DIRECTIONS.iter().enumerate() {
            out[i] = AxialCoord::new(self.q + dq, self.r + dr);
        }
        out
    }
}
