//! Board topologies: the fixed, ordered coordinate sets per board size.
//!
//! The enumeration order of a topology is what defines tile indices, and
//! every downstream structure (adjacency, generated layouts, rendering) is
//! keyed by those indices. Both constructors are deterministic, so indices
//! are stable across runs.
//!
//! The standard board is a computed radius-2 hex disk (19 tiles). The
//! expanded 5-6 player board is a literal table, not a formula: its
//! 4-5-6-6-5-4 elongated-hexagon outline does not fall out of the disk
//! constraint, and any deviation in the table would silently change the
//! adjacency graph.

use thiserror::Error;

use super::coords::AxialCoord;

/// Supported board size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSize {
    /// 19-tile radius-2 hex disk (3-4 players).
    Standard,
    /// 30-tile elongated hexagon (5-6 players).
    Expanded,
}

/// Raised when an external size key does not name a supported board size.
#[derive(Debug, Error)]
#[error("unknown board size: '{0}' (expected 'standard' or 'expanded')")]
pub struct ParseSizeError(pub String);

impl BoardSize {
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Standard => "standard",
            BoardSize::Expanded => "expanded",
        }
    }

    pub fn from_name(s: &str) -> Result<BoardSize, ParseSizeError> {
        match s {
            "standard" => Ok(BoardSize::Standard),
            "expanded" => Ok(BoardSize::Expanded),
            other => Err(ParseSizeError(other.to_string())),
        }
    }

    /// Builds the topology for this size.
    pub fn topology(self) -> BoardTopology {
        match self {
            BoardSize::Standard => disk_topology(2),
            BoardSize::Expanded => expanded_topology(),
        }
    }
}

/// An ordered, duplicate-free sequence of hex coordinates.
///
/// Position in the sequence is the tile index used everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    coords: Vec<AxialCoord>,
}

impl BoardTopology {
    /// Wraps an explicit coordinate list. The list must be duplicate-free;
    /// duplicates would alias a tile index and corrupt adjacency.
    pub fn new(coords: Vec<AxialCoord>) -> Self {
        debug_assert!(
            {
                let set: std::collections::HashSet<_> = coords.iter().collect();
                set.len() == coords.len()
            },
            "topology contains duplicate coordinates"
        );
        BoardTopology { coords }
    }

    pub fn coords(&self) -> &[AxialCoord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Enumerates the hex disk of the given radius: every (q, r) with q, r and
/// q + r all in [-radius, radius]. Column-major over q, so the order is
/// deterministic for a given radius.
pub fn disk_topology(radius: i32) -> BoardTopology {
    let mut coords = Vec::new();
    for q in -radius..=radius {
        let r_min = (-radius).max(-q - radius);
        let r_max = radius.min(-q + radius);
        for r in r_min..=r_max {
            coords.push(AxialCoord::new(q, r));
        }
    }
    BoardTopology::new(coords)
}

/// The literal 30-tile elongated hexagon for 5-6 players.
///
/// Six rows of 4, 5, 6, 6, 5, 4 hexes; rows below the middle shift left so
/// the outline stays symmetric. Row-major, top to bottom.
pub fn expanded_topology() -> BoardTopology {
    const ROWS: [(i32, i32, i32); 6] = [
        // (r, q_start, q_end)
        (-2, 2, 5),
        (-1, 1, 5),
        (0, 0, 5),
        (1, -1, 4),
        (2, -1, 3),
        (3, -1, 2),
    ];
    let mut coords = Vec::with_capacity(30);
    for (r, q_start, q_end) in ROWS {
        for q in q_start..=q_end {
            coords.push(AxialCoord::new(q, r));
        }
    }
    BoardTopology::new(coords)
}
