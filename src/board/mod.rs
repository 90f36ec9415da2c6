//! Board representation: coordinates, topologies, adjacency, and token
//! pools.
//!
//! Everything here is deterministic and immutable once built; randomness
//! lives entirely in [`crate::generate`].

pub mod adjacency;
pub mod coords;
pub mod pool;
pub mod tile;
pub mod topology;

pub use adjacency::{build_adjacency, AdjacencyIndex};
pub use coords::{AxialCoord, DIRECTIONS};
pub use pool::{Resource, TokenPool};
pub use tile::Tile;
pub use topology::{disk_topology, expanded_topology, BoardSize, BoardTopology, ParseSizeError};

/// Resolves a board size to its topology and adjacency index.
///
/// Called once per size selection; the results are immutable and are passed
/// into [`crate::generate::generate`] explicitly rather than held as
/// ambient state.
pub fn select_board_size(size: BoardSize) -> (BoardTopology, AdjacencyIndex) {
    let topology = size.topology();
    let adjacency = build_adjacency(&topology);
    (topology, adjacency)
}
