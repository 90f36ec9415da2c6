//! Adjacency index: precomputed neighbor tile indices per topology.
//!
//! Built once per board-size selection and shared by the validator and the
//! renderer. Construction is O(tiles * 6): one coordinate-to-index map, then
//! a constant-time lookup per neighbor candidate. Edge tiles simply end up
//! with fewer than six entries; off-board neighbors are dropped, never an
//! error.

use std::collections::HashMap;

use super::coords::AxialCoord;
use super::topology::BoardTopology;

/// Neighbor tile indices for every tile of one topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Neighbor indices of the given tile.
    pub fn neighbors_of(&self, tile: usize) -> &[usize] {
        &self.neighbors[tile]
    }

    /// Number of tiles this index covers.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Builds the adjacency index for a topology.
pub fn build_adjacency(topology: &BoardTopology) -> AdjacencyIndex {
    let index_by_coord: HashMap<AxialCoord, usize> = topology
        .coords()
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i))
        .collect();

    let neighbors = topology
        .coords()
        .iter()
        .map(|c| {
            c.neighbors()
                .into_iter()
                .filter_map(|n| index_by_coord.get(&n).copied())
                .collect()
        })
        .collect();

    AdjacencyIndex { neighbors }
}
