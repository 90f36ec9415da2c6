//! Placement rules and the layout validator.
//!
//! A [`ConstraintSet`] is a record of independently togglable rules; an
//! assignment is accepted only if every enabled rule holds for every tile.
//! The validator short-circuits on the first violation, which is what makes
//! the rejection-sampling loop in [`crate::generate`] cheap per attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::adjacency::AdjacencyIndex;
use crate::board::tile::Tile;

/// Which adjacency rules a generated layout must satisfy. All rules default
/// to off; any subset may be enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    /// No two adjacent tiles may both carry a 6 or an 8.
    pub block_high_probability: bool,
    /// No two adjacent tiles may carry the identical chit value.
    pub block_same_number: bool,
    /// No two adjacent non-desert tiles may share a resource.
    pub block_same_resource: bool,
}

impl ConstraintSet {
    pub const fn none() -> Self {
        ConstraintSet {
            block_high_probability: false,
            block_same_number: false,
            block_same_resource: false,
        }
    }

    /// Returns this set with the same-resource rule dropped, used for the
    /// relaxed retry pass of the generator.
    pub const fn without_same_resource(self) -> Self {
        ConstraintSet {
            block_high_probability: self.block_high_probability,
            block_same_number: self.block_same_number,
            block_same_resource: false,
        }
    }

    pub const fn any_enabled(self) -> bool {
        self.block_high_probability || self.block_same_number || self.block_same_resource
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.block_high_probability {
            names.push("block-high-probability");
        }
        if self.block_same_number {
            names.push("block-same-number");
        }
        if self.block_same_resource {
            names.push("block-same-resource");
        }
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

/// Checks an assignment against every enabled rule.
///
/// Scans each tile's neighbors via the adjacency index and returns false on
/// the first violation. Scan order does not affect the outcome. Each
/// adjacent pair is visited from both sides, which keeps the loop simple;
/// every rule here is symmetric so no violation is missed or double-counted
/// into a different answer.
pub fn is_valid(tiles: &[Tile], adjacency: &AdjacencyIndex, constraints: ConstraintSet) -> bool {
    if !constraints.any_enabled() {
        return true;
    }

    for (i, tile) in tiles.iter().enumerate() {
        for &j in adjacency.neighbors_of(i) {
            let neighbor = &tiles[j];

            if constraints.block_high_probability
                && tile.is_high_probability()
                && neighbor.is_high_probability()
            {
                return false;
            }

            if constraints.block_same_number && tile.chit.is_some() && neighbor.chit == tile.chit {
                return false;
            }

            if constraints.block_same_resource
                && tile.resource.produces()
                && neighbor.resource == tile.resource
            {
                return false;
            }
        }
    }
    true
}
