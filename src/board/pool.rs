//! Token pools: the fixed resource and chit multisets per board size.
//!
//! These are literal tables, not derived from topology. The resource table
//! has one entry per tile (deserts included); the chit table has one entry
//! per non-desert tile. The generator shuffles copies; the templates here
//! are never mutated.

use serde::{Deserialize, Serialize};

use super::topology::BoardSize;

/// A tile's resource label. `Desert` is the no-production placeholder and
/// never carries a chit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
    Desert,
}

impl Resource {
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Sheep => "sheep",
            Resource::Wheat => "wheat",
            Resource::Ore => "ore",
            Resource::Desert => "desert",
        }
    }

    /// True for every resource that takes a production chit.
    pub const fn produces(self) -> bool {
        !matches!(self, Resource::Desert)
    }
}

use Resource::*;

/// Standard 19-tile resource table: 4 wood, 3 brick, 4 sheep, 4 wheat,
/// 3 ore, 1 desert.
pub static STANDARD_RESOURCES: [Resource; 19] = [
    Wood, Wood, Wood, Wood, Brick, Brick, Brick, Sheep, Sheep, Sheep, Sheep, Wheat, Wheat, Wheat,
    Wheat, Ore, Ore, Ore, Desert,
];

/// Standard 18-chit table (one per non-desert tile, no 7).
pub static STANDARD_CHITS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

/// Expanded 30-tile resource table: 6 wood, 5 brick, 6 sheep, 6 wheat,
/// 5 ore, 2 desert.
pub static EXPANDED_RESOURCES: [Resource; 30] = [
    Wood, Wood, Wood, Wood, Wood, Wood, Brick, Brick, Brick, Brick, Brick, Sheep, Sheep, Sheep,
    Sheep, Sheep, Sheep, Wheat, Wheat, Wheat, Wheat, Wheat, Wheat, Ore, Ore, Ore, Ore, Ore, Desert,
    Desert,
];

/// Expanded 28-chit table.
pub static EXPANDED_CHITS: [u8; 28] = [
    2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
];

/// The two token multisets for one board size.
///
/// Templates are immutable; [`crate::generate::generate`] shuffles copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPool {
    resources: Vec<Resource>,
    chits: Vec<u8>,
}

impl TokenPool {
    /// Builds a pool from explicit tables. The chit count must equal the
    /// number of producing resources.
    pub fn new(resources: Vec<Resource>, chits: Vec<u8>) -> Self {
        debug_assert_eq!(
            chits.len(),
            resources.iter().filter(|r| r.produces()).count(),
            "chit count must match producing-tile count"
        );
        TokenPool { resources, chits }
    }

    pub fn standard() -> Self {
        TokenPool::new(STANDARD_RESOURCES.to_vec(), STANDARD_CHITS.to_vec())
    }

    pub fn expanded() -> Self {
        TokenPool::new(EXPANDED_RESOURCES.to_vec(), EXPANDED_CHITS.to_vec())
    }

    pub fn for_size(size: BoardSize) -> Self {
        match size {
            BoardSize::Standard => TokenPool::standard(),
            BoardSize::Expanded => TokenPool::expanded(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn chits(&self) -> &[u8] {
        &self.chits
    }

    /// Number of tiles this pool covers.
    pub fn tile_count(&self) -> usize {
        self.resources.len()
    }
}
