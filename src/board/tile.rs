//! A single assigned board tile.

use serde::{Deserialize, Serialize};

use super::pool::Resource;

/// One tile of a generated layout: a resource label plus its production
/// chit. `chit` is `None` exactly when the resource is the desert
/// placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub resource: Resource,
    pub chit: Option<u8>,
}

impl Tile {
    pub const fn new(resource: Resource, chit: Option<u8>) -> Self {
        Tile { resource, chit }
    }

    /// True when this tile carries one of the two highest-probability chit
    /// values (6 and 8, five dice combinations each).
    pub fn is_high_probability(&self) -> bool {
        matches!(self.chit, Some(6) | Some(8))
    }
}
