//! Hexboard generator library.
//!
//! Builds hex-grid board topologies, their adjacency indices, and randomized
//! resource/chit layouts under togglable adjacency rules. Rendering and UI
//! concerns live in consumers of this crate; everything here is pure,
//! synchronous computation over immutable inputs.

pub mod board;
pub mod generate;
pub mod rules;

pub use board::{
    build_adjacency, disk_topology, expanded_topology, select_board_size, AdjacencyIndex,
    AxialCoord, BoardSize, BoardTopology, ParseSizeError, Resource, Tile, TokenPool,
};
pub use generate::{generate, generate_bounded, NoValidLayoutError, DEFAULT_MAX_ATTEMPTS};
pub use rules::{is_valid, ConstraintSet};
