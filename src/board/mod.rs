//! Playing surfaces.
//!
//! - `Board`: the validated ring of tiles used by the economic game
//! - `TileDescriptor`: flat factory input for building a board
//! - `Track`: the straight snakes-and-ladders track used by the race game

pub mod descriptor;
pub mod layout;
pub mod tile;
pub mod track;

pub use descriptor::{build_board, classic_board, classic_descriptors, TileDescriptor};
pub use layout::Board;
pub use tile::{BoardCorner, CornerKind, Tile};
pub use track::{Jump, Track};
