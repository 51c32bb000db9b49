//! The playing surface: tiles and the grid that owns them.
//!
//! - `tile`: a single cell and its Down/Up/Matched state machine
//! - `grid`: the fixed-size tile array and the population algorithm

pub mod tile;
pub mod grid;

pub use tile::{Tile, TileEvent, TileId, TileState};
pub use grid::Grid;
