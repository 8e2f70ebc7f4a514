//! **pathstep-core**: the grid model shared by the pathstep crates.
//!
//! This crate provides geometry primitives, the [`Tile`] with its search
//! metadata, and the [`Grid`] arena that owns every tile of a map.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Point, Range};
pub use grid::Grid;
pub use tile::{Tile, TileState, UNREACHABLE};
