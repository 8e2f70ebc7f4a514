//! Map generation for pathstep grids.
//!
//! - [`mapgen`]: drunk-walk carving ([`generate`], [`MapGen`])
//! - [`layout`]: fixed ASCII maps ([`Layout`])

pub mod layout;
pub mod mapgen;

pub use layout::{Layout, LayoutError};
pub use mapgen::{MapGen, MooreWalker, RandomWalker, drunk_walk, generate};
