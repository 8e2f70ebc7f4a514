//! Incremental A* pathfinding over pathstep grids.
//!
//! Unlike a run-to-completion search, [`AstarStepper`] advances exactly one
//! node expansion per [`step`](AstarStepper::step) call, so a caller can
//! interleave search progress with rendering or timing. Costs, predecessors
//! and the final route are written into the [`Grid`](pathstep_core::Grid)
//! tiles, where any observer can read them between steps.
//!
//! - [`euclidean`]: the integer distance used for both `g` and `h` costs
//! - [`Neighbors`] / [`neighbors`]: fixed-order 8-way adjacency
//! - [`AstarStepper`]: the search state machine

mod distance;
mod neighbors;
mod stepper;

pub use distance::euclidean;
pub use neighbors::{Neighbors, explorable, neighbors};
pub use stepper::{AstarStepper, SearchFault, SearchState, StepOutcome};
