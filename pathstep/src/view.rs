//! Read-only projections of engine state for renderers and overlays.

use pathstep_core::{Point, Tile, TileState};
use pathstep_paths::{AstarStepper, SearchState};

/// Snapshot of one tile as an observer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileView {
    pub coordinates: Point,
    pub state: TileState,
    /// `None` until the search reaches the tile.
    pub g_cost: Option<i32>,
    pub h_cost: i32,
    /// `g_cost + h_cost`, `None` while `g_cost` is.
    pub f_cost: Option<i32>,
    pub in_open: bool,
    pub in_closed: bool,
}

impl TileView {
    pub(crate) fn new(tile: &Tile, stepper: &AstarStepper) -> Self {
        let reached = tile.is_reached();
        Self {
            coordinates: tile.coordinates,
            state: tile.state,
            g_cost: reached.then_some(tile.g_cost),
            h_cost: tile.h_cost,
            f_cost: reached.then(|| tile.f_cost()),
            in_open: stepper.in_open(tile.coordinates),
            in_closed: stepper.in_closed(tile.coordinates),
        }
    }

    /// Whether the search has touched this tile at all.
    pub fn is_visited(&self) -> bool {
        self.in_open || self.in_closed
    }

    /// The `f_cost` overlay cell: three zero-padded digits, `000` for tiles
    /// outside both sets, capped at `999`.
    pub fn cost_label(&self) -> String {
        match self.f_cost {
            Some(f) if self.is_visited() => format!("{:03}", f.clamp(0, 999)),
            _ => "000".to_string(),
        }
    }
}

/// Aggregate progress of the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub state: SearchState,
    pub expansions: usize,
    pub open: usize,
    pub closed: usize,
    /// Tiles on the route, endpoints included; 0 until found.
    pub route_len: usize,
}

impl SearchStats {
    pub(crate) fn new(stepper: &AstarStepper) -> Self {
        Self {
            state: stepper.state(),
            expansions: stepper.expansions(),
            open: stepper.open_len(),
            closed: stepper.closed_len(),
            route_len: stepper.route().len(),
        }
    }
}
