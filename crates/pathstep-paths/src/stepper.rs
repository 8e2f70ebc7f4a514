//! Incremental A*: one node expansion per [`AstarStepper::step`] call.

use log::{debug, trace};
use pathstep_core::{Grid, Point, TileState};

use crate::distance::euclidean;
use crate::neighbors::{Neighbors, explorable};

/// Where the search is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    Searching,
    /// Terminal until the stepper is rebuilt.
    RouteFound,
}

/// What a single [`AstarStepper::step`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The tile moved from the open set to the closed set.
    Expanded(Point),
    /// The goal was selected and the route has been marked.
    RouteFound,
    /// The route had already been found; nothing changed.
    AlreadyDone,
}

/// Broken search invariants. These are never returned; the stepper panics
/// with their message because continuing would yield a wrong route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchFault {
    #[error("open set is empty: the search was stepped past exhaustion")]
    OpenSetEmpty,
    #[error("tile {0} has no predecessor while reconstructing the route")]
    MissingPredecessor(Point),
    #[error("tile {0} has no explorable neighbors")]
    NoNeighbors(Point),
    #[error("tile {0} is outside the grid")]
    OutOfBounds(Point),
}

#[cold]
#[track_caller]
fn fault(f: SearchFault) -> ! {
    panic!("{f}")
}

/// Set membership of one tile. A tile is in at most one of the two sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Membership {
    Neither,
    Open,
    Closed,
}

/// The A* state machine for one search over one [`Grid`].
///
/// The stepper owns the open and closed sets; the grid owns the tiles and
/// their costs. Costs, predecessors and route states are written into the
/// grid as the search advances, so any reader of the grid sees the current
/// progress.
#[derive(Debug, Clone)]
pub struct AstarStepper {
    start: Point,
    goal: Point,
    state: SearchState,
    dimension: i32,
    membership: Vec<Membership>,
    // Unordered frontier; `membership` is the source of truth.
    open: Vec<Point>,
    closed_len: usize,
    expansions: usize,
    route: Vec<Point>,
    nbuf: Neighbors,
}

impl AstarStepper {
    /// Begin a search from `start` to `goal` on `grid`.
    ///
    /// Costs and predecessors left over from an earlier search are cleared,
    /// so a grid can be searched again. The open set is seeded with `start`,
    /// and both endpoints get `g_cost = h_cost = 0`. Panics if either
    /// endpoint is off the grid.
    pub fn new(grid: &mut Grid, start: Point, goal: Point) -> Self {
        grid.reset_search();
        for p in [start, goal] {
            match grid.at_mut(p) {
                Some(t) => {
                    t.g_cost = 0;
                    t.h_cost = 0;
                }
                None => fault(SearchFault::OutOfBounds(p)),
            }
        }

        let mut membership = vec![Membership::Neither; grid.len()];
        if let Some(i) = grid.idx(start) {
            membership[i] = Membership::Open;
        }

        Self {
            start,
            goal,
            state: SearchState::Searching,
            dimension: grid.dimension(),
            membership,
            open: vec![start],
            closed_len: 0,
            expansions: 0,
            route: Vec::new(),
            nbuf: Neighbors::new(),
        }
    }

    /// Advance the search by one expansion.
    ///
    /// The goal is recognised when it is *selected* from the open set, not
    /// when it is first discovered as a neighbour. Finding the route
    /// therefore takes one more call than there are expansions: on an open
    /// 3x3 grid from `(0, 0)` to `(2, 2)` the first two calls expand
    /// `(0, 0)` and `(1, 1)`, and the third returns
    /// [`StepOutcome::RouteFound`] with [`expansions`](Self::expansions)
    /// still at 2.
    ///
    /// # Panics
    ///
    /// On a broken invariant (see [`SearchFault`]): stepping with an empty
    /// open set, expanding a tile with no explorable neighbors, or a
    /// predecessor chain that stops short of the start.
    pub fn step(&mut self, grid: &mut Grid) -> StepOutcome {
        debug_assert_eq!(grid.dimension(), self.dimension);

        if self.state == SearchState::RouteFound {
            return StepOutcome::AlreadyDone;
        }

        let current = self.select(grid);

        if current == self.goal {
            self.mark_route(grid);
            self.state = SearchState::RouteFound;
            debug!(
                "route found: {} tiles after {} expansions",
                self.route.len(),
                self.expansions
            );
            return StepOutcome::RouteFound;
        }

        self.close(current);

        let (current_pos, current_g) = {
            let t = &grid[current];
            (t.position, t.g_cost)
        };
        let goal_pos = grid[self.goal].position;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let nbrs = nbuf.all(current, |n| explorable(grid, n));
        if nbrs.is_empty() {
            fault(SearchFault::NoNeighbors(current));
        }

        for &np in nbrs.iter() {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if self.membership[ni] == Membership::Closed {
                continue;
            }

            let n = &mut grid[np];
            n.h_cost = euclidean(n.position, goal_pos);
            let tentative_g = euclidean(n.position, current_pos).saturating_add(current_g);
            let in_open = self.membership[ni] == Membership::Open;

            if tentative_g < n.g_cost || !in_open {
                n.predecessor = Some(current);
                n.g_cost = tentative_g;
                if !in_open {
                    self.membership[ni] = Membership::Open;
                    self.open.push(np);
                }
            }
        }

        self.nbuf = nbuf;
        self.expansions += 1;
        trace!(
            "expanded {current} g={current_g}: open={} closed={}",
            self.open.len(),
            self.closed_len
        );
        StepOutcome::Expanded(current)
    }

    /// Open tile with the lowest `f_cost`. Ties go to the lower `h_cost`,
    /// then to the lower coordinate in row-major order.
    fn select(&self, grid: &Grid) -> Point {
        match self.open.iter().copied().min_by_key(|&p| {
            let t = &grid[p];
            (t.f_cost(), t.h_cost, p)
        }) {
            Some(p) => p,
            None => fault(SearchFault::OpenSetEmpty),
        }
    }

    fn close(&mut self, p: Point) {
        if let Some(pos) = self.open.iter().position(|&q| q == p) {
            self.open.swap_remove(pos);
        }
        if let Some(i) = self.idx(p) {
            self.membership[i] = Membership::Closed;
        }
        self.closed_len += 1;
    }

    /// Walk predecessors from the goal back to the start, marking each tile
    /// (both endpoints included) as [`TileState::Route`].
    fn mark_route(&mut self, grid: &mut Grid) {
        let mut route = Vec::new();
        let mut p = self.goal;
        while p != self.start {
            let t = &mut grid[p];
            t.state = TileState::Route;
            route.push(p);
            p = match t.predecessor {
                Some(q) => q,
                None => fault(SearchFault::MissingPredecessor(p)),
            };
        }
        grid[self.start].state = TileState::Route;
        route.push(self.start);
        route.reverse();
        self.route = route;
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        let n = self.dimension;
        if p.x < 0 || p.y < 0 || p.x >= n || p.y >= n {
            return None;
        }
        Some((p.y as usize) * (n as usize) + (p.x as usize))
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Whether the route has been found.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == SearchState::RouteFound
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` is in the open set.
    pub fn in_open(&self, p: Point) -> bool {
        self.idx(p)
            .is_some_and(|i| self.membership[i] == Membership::Open)
    }

    /// Whether `p` is in the closed set.
    pub fn in_closed(&self, p: Point) -> bool {
        self.idx(p)
            .is_some_and(|i| self.membership[i] == Membership::Closed)
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed_len
    }

    /// Number of completed expansions. The call that finds the route does
    /// not count as one, so [`is_done`](Self::is_done) turns true on the
    /// call after the last expansion, see [`step`](Self::step).
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The route from start to goal, both included. Empty until found.
    pub fn route(&self) -> &[Point] {
        &self.route
    }
}
