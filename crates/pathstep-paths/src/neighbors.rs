use pathstep_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the 8 cells of the Moore neighbourhood of a grid point,
/// filtered by a predicate. The order is fixed: rows top to bottom
/// (`dy = -1, 0, 1`), and within a row left to right. The search relies on
/// it for reproducible traces.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

/// Whether the search may enter `p`: on the grid and not an obstacle.
#[inline]
pub fn explorable(grid: &Grid, p: Point) -> bool {
    grid.state(p).is_some_and(|s| s.is_walkable())
}

/// Explorable neighbors of `p` in the fixed [`Neighbors`] order.
///
/// An empty result is legal, e.g. for a walled-in cell.
pub fn neighbors(grid: &Grid, p: Point) -> Vec<Point> {
    Neighbors::new().all(p, |n| explorable(grid, n)).to_vec()
}
