//! The [`Grid`] type: a square arena of [`Tile`]s addressed by coordinates.
//!
//! Tiles are stored row-major in a flat `Vec`. The grid is the single owner
//! of its tiles; callers get borrows only, and search links between tiles
//! are plain coordinates.

use std::ops::{Index, IndexMut};

use crate::geom::{Point, Range};
use crate::tile::{Tile, TileState};

/// A fixed-size `N x N` grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimension: i32,
    world_scale: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of `dimension x dimension` unexplored tiles whose
    /// positions are their coordinates scaled by `world_scale`.
    pub fn new(dimension: i32, world_scale: i32) -> Self {
        let dimension = dimension.max(0);
        let tiles = Range::square(dimension)
            .iter()
            .map(|p| Tile::new(p, world_scale))
            .collect();
        Self {
            dimension,
            world_scale,
            tiles,
        }
    }

    /// Side length `N`.
    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Multiplier from coordinates to positions.
    #[inline]
    pub fn world_scale(&self) -> i32 {
        self.world_scale
    }

    /// The range `[0, N) x [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.dimension)
    }

    /// Number of tiles (`N * N`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.dimension as usize) + (p.x as usize))
    }

    /// Convert a flat index back to coordinates.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let n = self.dimension as usize;
        Point::new((idx % n) as i32, (idx / n) as i32)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Tile> {
        self.idx(p).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at `p`.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.idx(p).map(|i| &mut self.tiles[i])
    }

    /// State of the tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<TileState> {
        self.at(p).map(|t| t.state)
    }

    /// Set the state of the tile at `p`. Does nothing if out of bounds.
    pub fn set_state(&mut self, p: Point, state: TileState) {
        if let Some(t) = self.at_mut(p) {
            t.state = state;
        }
    }

    /// Set every tile to `state`.
    pub fn fill(&mut self, state: TileState) {
        for t in &mut self.tiles {
            t.state = state;
        }
    }

    /// Count tiles in the given state.
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Coordinates of the first tile (row-major) in the given state.
    pub fn find(&self, state: TileState) -> Option<Point> {
        self.tiles
            .iter()
            .find(|t| t.state == state)
            .map(|t| t.coordinates)
    }

    /// Clear costs and predecessors on every tile, keeping states.
    pub fn reset_search(&mut self) {
        for t in &mut self.tiles {
            t.reset_search();
        }
    }

    /// Row-major iterator over all tiles.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if `p` is outside the grid, like slice indexing.
impl Index<Point> for Grid {
    type Output = Tile;

    fn index(&self, p: Point) -> &Tile {
        match self.idx(p) {
            Some(i) => &self.tiles[i],
            None => panic!("point {p} outside grid of dimension {}", self.dimension),
        }
    }
}

impl IndexMut<Point> for Grid {
    fn index_mut(&mut self, p: Point) -> &mut Tile {
        match self.idx(p) {
            Some(i) => &mut self.tiles[i],
            None => panic!("point {p} outside grid of dimension {}", self.dimension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(5, 10);
        assert_eq!(g.dimension(), 5);
        assert_eq!(g.world_scale(), 10);
        assert_eq!(g.len(), 25);
        assert_eq!(g.count(TileState::Unexplored), 25);
    }

    #[test]
    fn test_tiles_know_their_coordinates() {
        let g = Grid::new(4, 10);
        for p in g.bounds() {
            let t = g.at(p).unwrap();
            assert_eq!(t.coordinates, p);
            assert_eq!(t.position, p * 10);
        }
    }

    #[test]
    fn test_idx_point_round_trip() {
        let g = Grid::new(7, 1);
        for i in 0..g.len() {
            assert_eq!(g.idx(g.point(i)), Some(i));
        }
        assert_eq!(g.idx(Point::new(7, 0)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn test_set_state_and_at() {
        let mut g = Grid::new(4, 10);
        let p = Point::new(2, 3);
        g.set_state(p, TileState::Obstacle);
        assert_eq!(g.state(p), Some(TileState::Obstacle));
        assert_eq!(g.state(Point::new(0, 0)), Some(TileState::Unexplored));
        assert_eq!(g.state(Point::new(10, 10)), None);
        // Out of bounds writes are ignored.
        g.set_state(Point::new(-1, 0), TileState::Start);
        assert_eq!(g.count(TileState::Start), 0);
    }

    #[test]
    fn test_fill_count_find() {
        let mut g = Grid::new(5, 10);
        g.fill(TileState::Obstacle);
        assert_eq!(g.count(TileState::Obstacle), 25);
        assert_eq!(g.find(TileState::End), None);
        g.set_state(Point::new(3, 1), TileState::End);
        g.set_state(Point::new(1, 2), TileState::End);
        assert_eq!(g.count(TileState::Obstacle), 23);
        assert_eq!(g.find(TileState::End), Some(Point::new(3, 1)));
    }

    #[test]
    fn test_index_by_point() {
        let mut g = Grid::new(3, 10);
        g[Point::new(1, 2)].h_cost = 5;
        assert_eq!(g[Point::new(1, 2)].h_cost, 5);
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_index_out_of_bounds_panics() {
        let g = Grid::new(3, 10);
        let _ = &g[Point::new(3, 0)];
    }

    #[test]
    fn test_reset_search_keeps_layout() {
        let mut g = Grid::new(3, 10);
        g.set_state(Point::new(1, 1), TileState::Obstacle);
        if let Some(t) = g.at_mut(Point::new(0, 0)) {
            t.g_cost = 0;
            t.predecessor = Some(Point::new(1, 0));
        }
        g.reset_search();
        assert_eq!(g.state(Point::new(1, 1)), Some(TileState::Obstacle));
        assert!(g.iter().all(|t| !t.is_reached() && t.predecessor.is_none()));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 10);
        g.set_state(Point::new(2, 0), TileState::Obstacle);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
