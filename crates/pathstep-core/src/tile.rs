//! [`Tile`] and [`TileState`]: one grid cell plus its search metadata.

use crate::geom::Point;

/// Sentinel `g_cost` for a tile the search has not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// What a tile currently is, as far as the search and any renderer care.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    /// Open floor the search has not routed through.
    #[default]
    Unexplored,
    /// Wall. Never enters the open or closed set.
    Obstacle,
    Start,
    End,
    /// Part of the reconstructed route, endpoints included.
    Route,
}

impl TileState {
    /// Whether the tile blocks movement.
    #[inline]
    pub fn is_obstacle(self) -> bool {
        self == Self::Obstacle
    }

    /// Whether the search may step onto the tile.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !self.is_obstacle()
    }

    /// Single-character representation used by ASCII layouts and the
    /// terminal renderer.
    pub fn glyph(self) -> char {
        match self {
            Self::Unexplored => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Route => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Unexplored),
            '#' => Some(Self::Obstacle),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '*' => Some(Self::Route),
            _ => None,
        }
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Grid coordinates, each in `[0, N)`.
    pub coordinates: Point,
    /// `coordinates * world_scale`; distances are measured here.
    pub position: Point,
    pub state: TileState,
    /// Cost of the best known path from the start.
    pub g_cost: i32,
    /// Heuristic distance to the goal; 0 until first visited.
    pub h_cost: i32,
    /// The tile this one was reached from. Coordinates only, never owning.
    pub predecessor: Option<Point>,
}

impl Tile {
    /// Create an unexplored, unreached tile.
    pub fn new(coordinates: Point, world_scale: i32) -> Self {
        Self {
            coordinates,
            position: coordinates * world_scale,
            state: TileState::Unexplored,
            g_cost: UNREACHABLE,
            h_cost: 0,
            predecessor: None,
        }
    }

    /// `g_cost + h_cost`, saturating at [`UNREACHABLE`].
    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// Whether the search has assigned this tile a finite `g_cost`.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.g_cost != UNREACHABLE
    }

    /// Forget costs and predecessor; `state` is left alone.
    pub fn reset_search(&mut self) {
        self.g_cost = UNREACHABLE;
        self.h_cost = 0;
        self.predecessor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_unreached() {
        let t = Tile::new(Point::new(2, 3), 10);
        assert_eq!(t.position, Point::new(20, 30));
        assert_eq!(t.state, TileState::Unexplored);
        assert_eq!(t.g_cost, UNREACHABLE);
        assert_eq!(t.h_cost, 0);
        assert!(!t.is_reached());
        assert_eq!(t.predecessor, None);
    }

    #[test]
    fn f_cost_saturates() {
        let mut t = Tile::new(Point::ZERO, 10);
        t.h_cost = 42;
        assert_eq!(t.f_cost(), UNREACHABLE);
        t.g_cost = 14;
        assert_eq!(t.f_cost(), 56);
    }

    #[test]
    fn reset_search_keeps_state() {
        let mut t = Tile::new(Point::new(1, 1), 10);
        t.state = TileState::Route;
        t.g_cost = 14;
        t.h_cost = 7;
        t.predecessor = Some(Point::ZERO);
        t.reset_search();
        assert_eq!(t.state, TileState::Route);
        assert_eq!(t.g_cost, UNREACHABLE);
        assert_eq!(t.h_cost, 0);
        assert_eq!(t.predecessor, None);
    }

    #[test]
    fn glyph_round_trip() {
        for s in [
            TileState::Unexplored,
            TileState::Obstacle,
            TileState::Start,
            TileState::End,
            TileState::Route,
        ] {
            assert_eq!(TileState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(TileState::from_glyph('x'), None);
    }
}
