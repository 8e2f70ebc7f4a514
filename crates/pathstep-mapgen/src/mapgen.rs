//! Drunk-walk map generation.
//!
//! The map starts as solid rock. A walker drops onto a random interior
//! cell, which becomes the start, and staggers around for `N * N` steps,
//! carving open floor wherever it lands. Wherever it stops becomes the
//! goal, so the walk itself is a witness path from start to goal.

use log::debug;
use pathstep_core::{Grid, Point, TileState};
use rand::{Rng, RngExt};

/// Trait for choosing the next candidate cell during a random walk.
pub trait RandomWalker {
    /// Given a position `p`, return a random candidate using `rng`. The
    /// candidate may be off the grid or equal to `p`; the generator
    /// rejects what it cannot use.
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point;
}

/// Picks `dx` and `dy` independently from `{-1, 0, 1}`, so all nine cells
/// of the 3x3 block (including staying put) are equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct MooreWalker;

impl RandomWalker for MooreWalker {
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point {
        let dx = rng.random_range(-1..=1);
        let dy = rng.random_range(-1..=1);
        p.shift(dx, dy)
    }
}

/// Carve a drunk-walk map into `grid` and return `(start, goal)`.
///
/// Every tile's state is overwritten; costs are left alone. See
/// [`drunk_walk`] for the algorithm.
pub fn generate<R: Rng>(grid: &mut Grid, rng: &mut R) -> (Point, Point) {
    drunk_walk(grid, &MooreWalker, rng)
}

/// Drunk-walk carving with a custom walker.
///
/// 1. Fill the grid with obstacles.
/// 2. Pick a start uniformly from `[1, N-1)` on both axes.
/// 3. Take `N * N` steps. A candidate off the grid or equal to the start
///    is rejected and the step is spent in place; otherwise the walker
///    moves there and the cell becomes open floor.
/// 4. The final position becomes the goal. If the walker never moved the
///    goal overwrites the start.
///
/// # Panics
///
/// If the grid is smaller than 3x3, which leaves no interior for the start.
pub fn drunk_walk<R: Rng>(
    grid: &mut Grid,
    walker: &impl RandomWalker,
    rng: &mut R,
) -> (Point, Point) {
    let n = grid.dimension();
    assert!(n >= 3, "drunk walk needs a grid of at least 3x3, got {n}x{n}");

    grid.fill(TileState::Obstacle);

    let start = Point::new(rng.random_range(1..n - 1), rng.random_range(1..n - 1));
    grid.set_state(start, TileState::Start);

    let bounds = grid.bounds();
    let mut current = start;
    let mut carved = 0usize;

    let steps = grid.len();
    for _ in 0..steps {
        let next = walker.neighbor(current, rng);
        if !bounds.contains(next) || next == start {
            continue;
        }
        current = next;
        if grid.state(current) == Some(TileState::Obstacle) {
            carved += 1;
        }
        grid.set_state(current, TileState::Unexplored);
    }

    let goal = current;
    grid.set_state(goal, TileState::End);

    debug!("drunk walk on {n}x{n}: start {start}, goal {goal}, {carved} cells carved");
    (start, goal)
}

/// Map generator owning its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a drunk-walk map with the default [`MooreWalker`].
    pub fn drunk_walk(&mut self, grid: &mut Grid) -> (Point, Point) {
        generate(grid, &mut self.rng)
    }

    /// Carve a drunk-walk map with a custom walker.
    pub fn drunk_walk_with(
        &mut self,
        grid: &mut Grid,
        walker: &impl RandomWalker,
    ) -> (Point, Point) {
        drunk_walk(grid, walker, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathstep_paths::neighbors;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    struct StepRight;

    impl RandomWalker for StepRight {
        fn neighbor(&self, p: Point, _rng: &mut impl Rng) -> Point {
            p.shift(1, 0)
        }
    }

    struct Stuck;

    impl RandomWalker for Stuck {
        fn neighbor(&self, p: Point, _rng: &mut impl Rng) -> Point {
            p
        }
    }

    fn reachable(grid: &Grid, from: Point) -> HashSet<Point> {
        let mut seen = HashSet::from([from]);
        let mut stack = vec![from];
        while let Some(p) = stack.pop() {
            for n in neighbors(grid, p) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn test_start_is_interior_and_goal_is_connected() {
        for n in [3, 5, 16, 25] {
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut g = Grid::new(n, 10);
                let (start, goal) = generate(&mut g, &mut rng);

                assert!((1..n - 1).contains(&start.x), "start {start} on the rim");
                assert!((1..n - 1).contains(&start.y), "start {start} on the rim");
                assert!(g.contains(goal));
                assert_eq!(g.state(goal), Some(TileState::End));
                if start != goal {
                    assert_eq!(g.state(start), Some(TileState::Start));
                    assert_eq!(g.count(TileState::Start), 1);
                }
                assert_eq!(g.count(TileState::End), 1);
                assert!(reachable(&g, start).contains(&goal), "n={n} seed={seed}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_map() {
        let mut a = Grid::new(16, 10);
        let mut b = Grid::new(16, 10);
        let ra = generate(&mut a, &mut StdRng::seed_from_u64(7));
        let rb = generate(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_walk_leaves_rock_behind() {
        let mut g = Grid::new(25, 10);
        let mut mg = MapGen::new(StdRng::seed_from_u64(3));
        mg.drunk_walk(&mut g);
        let open = g.count(TileState::Unexplored);
        assert!(open > 0);
        assert!(g.count(TileState::Obstacle) > 0);
        assert_eq!(open + g.count(TileState::Obstacle) + 2, g.len());
    }

    #[test]
    fn test_rejected_steps_keep_position() {
        let mut g = Grid::new(8, 10);
        let mut mg = MapGen::new(StdRng::seed_from_u64(11));
        let (start, goal) = mg.drunk_walk_with(&mut g, &StepRight);
        // The walker runs into the east wall and stays there.
        assert_eq!(goal, Point::new(7, start.y));
        for x in start.x + 1..7 {
            assert_eq!(g.state(Point::new(x, start.y)), Some(TileState::Unexplored));
        }
        assert_eq!(g.count(TileState::Unexplored), (6 - start.x) as usize);
    }

    #[test]
    fn test_goal_may_coincide_with_start() {
        let mut g = Grid::new(5, 10);
        let (start, goal) = drunk_walk(&mut g, &Stuck, &mut StdRng::seed_from_u64(0));
        assert_eq!(start, goal);
        assert_eq!(g.state(goal), Some(TileState::End));
        assert_eq!(g.count(TileState::Obstacle), 24);
    }

    #[test]
    #[should_panic(expected = "at least 3x3")]
    fn test_tiny_grid_panics() {
        let mut g = Grid::new(2, 10);
        generate(&mut g, &mut rand::rng());
    }
}
