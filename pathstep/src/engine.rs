//! The [`Engine`]: map generation plus an incremental A* search, driven one
//! expansion at a time by the caller.

use log::{debug, info};
use pathstep_core::{Grid, Point, Range};
use pathstep_mapgen::{Layout, MapGen};
use pathstep_paths::{AstarStepper, SearchState, StepOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::view::{SearchStats, TileView};

/// Where each fresh map comes from.
#[derive(Debug, Clone)]
enum MapSource {
    DrunkWalk,
    /// A pre-stamped grid cloned on every reset.
    Fixed {
        template: Grid,
        start: Point,
        goal: Point,
    },
}

/// A grid, its map generator and the search running over it.
///
/// The engine is a plain state machine. Call [`step`](Self::step) once per
/// tick until [`is_done`](Self::is_done), read tiles through
/// [`tile_at`](Self::tile_at) in between, and [`reset`](Self::reset) to
/// start over on a new map. Nothing here blocks or spawns threads.
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    source: MapSource,
    mapgen: MapGen<R>,
    grid: Grid,
    stepper: AstarStepper,
}

impl Engine<StdRng> {
    /// Create an engine on a `dimension x dimension` drunk-walk map with
    /// default settings otherwise.
    pub fn new(dimension: i32) -> Result<Self, ConfigError> {
        Self::with_config(EngineConfig::default().with_dimension(dimension))
    }

    /// Create an engine from a full configuration. A configured seed makes
    /// every generated map reproducible.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine that replays a fixed layout instead of generating
    /// maps. The layout decides the dimension; `config.dimension` is
    /// ignored.
    pub fn from_layout(config: EngineConfig, layout: &Layout) -> Result<Self, EngineError> {
        let config = config.with_dimension(layout.dimension());
        config.validate()?;
        let mut template = Grid::new(config.dimension, config.world_scale);
        let (start, goal) = layout.apply(&mut template)?;
        let source = MapSource::Fixed {
            template,
            start,
            goal,
        };
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        Ok(Self::build(config, source, MapGen::new(rng)))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine drawing maps from a caller-supplied random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, MapSource::DrunkWalk, MapGen::new(rng)))
    }

    fn build(config: EngineConfig, source: MapSource, mut mapgen: MapGen<R>) -> Self {
        let (mut grid, start, goal) = fresh_map(&config, &source, &mut mapgen);
        let stepper = AstarStepper::new(&mut grid, start, goal);
        info!(
            "engine ready: {0}x{0} grid, start {start}, goal {goal}",
            config.dimension
        );
        Self {
            config,
            source,
            mapgen,
            grid,
            stepper,
        }
    }

    /// Discard the current map and search, build a new map and restart
    /// the search on it. Returns the new `(start, goal)`.
    pub fn reset(&mut self) -> (Point, Point) {
        let (mut grid, start, goal) = fresh_map(&self.config, &self.source, &mut self.mapgen);
        self.stepper = AstarStepper::new(&mut grid, start, goal);
        self.grid = grid;
        debug!("reset: start {start}, goal {goal}");
        (start, goal)
    }

    /// Advance the search by one expansion, or finish it once the goal is
    /// selected. The finishing call expands nothing, so a route found after
    /// `k` expansions takes `k + 1` calls.
    ///
    /// # Panics
    ///
    /// When the search invariants break; see
    /// [`AstarStepper::step`](pathstep_paths::AstarStepper::step).
    pub fn step(&mut self) -> StepOutcome {
        self.stepper.step(&mut self.grid)
    }

    /// Step until the route is found and return it.
    pub fn run_to_end(&mut self) -> &[Point] {
        while !self.stepper.is_done() {
            self.stepper.step(&mut self.grid);
        }
        self.stepper.route()
    }

    /// Whether the route has been found.
    pub fn is_done(&self) -> bool {
        self.stepper.is_done()
    }

    pub fn state(&self) -> SearchState {
        self.stepper.state()
    }

    /// Start to goal, both included. Empty until found.
    pub fn route(&self) -> &[Point] {
        self.stepper.route()
    }

    pub fn start(&self) -> Point {
        self.stepper.start()
    }

    pub fn goal(&self) -> Point {
        self.stepper.goal()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Observation surface
    // -----------------------------------------------------------------------

    /// Side length `N` of the grid.
    pub fn dimension(&self) -> i32 {
        self.grid.dimension()
    }

    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    /// Read-only access to the tiles.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot of the tile at `(x, y)`, or `None` off the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileView> {
        self.grid
            .at(Point::new(x, y))
            .map(|t| TileView::new(t, &self.stepper))
    }

    /// Row-major snapshots of every tile.
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.grid.iter().map(|t| TileView::new(t, &self.stepper))
    }

    pub fn in_open(&self, x: i32, y: i32) -> bool {
        self.stepper.in_open(Point::new(x, y))
    }

    pub fn in_closed(&self, x: i32, y: i32) -> bool {
        self.stepper.in_closed(Point::new(x, y))
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats::new(&self.stepper)
    }

    /// One line per grid row with each tile's [`TileView::cost_label`],
    /// separated by spaces.
    pub fn cost_rows(&self) -> Vec<String> {
        let n = self.dimension().max(1) as usize;
        let labels: Vec<String> = self.tiles().map(|v| v.cost_label()).collect();
        labels.chunks(n).map(|row| row.join(" ")).collect()
    }
}

fn fresh_map<R: Rng>(
    config: &EngineConfig,
    source: &MapSource,
    mapgen: &mut MapGen<R>,
) -> (Grid, Point, Point) {
    match source {
        MapSource::DrunkWalk => {
            let mut grid = Grid::new(config.dimension, config.world_scale);
            let (start, goal) = mapgen.drunk_walk(&mut grid);
            (grid, start, goal)
        }
        MapSource::Fixed {
            template,
            start,
            goal,
        } => (template.clone(), *start, *goal),
    }
}
