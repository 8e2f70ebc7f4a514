//! **pathstep**: step-by-step A* pathfinding on drunk-walk generated maps.
//!
//! [`Engine`] ties the pieces together: it generates an obstacle layout
//! with a random walk, then searches it with A* one expansion per
//! [`Engine::step`] call so a caller can render or throttle between steps.
//!
//! ```no_run
//! use pathstep::{Engine, EngineConfig};
//!
//! let mut engine = Engine::with_config(EngineConfig::default().with_seed(7))?;
//! while !engine.is_done() {
//!     engine.step();
//!     let stats = engine.stats();
//!     println!("{} open, {} closed", stats.open, stats.closed);
//! }
//! println!("route: {:?}", engine.route());
//! # Ok::<(), pathstep::ConfigError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod view;

pub use config::{EngineConfig, MIN_DIMENSION, worst_case_cost};
pub use engine::Engine;
pub use error::{ConfigError, EngineError};
pub use pathstep_core::{Point, TileState};
pub use pathstep_mapgen::Layout;
pub use pathstep_paths::{SearchState, StepOutcome};
pub use view::{SearchStats, TileView};
