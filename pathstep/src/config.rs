//! Engine configuration.

use pathstep_core::UNREACHABLE;

use crate::error::ConfigError;

/// Smallest grid the drunk walk can carve: the start needs an interior.
pub const MIN_DIMENSION: i32 = 3;

/// Upper bound on any `f_cost` the search can produce on a
/// `dimension x dimension` grid at `world_scale`, or `None` when it does
/// not fit below the unreached sentinel.
///
/// `step` is an integer no smaller than `1.5 * world_scale`, which covers a
/// diagonal move. A predecessor chain visits each tile at most once, so `g`
/// is bounded by `N² - 1` steps and `h` by `N - 1` of them.
pub fn worst_case_cost(dimension: i32, world_scale: i32) -> Option<i32> {
    let n = i64::from(dimension.max(0));
    let scale = i64::from(world_scale.max(1));
    let step = scale + scale / 2 + 1;
    let steps = n.checked_mul(n)?.checked_add(n)?.checked_sub(2)?.max(0);
    let worst = steps.checked_mul(step)?;
    i32::try_from(worst).ok().filter(|&w| w < UNREACHABLE)
}

/// Tunables for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Side length `N` of the square grid.
    pub dimension: i32,
    /// Multiplier from tile coordinates to positions. Costs are measured
    /// between positions, so this sets the cost of a straight step.
    pub world_scale: i32,
    /// Seed for map generation. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: 16,
            world_scale: 10,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_world_scale(mut self, world_scale: i32) -> Self {
        self.world_scale = world_scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_DIMENSION {
            return Err(ConfigError::DimensionTooSmall(self.dimension));
        }
        if self.world_scale < 1 {
            return Err(ConfigError::InvalidWorldScale(self.world_scale));
        }
        if worst_case_cost(self.dimension, self.world_scale).is_none() {
            return Err(ConfigError::CostOverflow {
                dimension: self.dimension,
                world_scale: self.world_scale,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = EngineConfig::default();
        assert_eq!(c.dimension, 16);
        assert_eq!(c.world_scale, 10);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builders() {
        let c = EngineConfig::default()
            .with_dimension(25)
            .with_world_scale(4)
            .with_seed(99);
        assert_eq!(
            c,
            EngineConfig {
                dimension: 25,
                world_scale: 4,
                seed: Some(99)
            }
        );
    }

    #[test]
    fn rejects_small_grids_and_bad_scale() {
        assert_eq!(
            EngineConfig::default().with_dimension(2).validate(),
            Err(ConfigError::DimensionTooSmall(2))
        );
        assert!(EngineConfig::default().with_dimension(3).validate().is_ok());
        assert_eq!(
            EngineConfig::default().with_world_scale(0).validate(),
            Err(ConfigError::InvalidWorldScale(0))
        );
    }

    #[test]
    fn rejects_costs_that_overflow() {
        let huge = EngineConfig::default().with_world_scale(200_000_000);
        assert_eq!(
            huge.validate(),
            Err(ConfigError::CostOverflow {
                dimension: 16,
                world_scale: 200_000_000
            })
        );

        let c = EngineConfig::default().with_dimension(25);
        assert!(c.with_world_scale(2_000_000).validate().is_ok());
        assert!(c.with_world_scale(10_000_000).validate().is_err());
        assert!(c.with_dimension(50_000).with_world_scale(1).validate().is_err());
    }

    #[test]
    fn worst_case_cost_bounds() {
        // 3x3 at scale 10: (9 + 3 - 2) steps of 16.
        assert_eq!(worst_case_cost(3, 10), Some(160));
        assert_eq!(worst_case_cost(i32::MAX, i32::MAX), None);
    }
}
