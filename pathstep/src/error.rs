use pathstep_mapgen::LayoutError;

/// An [`EngineConfig`](crate::EngineConfig) that cannot drive an engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimension {0} is too small, the minimum is 3")]
    DimensionTooSmall(i32),
    #[error("world scale must be at least 1, got {0}")]
    InvalidWorldScale(i32),
    #[error(
        "a {dimension}x{dimension} grid at world scale {world_scale} can produce path costs beyond i32"
    )]
    CostOverflow { dimension: i32, world_scale: i32 },
}

/// Anything that can go wrong while building an [`Engine`](crate::Engine).
///
/// Search invariant violations are not here: they panic, see
/// [`SearchFault`](pathstep_paths::SearchFault).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}
