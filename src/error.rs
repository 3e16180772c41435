//! Error types
//!
//! Configuration problems are fatal at startup. Collaborator faults come from
//! the input/render adapters and are handed to whoever drives the tick.

use std::io;

/// Top-level error for the game loop and its host driver.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collaborator fault: {0}")]
    Collaborator(#[from] CollaboratorFault),
}

/// Invalid tuning detected while loading or validating a [`crate::GameConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("balls_per_second must be a positive finite number, got {0}")]
    InvalidSpawnRate(f32),

    #[error("spawn interval rounds to 0 ms at {0} balls per second")]
    SpawnIntervalTooShort(f32),

    #[error("ball_speed must be a positive finite number, got {0}")]
    InvalidBallSpeed(f32),

    #[error("surface must be non-empty, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },

    #[error("surface {width}x{height} exceeds the addressable range")]
    SurfaceTooLarge { width: u32, height: u32 },

    #[error("exit margin {margin} leaves no room on a surface {height} tall")]
    ExitMarginTooLarge { margin: u32, height: u32 },

    #[error("cup must be non-empty, got {width}x{height}")]
    EmptyCup { width: u32, height: u32 },

    #[error("cup width {cup} exceeds surface width {surface}")]
    CupTooWide { cup: u32, surface: u32 },

    #[error("cup height {cup} exceeds surface height {surface}")]
    CupTooTall { cup: u32, surface: u32 },

    #[error("ball radius {radius} does not fit a surface {surface} wide")]
    BallTooLarge { radius: u32, surface: u32 },

    #[error("ball radius must be at least 1")]
    ZeroBallRadius,

    #[error("tick_interval_ms must be at least 1")]
    ZeroTickInterval,

    #[error("cup_speed must not be negative, got {0}")]
    NegativeCupSpeed(i32),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by an injected capability (input, renderer).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorFault {
    #[error("input source failed: {0}")]
    Input(String),

    #[error("renderer failed: {0}")]
    Render(String),
}
