//! Game tuning
//!
//! Loaded from JSON (missing fields fall back to defaults) and validated once
//! at startup. Speeds are per tick, not per second.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rgb;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "BALL_CATCH_CONFIG";

/// All tunable parameters of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: u32,
    pub surface_height: u32,

    pub cup_width: u32,
    pub cup_height: u32,
    /// Pixels per tick
    pub cup_speed: i32,
    pub cup_color: Rgb,

    pub ball_radius: u32,
    /// Pixels per tick
    pub ball_speed: f32,
    pub balls_per_second: f32,
    pub ball_color: Rgb,

    /// Distance from the bottom edge at which a ball counts as missed
    pub exit_margin: u32,

    pub background: Rgb,
    pub text_color: Rgb,

    /// Host sleep between ticks
    pub tick_interval_ms: u64,

    /// Seed for spawn positions
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cup_width: CUP_WIDTH,
            cup_height: CUP_HEIGHT,
            cup_speed: CUP_SPEED,
            cup_color: Rgb(255, 0, 0),
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            balls_per_second: BALLS_PER_SECOND,
            ball_color: Rgb(0, 255, 0),
            exit_margin: EXIT_MARGIN,
            background: Rgb(40, 40, 40),
            text_color: Rgb(255, 255, 255),
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    /// Load from the given path if it exists, otherwise use defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                log::warn!("Config file {} not found, using defaults", path.display());
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Reject tuning the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if self.surface_width > i32::MAX as u32 || self.surface_height > i32::MAX as u32 {
            return Err(ConfigError::SurfaceTooLarge {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if self.exit_margin >= self.surface_height {
            return Err(ConfigError::ExitMarginTooLarge {
                margin: self.exit_margin,
                height: self.surface_height,
            });
        }
        if self.cup_width == 0 || self.cup_height == 0 {
            return Err(ConfigError::EmptyCup {
                width: self.cup_width,
                height: self.cup_height,
            });
        }
        if self.cup_width > self.surface_width {
            return Err(ConfigError::CupTooWide {
                cup: self.cup_width,
                surface: self.surface_width,
            });
        }
        if self.cup_height > self.surface_height {
            return Err(ConfigError::CupTooTall {
                cup: self.cup_height,
                surface: self.surface_height,
            });
        }
        if self.cup_speed < 0 {
            return Err(ConfigError::NegativeCupSpeed(self.cup_speed));
        }
        if self.ball_radius == 0 {
            return Err(ConfigError::ZeroBallRadius);
        }
        if self.ball_radius.saturating_mul(2) > self.surface_width {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                surface: self.surface_width,
            });
        }
        if !self.ball_speed.is_finite() || self.ball_speed <= 0.0 {
            return Err(ConfigError::InvalidBallSpeed(self.ball_speed));
        }
        if !self.balls_per_second.is_finite() || self.balls_per_second <= 0.0 {
            return Err(ConfigError::InvalidSpawnRate(self.balls_per_second));
        }
        if self.spawn_interval_ms() == 0 {
            return Err(ConfigError::SpawnIntervalTooShort(self.balls_per_second));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Minimum time between two spawns
    pub fn spawn_interval_ms(&self) -> u64 {
        (1000.0 / self.balls_per_second as f64).floor() as u64
    }

    /// Rightmost legal cup position
    pub fn max_cup_position(&self) -> i32 {
        self.surface_width as i32 - self.cup_width as i32
    }

    /// Fixed vertical offset of the cup (flush with the bottom edge)
    pub fn cup_y(&self) -> i32 {
        self.surface_height as i32 - self.cup_height as i32
    }

    /// Balls at or below this line are removed as missed
    pub fn exit_line(&self) -> f32 {
        self.surface_height as f32 - self.exit_margin as f32
    }
}
