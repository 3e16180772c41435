//! Ball Catch - a falling-ball catching game for a small handheld display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, game state)
//! - `platform`: Capability interfaces for input, rendering and time, plus host adapters
//! - `game_loop`: The controller that drives one tick at a time through the collaborators
//! - `config`: Data-driven game tuning with startup validation

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{CollaboratorFault, ConfigError, GameError};
pub use game_loop::GameLoop;

/// Timestamp in milliseconds on a monotonic clock
pub type Millis = u64;

/// Default tuning constants (Pico Explorer sized surface)
pub mod consts {
    /// Display surface dimensions
    pub const SURFACE_WIDTH: u32 = 240;
    pub const SURFACE_HEIGHT: u32 = 240;

    /// Cup defaults - wider makes the game easier
    pub const CUP_WIDTH: u32 = 30;
    pub const CUP_HEIGHT: u32 = 20;
    /// Cup movement per tick while a direction is held
    pub const CUP_SPEED: i32 = 5;

    /// Ball defaults - bigger makes the game easier
    pub const BALL_RADIUS: u32 = 10;
    /// Fall distance per tick (frame-rate coupled)
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALLS_PER_SECOND: f32 = 1.0;

    /// Balls this close to the bottom edge are considered gone
    pub const EXIT_MARGIN: u32 = 2;

    /// Sleep between ticks
    pub const TICK_INTERVAL_MS: u64 = 30;

    /// Button repeat/hold thresholds for device button pads
    pub const BUTTON_REPEAT_MS: u64 = 30;
    pub const BUTTON_HOLD_MS: u64 = 10_000;
}
