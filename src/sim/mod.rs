//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as an argument, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod frame;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CupRect, check_collision};
pub use frame::{BallSprite, RenderRequest, cup_rect, score_label};
pub use spawn::{spawn_due, spawn_if_due};
pub use state::{Ball, GameState, InputSample, Rgb};
pub use tick::{GameEvent, TickReport, step, tick};
