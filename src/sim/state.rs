//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, including the RNG stream, so
//! a cloned state replays identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::config::GameConfig;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Logical control levels sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSample {
    pub move_left: bool,
    pub move_right: bool,
    /// Read every tick, no effect on the simulation
    pub reserved_a: bool,
    /// Read every tick, no effect on the simulation
    pub reserved_b: bool,
}

impl InputSample {
    pub const NONE: Self = Self {
        move_left: false,
        move_right: false,
        reserved_a: false,
        reserved_b: false,
    };

    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Self::NONE
        }
    }

    /// Net horizontal cup displacement for one tick
    pub fn cup_delta(&self, cup_speed: i32) -> i32 {
        let mut delta = 0;
        if self.move_left {
            delta -= cup_speed;
        }
        if self.move_right {
            delta += cup_speed;
        }
        delta
    }
}

/// A falling ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Center position; y grows downward
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Set by the collision pass, removed in the same tick
    pub collided: bool,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            pos,
            radius,
            color,
            collided: false,
        }
    }

    /// Advance one tick of fall
    pub fn fall(&mut self, speed: f32) {
        self.pos.y += speed;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Left edge of the cup
    pub cup_position: i32,
    /// Top edge of the cup, fixed at creation
    cup_y: i32,
    /// Active balls in spawn order
    pub balls: Vec<Ball>,
    /// When the most recent ball was spawned
    pub last_spawn_time: Millis,
    /// Ticks completed (informational)
    pub frame_count: u64,
    /// Balls caught
    pub score: u32,
    /// Controls as sampled on the latest tick
    pub input: InputSample,
    /// Spawn position stream
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh game with the cup centered and the spawn timer starting at `now`
    pub fn new(config: &GameConfig, now: Millis) -> Self {
        let centered = (config.surface_width / 2) as i32;
        Self {
            cup_position: centered.clamp(0, config.max_cup_position()),
            cup_y: config.cup_y(),
            balls: Vec::new(),
            last_spawn_time: now,
            frame_count: 0,
            score: 0,
            input: InputSample::default(),
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
        }
    }

    pub fn cup_y(&self) -> i32 {
        self.cup_y
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Insert a ball directly (tests, replays)
    pub fn push_ball(&mut self, pos: Vec2, radius: f32, color: Rgb) -> u32 {
        let id = self.next_entity_id();
        self.balls.push(Ball::new(id, pos, radius, color));
        id
    }

    /// Move the cup by `delta` and clamp it onto the surface
    pub fn move_cup(&mut self, delta: i32, config: &GameConfig) {
        self.cup_position = self
            .cup_position
            .saturating_add(delta)
            .clamp(0, config.max_cup_position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_cup() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1234);
        assert_eq!(state.cup_position, 120);
        assert_eq!(state.cup_y(), 220);
        assert_eq!(state.last_spawn_time, 1234);
        assert!(state.balls.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_wide_cup_starts_in_bounds() {
        let config = GameConfig {
            cup_width: 200,
            ..Default::default()
        };
        let state = GameState::new(&config, 0);
        assert_eq!(state.cup_position, 40);
    }

    #[test]
    fn test_move_cup_clamps() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);

        state.move_cup(-1000, &config);
        assert_eq!(state.cup_position, 0);

        state.move_cup(i32::MAX, &config);
        assert_eq!(state.cup_position, config.max_cup_position());
    }

    #[test]
    fn test_opposing_controls_cancel() {
        let both = InputSample {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        assert_eq!(both.cup_delta(5), 0);
        assert_eq!(InputSample::left().cup_delta(5), -5);
        assert_eq!(InputSample::right().cup_delta(5), 5);
    }

    #[test]
    fn test_entity_id_wraps_instead_of_overflowing() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        state.next_id = u32::MAX;
        assert_eq!(state.next_entity_id(), u32::MAX);
        assert_eq!(state.next_entity_id(), 0);
        assert_eq!(state.next_entity_id(), 1);
    }

    #[test]
    fn test_entity_ids_increase() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        let a = state.push_ball(Vec2::new(10.0, 0.0), 10.0, Rgb(0, 255, 0));
        let b = state.push_ball(Vec2::new(20.0, 0.0), 10.0, Rgb(0, 255, 0));
        assert!(b > a);
        assert_eq!(state.balls.len(), 2);
    }
}
