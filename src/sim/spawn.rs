//! Spawn scheduling
//!
//! At most one ball per tick. Missed intervals are not caught up.

use glam::Vec2;
use rand::Rng;

use super::state::GameState;
use crate::Millis;
use crate::config::GameConfig;

/// Whether more than one spawn interval has passed since the last spawn
///
/// Compares the absolute difference, so a clock that steps backwards by more
/// than an interval also triggers a spawn.
#[inline]
pub fn spawn_due(last_spawn: Millis, now: Millis, interval_ms: u64) -> bool {
    now.abs_diff(last_spawn) > interval_ms
}

/// Spawn one ball at the top of the surface if the interval has elapsed.
///
/// Returns the ID of the new ball.
pub fn spawn_if_due(state: &mut GameState, config: &GameConfig, now: Millis) -> Option<u32> {
    if !spawn_due(state.last_spawn_time, now, config.spawn_interval_ms()) {
        return None;
    }

    state.last_spawn_time = now;

    let radius = config.ball_radius;
    let x = state.rng.random_range(radius..=config.surface_width - radius);
    let id = state.push_ball(Vec2::new(x as f32, 0.0), radius as f32, config.ball_color);
    log::trace!("Spawned ball {} at x={}", id, x);
    Some(id)
}
