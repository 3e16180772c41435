//! Demo mode steering
//!
//! Picks the ball closest to the bottom and nudges the cup under it. Used by
//! the host driver when there are no physical buttons to read.

use super::state::{Ball, GameState, InputSample};
use crate::config::GameConfig;

/// The ball that will reach the cup first (lowest on screen)
pub fn most_urgent_ball(state: &GameState) -> Option<&Ball> {
    state
        .balls
        .iter()
        .filter(|b| !b.collided)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Controls that move the cup's center toward the most urgent ball
pub fn steer(state: &GameState, config: &GameConfig) -> InputSample {
    let Some(ball) = most_urgent_ball(state) else {
        return InputSample::NONE;
    };

    let cup_center = state.cup_position as f32 + config.cup_width as f32 / 2.0;
    let offset = ball.pos.x - cup_center;
    // Dead zone of half a step stops the cup from jittering around the target
    let dead_zone = config.cup_speed as f32 / 2.0;

    if offset < -dead_zone {
        InputSample::left()
    } else if offset > dead_zone {
        InputSample::right()
    } else {
        InputSample::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rgb;
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_idle_without_balls() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 0);
        assert_eq!(steer(&state, &config), InputSample::NONE);
    }

    #[test]
    fn test_follows_lowest_ball() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        // Cup center at 135
        state.push_ball(Vec2::new(220.0, 10.0), 10.0, Rgb(0, 255, 0));
        state.push_ball(Vec2::new(20.0, 150.0), 10.0, Rgb(0, 255, 0));
        assert_eq!(steer(&state, &config), InputSample::left());

        state.balls[1].pos.y = 5.0;
        assert_eq!(steer(&state, &config), InputSample::right());
    }

    #[test]
    fn test_holds_still_when_aligned() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        state.push_ball(Vec2::new(137.0, 100.0), 10.0, Rgb(0, 255, 0));
        assert_eq!(steer(&state, &config), InputSample::NONE);
    }

    #[test]
    fn test_autopilot_catches_balls() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut missed = 0;

        for i in 0..2000u64 {
            let input = steer(&state, &config);
            missed += tick(&mut state, &config, input, i * 30).missed();
        }

        assert!(state.score > 0);
        assert!(state.score as usize > missed);
    }
}
