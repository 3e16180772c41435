//! Per-tick simulation
//!
//! One call advances the game by exactly one frame: store input, maybe spawn,
//! let every ball fall, move the cup, resolve catches, prune, count the frame.
//! Speeds are per tick, so game speed follows the host's tick cadence.

use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::frame::{RenderRequest, cup_rect};
use super::spawn::spawn_if_due;
use super::state::{GameState, InputSample};
use crate::Millis;
use crate::config::GameConfig;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball appeared at the top edge
    Spawned { id: u32, x: f32 },
    /// A ball landed in the cup (one point)
    Caught { id: u32, x: f32, y: f32 },
    /// A ball left the bottom of the surface
    Missed { id: u32, x: f32 },
}

/// Outcome of a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn spawned(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::Spawned { .. }))
    }

    pub fn caught(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::Caught { .. }))
    }

    pub fn missed(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::Missed { .. }))
    }

    fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    config: &GameConfig,
    input: InputSample,
    now: Millis,
) -> TickReport {
    let mut report = TickReport::default();

    // Input
    state.input = input;

    // Spawn before moving so a new ball already falls this tick
    if let Some(id) = spawn_if_due(state, config, now) {
        if let Some(ball) = state.balls.last() {
            report.events.push(GameEvent::Spawned { id, x: ball.pos.x });
        }
    }

    // Physics
    for ball in &mut state.balls {
        ball.fall(config.ball_speed);
    }

    // Cup (reserved controls are intentionally ignored)
    let delta = state.input.cup_delta(config.cup_speed);
    state.move_cup(delta, config);

    // Collisions
    let cup = cup_rect(state, config);
    for ball in state.balls.iter_mut().filter(|b| !b.collided) {
        if check_collision(ball.pos, ball.radius, &cup) {
            ball.collided = true;
            state.score += 1;
            log::info!("Score! ({})", state.score);
            report.events.push(GameEvent::Caught {
                id: ball.id,
                x: ball.pos.x,
                y: ball.pos.y,
            });
        }
    }

    // Prune: caught balls first, then anything past the exit line
    let exit_line = config.exit_line();
    state.balls.retain(|ball| {
        if ball.collided {
            return false;
        }
        if ball.pos.y >= exit_line {
            log::debug!("Missed ball {} at x={}", ball.id, ball.pos.x);
            report.events.push(GameEvent::Missed {
                id: ball.id,
                x: ball.pos.x,
            });
            return false;
        }
        true
    });

    state.frame_count += 1;

    report
}

/// Pure form of [`tick`]: returns the next state and its frame, leaving `state` untouched
pub fn step(
    state: &GameState,
    config: &GameConfig,
    input: InputSample,
    now: Millis,
) -> (GameState, RenderRequest) {
    let mut next = state.clone();
    tick(&mut next, config, input, now);
    let frame = RenderRequest::capture(&next, config);
    (next, frame)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn input_strategy() -> impl Strategy<Value = InputSample> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(move_left, move_right, reserved_a, reserved_b)| InputSample {
                move_left,
                move_right,
                reserved_a,
                reserved_b,
            },
        )
    }

    fn config_strategy() -> impl Strategy<Value = GameConfig> {
        (
            any::<u64>(),
            1u32..=120,
            1i32..=40,
            prop_oneof![Just(0.5f32), Just(1.0), Just(4.0), Just(20.0)],
            prop_oneof![Just(2.0f32), Just(5.0), Just(13.0)],
        )
            .prop_map(|(seed, cup_width, cup_speed, balls_per_second, ball_speed)| {
                GameConfig {
                    seed,
                    cup_width,
                    cup_speed,
                    balls_per_second,
                    ball_speed,
                    ..Default::default()
                }
            })
    }

    proptest! {
        #[test]
        fn prop_tick_invariants(
            config in config_strategy(),
            script in prop::collection::vec((input_strategy(), 0u64..3000), 1..300),
        ) {
            prop_assert!(config.validate().is_ok());
            let mut state = GameState::new(&config, 0);
            let mut now = 0u64;

            for (input, dt) in script {
                now += dt;
                let before_score = state.score;
                let before_ids: Vec<u32> = state.balls.iter().map(|b| b.id).collect();

                let report = tick(&mut state, &config, input, now);

                // Score only grows, by exactly the number of catches
                prop_assert_eq!(state.score, before_score + report.caught() as u32);

                // Cup stays on the surface
                prop_assert!(state.cup_position >= 0);
                prop_assert!(state.cup_position <= config.max_cup_position());

                // At most one spawn per tick
                prop_assert!(report.spawned() <= 1);

                // Every removed ball is either caught or missed, never both
                let mut removed = Vec::new();
                for event in &report.events {
                    match event {
                        GameEvent::Caught { id, .. } | GameEvent::Missed { id, .. } => {
                            prop_assert!(!removed.contains(id));
                            removed.push(*id);
                        }
                        GameEvent::Spawned { .. } => {}
                    }
                }
                prop_assert_eq!(
                    state.balls.len() + removed.len(),
                    before_ids.len() + report.spawned()
                );
                for ball in &state.balls {
                    prop_assert!(!removed.contains(&ball.id));
                    prop_assert!(!ball.collided);
                    prop_assert!(ball.pos.y < config.exit_line());
                }
            }
        }
    }
}
