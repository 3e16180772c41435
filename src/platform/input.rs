//! Software input sources
//!
//! `AutoPilot` plays the game on hosts without buttons, `ScriptedInput`
//! replays a fixed sequence of samples.

use std::collections::VecDeque;

use crate::Millis;
use crate::config::GameConfig;
use crate::error::CollaboratorFault;
use crate::sim::autopilot::steer;
use crate::sim::{GameState, InputSample};

use super::InputSource;

/// Steers toward the lowest ball, based on the last committed state
#[derive(Debug, Clone, Default)]
pub struct AutoPilot {
    next: InputSample,
}

impl AutoPilot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for AutoPilot {
    fn sample(&mut self, _now: Millis) -> Result<InputSample, CollaboratorFault> {
        Ok(self.next)
    }

    fn observe(&mut self, state: &GameState, config: &GameConfig) {
        self.next = steer(state, config);
    }
}

/// Plays back queued samples, then reports no input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputSample>,
    /// Sample handed out at the most recent timestamp
    last: Option<(Millis, InputSample)>,
}

impl ScriptedInput {
    pub fn new(samples: impl IntoIterator<Item = InputSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
            last: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, now: Millis) -> Result<InputSample, CollaboratorFault> {
        if let Some((at, sample)) = self.last {
            if at == now {
                return Ok(sample);
            }
        }
        let sample = self.queue.pop_front().unwrap_or_default();
        self.last = Some((now, sample));
        Ok(sample)
    }
}
