//! Game loop controller
//!
//! Owns the game state and the injected collaborators. Each tick samples
//! input, advances the simulation on a copy, presents the frame and only then
//! commits the copy, so a failing collaborator leaves the last good state in
//! place. Pacing (sleeping between ticks) belongs to the caller.

use crate::Millis;
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::platform::{Clock, InputSource, Renderer};
use crate::sim::{GameState, RenderRequest, TickReport, tick};

pub struct GameLoop<I, R, C> {
    config: GameConfig,
    state: GameState,
    input: I,
    renderer: R,
    clock: C,
}

impl<I: InputSource, R: Renderer, C: Clock> GameLoop<I, R, C> {
    /// Validate the config and start a fresh game at the clock's current time
    pub fn new(config: GameConfig, input: I, renderer: R, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, clock.now());
        log::info!(
            "Game ready: {}x{} surface, cup {}x{}, {} ball(s)/s, tick {} ms",
            config.surface_width,
            config.surface_height,
            config.cup_width,
            config.cup_height,
            config.balls_per_second,
            config.tick_interval_ms
        );
        Ok(Self {
            config,
            state,
            input,
            renderer,
            clock,
        })
    }

    /// Run one tick at the clock's current time
    pub fn run_tick(&mut self) -> Result<TickReport, GameError> {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Run one tick at an explicit timestamp
    pub fn tick_at(&mut self, now: Millis) -> Result<TickReport, GameError> {
        let input = self.input.sample(now)?;

        let mut next = self.state.clone();
        let report = tick(&mut next, &self.config, input, now);
        let frame = RenderRequest::capture(&next, &self.config);

        self.renderer.present(&frame)?;

        self.state = next;
        self.input.observe(&self.state, &self.config);
        Ok(report)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
