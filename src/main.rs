//! Ball Catch entry point
//!
//! Host driver: loads the config, wires the collaborators and paces the tick
//! loop. Without physical buttons the autopilot plays.

use std::path::PathBuf;
use std::time::Duration;

use ball_catch::config::CONFIG_ENV;
use ball_catch::platform::{AutoPilot, LogRenderer, SystemClock};
use ball_catch::{GameConfig, GameError, GameLoop};

/// Stop after this many ticks when set (otherwise run forever)
const MAX_TICKS_ENV: &str = "BALL_CATCH_MAX_TICKS";

fn main() {
    env_logger::init();
    log::info!("Ball Catch starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())?;

    let max_ticks = match std::env::var(MAX_TICKS_ENV) {
        Ok(value) => match value.parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("Invalid {} '{}', running forever", MAX_TICKS_ENV, value);
                None
            }
        },
        Err(_) => None,
    };

    let interval = Duration::from_millis(config.tick_interval_ms);
    let mut game = GameLoop::new(config, AutoPilot::new(), LogRenderer::new(), SystemClock::new())?;

    let mut ticks = 0u64;
    loop {
        game.run_tick()?;
        ticks += 1;

        if max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        std::thread::sleep(interval);
    }

    log::info!(
        "Stopped after {} ticks, final score {}",
        ticks,
        game.score()
    );
    Ok(())
}
