//! Platform abstraction layer
//!
//! The simulation never touches hardware. It is driven through three
//! capabilities, each implemented by a host or device adapter:
//! - Input: four debounced controls
//! - Display: draw one frame
//! - Time: a monotonic millisecond clock

pub mod button;
pub mod display;
pub mod input;
pub mod time;

pub use button::{ButtonPad, DebouncedButton, RawButtons, RawLevels};
pub use display::{FrameRecorder, LogRenderer};
pub use input::{AutoPilot, ScriptedInput};
pub use time::{ManualClock, SystemClock};

use crate::Millis;
use crate::config::GameConfig;
use crate::error::CollaboratorFault;
use crate::sim::{GameState, InputSample, RenderRequest};

/// Source of the logical controls for a tick
pub trait InputSource {
    /// Read the controls at `now`. Must return promptly; reading twice with
    /// the same timestamp yields the same sample.
    fn sample(&mut self, now: Millis) -> Result<InputSample, CollaboratorFault>;

    /// Called with the committed state after every successful tick.
    /// Sources that react to what is on screen override this.
    fn observe(&mut self, _state: &GameState, _config: &GameConfig) {}
}

/// Draws a frame: clear, cup, balls, score text, present
pub trait Renderer {
    fn present(&mut self, frame: &RenderRequest) -> Result<(), CollaboratorFault>;
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now(&self) -> Millis;
}
