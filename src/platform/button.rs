//! Debounced buttons
//!
//! A press fires once on the rising edge. While held, the button fires again
//! each time more than `repeat_ms` has passed since the last fire, and three
//! times as often once it has been held longer than `hold_ms`.

use crate::Millis;
use crate::error::CollaboratorFault;
use crate::sim::InputSample;

use super::InputSource;

/// Edge/repeat detector for one physical button
#[derive(Debug, Clone)]
pub struct DebouncedButton {
    repeat_ms: u64,
    hold_ms: u64,
    last_level: bool,
    pressed: bool,
    pressed_at: Millis,
    last_fire: Millis,
    /// Result of the last read, keyed by its timestamp
    cached: Option<(Millis, bool)>,
}

impl DebouncedButton {
    /// `repeat_ms == 0` disables repeats, `hold_ms == 0` disables acceleration
    pub fn new(repeat_ms: u64, hold_ms: u64) -> Self {
        Self {
            repeat_ms,
            hold_ms,
            last_level: false,
            pressed: false,
            pressed_at: 0,
            last_fire: 0,
            cached: None,
        }
    }

    /// Feed the current level; returns true if the button fires at `now`
    pub fn read(&mut self, level: bool, now: Millis) -> bool {
        if let Some((at, fired)) = self.cached {
            if at == now {
                return fired;
            }
        }
        let fired = self.update(level, now);
        self.cached = Some((now, fired));
        fired
    }

    pub fn is_held(&self) -> bool {
        self.pressed
    }

    fn update(&mut self, level: bool, now: Millis) -> bool {
        if level != self.last_level {
            self.last_level = level;
            if level {
                self.pressed = true;
                self.pressed_at = now;
                self.last_fire = now;
                return true;
            }
            self.pressed = false;
        }

        if self.repeat_ms == 0 || !self.pressed {
            return false;
        }

        let mut interval = self.repeat_ms;
        if self.hold_ms > 0 && now.saturating_sub(self.pressed_at) > self.hold_ms {
            interval /= 3;
        }

        if now.saturating_sub(self.last_fire) > interval {
            self.last_fire = now;
            return true;
        }
        false
    }
}

/// Raw (undebounced) levels of the four face buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawLevels {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
}

/// Reads the four face buttons as raw levels
pub trait RawButtons {
    fn levels(&mut self) -> Result<RawLevels, CollaboratorFault>;
}

impl<F> RawButtons for F
where
    F: FnMut() -> Result<RawLevels, CollaboratorFault>,
{
    fn levels(&mut self) -> Result<RawLevels, CollaboratorFault> {
        self()
    }
}

/// Four debounced face buttons mapped onto the logical controls
///
/// B moves left, Y moves right; A and X are read but reserved.
pub struct ButtonPad<R> {
    raw: R,
    a: DebouncedButton,
    b: DebouncedButton,
    x: DebouncedButton,
    y: DebouncedButton,
}

impl<R: RawButtons> ButtonPad<R> {
    pub fn new(raw: R, repeat_ms: u64, hold_ms: u64) -> Self {
        Self {
            raw,
            a: DebouncedButton::new(repeat_ms, hold_ms),
            b: DebouncedButton::new(repeat_ms, hold_ms),
            x: DebouncedButton::new(repeat_ms, hold_ms),
            y: DebouncedButton::new(repeat_ms, hold_ms),
        }
    }
}

impl<R: RawButtons> InputSource for ButtonPad<R> {
    fn sample(&mut self, now: Millis) -> Result<InputSample, CollaboratorFault> {
        let levels = self.raw.levels()?;
        Ok(InputSample {
            move_left: self.b.read(levels.b, now),
            move_right: self.y.read(levels.y, now),
            reserved_a: self.a.read(levels.a, now),
            reserved_b: self.x.read(levels.x, now),
        })
    }
}
