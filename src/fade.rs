//! In-flight fade parameters
//!
//! A fade moves from `previous` to `target` while `remaining` counts down from
//! `total`. The state is only changed through [`FadeState::begin`],
//! [`FadeState::settle`] and [`FadeState::advance`], which keep
//! `active == (remaining > 0)` and `remaining <= total`.

use embassy_time::Duration;

use crate::color::LightValue;

const ZERO: Duration = Duration::from_ticks(0);

/// Fade progress between two light values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeState {
    active: bool,
    previous: LightValue,
    target: LightValue,
    remaining: Duration,
    total: Duration,
}

impl FadeState {
    /// Create an idle fade resting at `value`
    pub const fn new(value: LightValue) -> Self {
        Self {
            active: false,
            previous: value,
            target: value,
            remaining: ZERO,
            total: ZERO,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn previous(&self) -> LightValue {
        self.previous
    }

    pub const fn target(&self) -> LightValue {
        self.target
    }

    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Start fading from `from` to `to` over `duration`.
    ///
    /// A zero duration doesn't fade: the state settles at `to` and the caller
    /// has to apply it directly.
    pub fn begin(&mut self, from: LightValue, to: LightValue, duration: Duration) {
        if duration == ZERO {
            self.settle(to);
            return;
        }
        self.previous = from;
        self.target = to;
        self.total = duration;
        self.remaining = duration;
        self.active = true;
    }

    /// Stop any fade and rest at `value`
    pub fn settle(&mut self, value: LightValue) {
        *self = Self::new(value);
    }

    /// Advance the fade by `step`.
    ///
    /// Returns the interpolated value to write, or `None` when there is
    /// nothing to write.
    pub fn advance(&mut self, step: Duration) -> Option<LightValue> {
        if !self.active {
            return None;
        }
        if self.total == ZERO {
            // Nothing to interpolate over
            self.active = false;
            self.remaining = ZERO;
            return None;
        }

        self.remaining = self.remaining.checked_sub(step).unwrap_or(ZERO);
        self.active = self.remaining > ZERO;

        Some(LightValue::blend(
            self.previous,
            self.target,
            self.fraction_remaining(),
        ))
    }

    /// Fraction of the fade still to go (1.0 at start, 0.0 when done)
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction_remaining(&self) -> f32 {
        if self.total == ZERO {
            return 0.0;
        }
        self.remaining.as_ticks() as f32 / self.total.as_ticks() as f32
    }
}

impl Default for FadeState {
    fn default() -> Self {
        Self::new(LightValue::OFF)
    }
}
