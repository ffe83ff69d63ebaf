//! Controlled targets and the sampler/writer pair driving them.

use crate::OutputDriver;
use crate::color::{LightValue, Rgb, scale_to_rgb8};

/// Error returned when a target no longer accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGone;

/// Something whose light value can be read and written
///
/// Targets are owned by the host. The fader only borrows them.
pub trait ControlledTarget {
    /// Current color and intensity
    fn value(&self) -> LightValue;

    /// Apply a color and intensity
    fn set_value(&mut self, value: LightValue) -> Result<(), TargetGone>;
}

/// Borrowed, non-empty set of targets that always receive the same value.
pub(crate) struct Targets<'a, T: ControlledTarget> {
    inner: &'a mut [T],
}

impl<'a, T: ControlledTarget> Targets<'a, T> {
    /// Returns `None` for an empty slice
    pub(crate) fn new(inner: &'a mut [T]) -> Option<Self> {
        if inner.is_empty() {
            return None;
        }
        Some(Self { inner })
    }

    /// Sample the value of the first target
    pub(crate) fn sample(&self) -> LightValue {
        self.inner
            .first()
            .map(ControlledTarget::value)
            .unwrap_or(LightValue::OFF)
    }

    /// Write `value` to every target, skipping ones that are gone
    pub(crate) fn write(&mut self, value: LightValue) {
        for target in self.inner.iter_mut() {
            // A vanished target is not an error for the others
            let _ = target.set_value(value);
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &*self.inner
    }
}

/// LED strip driven through an [`OutputDriver`]
///
/// Every pixel shows the color scaled by intensity. The strip cannot be read
/// back, so the last written value is kept for sampling.
pub struct StripTarget<D: OutputDriver, const LEDS: usize> {
    driver: D,
    value: LightValue,
    frame: [Rgb; LEDS],
}

impl<D: OutputDriver, const LEDS: usize> StripTarget<D, LEDS> {
    /// Create a strip target with the value it currently shows
    ///
    /// Nothing is written until the first [`ControlledTarget::set_value`].
    pub fn new(driver: D, value: LightValue) -> Self {
        Self {
            driver,
            value,
            frame: [Rgb::default(); LEDS],
        }
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Last frame sent to the driver
    pub fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }
}

impl<D: OutputDriver, const LEDS: usize> ControlledTarget for StripTarget<D, LEDS> {
    fn value(&self) -> LightValue {
        self.value
    }

    fn set_value(&mut self, value: LightValue) -> Result<(), TargetGone> {
        self.value = value;
        self.frame.fill(scale_to_rgb8(value.color, value.intensity));
        self.driver.write(&self.frame)
    }
}
