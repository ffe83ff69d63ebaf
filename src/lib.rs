#![no_std]

pub mod bus;
pub mod color;
pub mod config;
pub mod fade;
pub mod fader;
pub mod gate;
pub mod scheduler;
pub mod target;
pub mod trigger_queue;

pub use bus::{BusFull, EventBus, EventRouter, ROUTES_PER_FADER, SubscriptionId, Trigger};
pub use config::{ConfigError, EventNames, FaderConfig, FaderOptions};
pub use fade::FadeState;
pub use fader::{FaderError, LightFader};
pub use gate::TriggerGate;
pub use scheduler::{InterpolationScheduler, TICK_PERIOD, TickResult};
pub use target::{ControlledTarget, StripTarget, TargetGone};
pub use trigger_queue::{QueueFull, TriggerQueue, TriggerSender};

pub use color::{Color, LightValue, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`StripTarget`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    ///
    /// Returns [`TargetGone`] if the strip can no longer be written.
    fn write(&mut self, colors: &[Rgb]) -> Result<(), TargetGone>;
}
