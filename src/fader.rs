use core::fmt;

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::{BusFull, EventBus, EventRouter, SubscriptionId, Trigger};
use crate::color::LightValue;
use crate::config::FaderConfig;
use crate::fade::FadeState;
use crate::gate::{MAX_GATE_SUBSCRIPTIONS, TriggerGate};
use crate::scheduler::InterpolationScheduler;
use crate::target::{ControlledTarget, Targets};
use crate::trigger_queue::TriggerQueue;

/// Errors reported by [`LightFader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaderError {
    /// No target to control was supplied
    NoTargets,
    /// The event bus could not take all subscriptions
    Bus(BusFull),
}

impl From<BusFull> for FaderError {
    fn from(err: BusFull) -> Self {
        Self::Bus(err)
    }
}

impl fmt::Display for FaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => f.write_str("at least one controllable light is required"),
            Self::Bus(err) => write!(f, "subscription failed: {}", err),
        }
    }
}

/// Light Fader - turns lights on and off with timed fades
///
/// Drives every target toward the initial value on "on" triggers and toward
/// black on "off" triggers. Triggers may arrive while a fade is running; the
/// new fade starts from whatever the lights show at that moment.
pub struct LightFader<'a, T: ControlledTarget> {
    // External dependencies and configuration
    targets: Targets<'a, T>,
    config: FaderConfig,

    // Internal state
    initial: LightValue,
    fade: FadeState,
    control_subscriptions: Vec<SubscriptionId, MAX_GATE_SUBSCRIPTIONS>,

    // Internal dependencies
    scheduler: InterpolationScheduler,
    gate: TriggerGate,
}

impl<'a, T: ControlledTarget> LightFader<'a, T> {
    /// Create a fader for `targets`.
    ///
    /// The initial light value is sampled from the first target. Enable and
    /// disable events stay subscribed until [`LightFader::detach`].
    pub fn new<B: EventBus>(
        targets: &'a mut [T],
        config: FaderConfig,
        bus: &mut B,
        now: Instant,
    ) -> Result<Self, FaderError> {
        let Some(mut targets) = Targets::new(targets) else {
            #[cfg(feature = "esp32-log")]
            println!(
                "[LightFader.new] error: object must have at least one scriptable light for the fader to work"
            );
            return Err(FaderError::NoTargets);
        };

        let initial = targets.sample();
        if config.turn_off_at_start {
            targets.write(LightValue::OFF);
        }

        let mut fader = Self {
            fade: FadeState::new(targets.sample()),
            targets,
            scheduler: InterpolationScheduler::new(config.has_fade_time()),
            gate: TriggerGate::new(),
            control_subscriptions: Vec::new(),
            initial,
            config,
        };

        if let Err(err) = fader.subscribe_all(bus, now) {
            fader.detach(bus);
            #[cfg(feature = "esp32-log")]
            println!("[LightFader.new] error: {}", err);
            return Err(err);
        }

        Ok(fader)
    }

    fn subscribe_all<B: EventBus>(&mut self, bus: &mut B, now: Instant) -> Result<(), FaderError> {
        if self.config.start_enabled {
            self.enable(bus, now)?;
        }

        let routes = self
            .config
            .enable_events
            .iter()
            .map(|name| (name, Trigger::Enable))
            .chain(
                self.config
                    .disable_events
                    .iter()
                    .map(|name| (name, Trigger::Disable)),
            );
        for (name, trigger) in routes {
            let id = bus.subscribe(name, trigger)?;
            if let Err(id) = self.control_subscriptions.push(id) {
                bus.unsubscribe(id);
                return Err(BusFull.into());
            }
        }
        Ok(())
    }

    /// Start responding to on/off triggers.
    ///
    /// Does nothing if already enabled, apart from restarting a stopped
    /// scheduler.
    pub fn enable<B: EventBus>(&mut self, bus: &mut B, now: Instant) -> Result<(), FaderError> {
        self.gate.enable(
            bus,
            &self.config.turn_on_events,
            &self.config.turn_off_events,
        )?;
        self.start_interpolation(now);
        Ok(())
    }

    /// Stop responding to on/off triggers and cancel the tick loop.
    ///
    /// A fade in progress freezes at its last written value.
    pub fn disable<B: EventBus>(&mut self, bus: &mut B) {
        self.gate.disable(bus);
        self.scheduler.stop();
    }

    /// Apply a trigger
    pub fn handle<B: EventBus>(
        &mut self,
        trigger: Trigger,
        bus: &mut B,
        now: Instant,
    ) -> Result<(), FaderError> {
        match trigger {
            Trigger::Enable => return self.enable(bus, now),
            Trigger::Disable => self.disable(bus),
            // Stale on/off triggers may still arrive through a queue
            Trigger::TurnOn | Trigger::TurnOff if !self.gate.is_enabled() => {}
            Trigger::TurnOn => self.transition(self.initial, self.config.turn_on_fade),
            Trigger::TurnOff => self.transition(LightValue::OFF, self.config.turn_off_fade),
        }
        Ok(())
    }

    /// Route an event name through `router` and apply every matching trigger.
    ///
    /// Returns the number of triggers applied.
    pub fn dispatch<const N: usize>(
        &mut self,
        router: &mut EventRouter<N>,
        name: &str,
        now: Instant,
    ) -> Result<usize, FaderError> {
        let triggers = router.route(name);
        for trigger in &triggers {
            self.handle(*trigger, router, now)?;
        }
        Ok(triggers.len())
    }

    /// Apply all triggers posted to `queue` (non-blocking)
    pub fn process_pending<B: EventBus, const SIZE: usize>(
        &mut self,
        queue: &TriggerQueue<SIZE>,
        bus: &mut B,
        now: Instant,
    ) -> Result<(), FaderError> {
        while let Some(trigger) = queue.take() {
            self.handle(trigger, bus, now)?;
        }
        Ok(())
    }

    /// Run the ticks due at `now`.
    ///
    /// Returns how long the caller may sleep before polling again, or `None`
    /// while the tick loop is stopped.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let result = self.scheduler.poll(now)?;
        for _ in 0..result.due {
            self.tick();
        }
        Some(result.sleep_duration)
    }

    /// Advance the fade by one tick period.
    ///
    /// Ignored while the tick loop is stopped.
    pub fn tick(&mut self) {
        if !self.scheduler.is_running() {
            return;
        }
        if let Some(value) = self.fade.advance(self.scheduler.period()) {
            self.targets.write(value);
        }
    }

    /// Drop every subscription this fader holds
    pub fn detach<B: EventBus>(&mut self, bus: &mut B) {
        self.disable(bus);
        while let Some(id) = self.control_subscriptions.pop() {
            bus.unsubscribe(id);
        }
    }

    /// Returns true if on/off triggers are applied
    pub const fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Returns true if the tick loop is running
    pub const fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    pub const fn fade(&self) -> &FadeState {
        &self.fade
    }

    /// Value restored by "on" triggers
    pub const fn initial_value(&self) -> LightValue {
        self.initial
    }

    /// Borrowed targets, in the order they were supplied
    pub fn targets(&self) -> &[T] {
        self.targets.as_slice()
    }

    /// Value currently shown by the first target
    pub fn current_value(&self) -> LightValue {
        self.targets.sample()
    }

    pub const fn config(&self) -> &FaderConfig {
        &self.config
    }

    /// Number of on/off subscriptions currently held
    pub fn trigger_subscriptions(&self) -> usize {
        self.gate.subscription_count()
    }

    /// Restart the tick loop with an idle fade at the current value
    fn start_interpolation(&mut self, now: Instant) {
        if self.scheduler.start(now) {
            self.fade.settle(self.targets.sample());
        }
    }

    /// Fade toward `to`, or jump there when `duration` is zero
    fn transition(&mut self, to: LightValue, duration: Duration) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightFader.transition] fading to {:?} over {}ms",
            to,
            duration.as_millis()
        );
        if duration.as_ticks() > 0 {
            let from = self.targets.sample();
            self.fade.begin(from, to, duration);
        } else {
            self.fade.settle(to);
            self.targets.write(to);
        }
    }
}
