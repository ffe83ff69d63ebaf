//! Enable/disable boundary for on/off subscriptions

use heapless::Vec;

use crate::bus::{BusFull, EventBus, SubscriptionId, Trigger};
use crate::config::{EventNames, MAX_EVENT_NAMES};

/// Maximum number of subscriptions one gate holds (on and off lists)
pub const MAX_GATE_SUBSCRIPTIONS: usize = 2 * MAX_EVENT_NAMES;

/// Owns the on/off subscriptions of a fader.
///
/// While enabled, every on and off event name has exactly one subscription.
/// While disabled, none do.
#[derive(Debug, Default)]
pub struct TriggerGate {
    subscriptions: Vec<SubscriptionId, MAX_GATE_SUBSCRIPTIONS>,
    subscribed: bool,
}

impl TriggerGate {
    pub const fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            subscribed: false,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.subscribed
    }

    /// Subscribe on and off events.
    ///
    /// Returns `Ok(false)` if already subscribed. On error nothing stays
    /// registered.
    pub fn enable<B: EventBus>(
        &mut self,
        bus: &mut B,
        on_events: &EventNames,
        off_events: &EventNames,
    ) -> Result<bool, BusFull> {
        if self.subscribed {
            return Ok(false);
        }

        let routes = on_events
            .iter()
            .map(|name| (name, Trigger::TurnOn))
            .chain(off_events.iter().map(|name| (name, Trigger::TurnOff)));
        for (name, trigger) in routes {
            let id = match bus.subscribe(name, trigger) {
                Ok(id) => id,
                Err(err) => {
                    self.release(bus);
                    return Err(err);
                }
            };
            if let Err(id) = self.subscriptions.push(id) {
                bus.unsubscribe(id);
                self.release(bus);
                return Err(BusFull);
            }
        }

        self.subscribed = true;
        Ok(true)
    }

    /// Drop every on/off subscription.
    ///
    /// Returns false if there was nothing to drop.
    pub fn disable<B: EventBus>(&mut self, bus: &mut B) -> bool {
        let was_subscribed = self.subscribed;
        self.release(bus);
        was_subscribed
    }

    /// Number of held subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn release<B: EventBus>(&mut self, bus: &mut B) {
        while let Some(id) = self.subscriptions.pop() {
            bus.unsubscribe(id);
        }
        self.subscribed = false;
    }
}
