//! Named event subscriptions
//!
//! The host delivers free-form event names. A subscription binds a name to the
//! [`Trigger`] the fader should receive when that name fires.

use core::fmt;

use heapless::Vec;

use crate::config::{EventName, MAX_EVENT_NAMES};

/// Transitions the fader reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fade to the initial light value
    TurnOn,
    /// Fade to black
    TurnOff,
    /// Start responding to on/off triggers
    Enable,
    /// Stop responding to on/off triggers
    Disable,
}

/// Opaque handle of a registered subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Error returned when the bus has no room for another subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFull;

impl fmt::Display for BusFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("event bus subscription table is full")
    }
}

/// Event bus the fader subscribes to
///
/// Implement this trait to connect the fader to a host's event system.
pub trait EventBus {
    /// Route events named `name` to `trigger`
    fn subscribe(&mut self, name: &str, trigger: Trigger) -> Result<SubscriptionId, BusFull>;

    /// Remove a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

#[derive(Debug, Clone)]
struct Route {
    id: SubscriptionId,
    name: EventName,
    trigger: Trigger,
}

/// Fixed-capacity routing table implementing [`EventBus`].
///
/// `N` is the maximum number of live subscriptions.
#[derive(Debug, Default)]
pub struct EventRouter<const N: usize> {
    routes: Vec<Route, N>,
    next_id: u32,
}

impl<const N: usize> EventRouter<N> {
    pub const fn new() -> Self {
        Self {
            routes: Vec::new(),
            next_id: 0,
        }
    }

    /// Collect the triggers subscribed to `name`, in subscription order.
    ///
    /// The result is detached from the router, so the caller can hand each
    /// trigger to a fader that mutates this router.
    pub fn route(&self, name: &str) -> Vec<Trigger, N> {
        self.routes
            .iter()
            .filter(|route| route.name.as_str() == name)
            .map(|route| route.trigger)
            .collect()
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of live subscriptions bound to `trigger`
    pub fn count(&self, trigger: Trigger) -> usize {
        self.routes
            .iter()
            .filter(|route| route.trigger == trigger)
            .count()
    }
}

impl<const N: usize> EventBus for EventRouter<N> {
    fn subscribe(&mut self, name: &str, trigger: Trigger) -> Result<SubscriptionId, BusFull> {
        if self.routes.is_full() {
            return Err(BusFull);
        }
        // Names that don't fit a table slot can't be stored either
        let mut owned = EventName::new();
        owned.push_str(name).map_err(|()| BusFull)?;

        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.routes
            .push(Route {
                id,
                name: owned,
                trigger,
            })
            .map_err(|_| BusFull)?;
        Ok(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.routes.retain(|route| route.id != id);
    }
}

/// Capacity a router needs to serve one fader with full event lists
pub const ROUTES_PER_FADER: usize = 4 * MAX_EVENT_NAMES;
