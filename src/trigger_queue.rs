//! Trigger delivery across execution contexts.
//!
//! Interrupt handlers and other tasks post [`Trigger`]s here; the task owning
//! the fader drains them with [`LightFader::process_pending`]. Built on
//! `critical-section` and `heapless::Deque`, so it needs no allocator.
//!
//! [`LightFader::process_pending`]: crate::LightFader::process_pending

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::bus::Trigger;

/// Error returned when posting to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub Trigger);

/// Bounded trigger queue, safe to share between contexts.
pub struct TriggerQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Trigger, SIZE>>>,
}

impl<const SIZE: usize> TriggerQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a posting handle for this queue.
    pub const fn sender(&self) -> TriggerSender<'_, SIZE> {
        TriggerSender { queue: self }
    }

    /// Enqueue a trigger.
    ///
    /// Returns `Err(QueueFull(trigger))` if the queue is full.
    pub fn post(&self, trigger: Trigger) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(trigger).map_err(QueueFull)
        })
    }

    /// Dequeue the oldest trigger, if any.
    pub fn take(&self) -> Option<Trigger> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }
}

impl<const SIZE: usize> Default for TriggerQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for a [`TriggerQueue`].
///
/// Lightweight and `Copy`, hand one to every producer.
#[derive(Clone, Copy)]
pub struct TriggerSender<'a, const SIZE: usize> {
    queue: &'a TriggerQueue<SIZE>,
}

impl<const SIZE: usize> TriggerSender<'_, SIZE> {
    /// Enqueue a trigger.
    pub fn post(&self, trigger: Trigger) -> Result<(), QueueFull> {
        self.queue.post(trigger)
    }
}
