//! Periodic tick scheduling for fades.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller passes the current time and sleeps between polls.

use embassy_time::{Duration, Instant};

/// Fixed interval between fade ticks (100 ms).
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Upper bound of ticks reported by a single poll.
///
/// Lag beyond two periods is dropped instead of caught up, so one poll never
/// owes more than three ticks.
const MAX_DUE: u32 = 3;

/// Result of polling the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Number of ticks due at the polled time.
    pub due: u32,
    /// How long to wait until the next tick (zero if one is already due).
    pub sleep_duration: Duration,
}

/// Cancellable periodic tick loop.
///
/// The loop is either stopped or running. While running it produces one tick
/// per period forever, whether or not a fade is in flight. Stopping takes
/// effect immediately: a stopped scheduler never reports due ticks.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = InterpolationScheduler::new(true);
/// scheduler.start(now);
///
/// loop {
///     let now = get_current_time();
///     if let Some(result) = scheduler.poll(now) {
///         for _ in 0..result.due {
///             // advance the fade
///         }
///         sleep(result.sleep_duration);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InterpolationScheduler {
    period: Duration,
    fades_configured: bool,
    next_tick: Option<Instant>,
}

impl InterpolationScheduler {
    /// Create a stopped scheduler using [`TICK_PERIOD`].
    ///
    /// `fades_configured` is false when every transition is instantaneous; such a
    /// scheduler refuses to start.
    pub const fn new(fades_configured: bool) -> Self {
        Self::with_period(fades_configured, TICK_PERIOD)
    }

    /// Create a stopped scheduler with a custom tick period.
    pub const fn with_period(fades_configured: bool, period: Duration) -> Self {
        Self {
            period,
            fades_configured,
            next_tick: None,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Start ticking; the first tick is due one period after `now`.
    ///
    /// Returns false without changing anything if already running or if no
    /// fade is configured.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() || !self.fades_configured {
            return false;
        }
        self.next_tick = Some(now + self.period);
        true
    }

    /// Cancel the loop. Safe to call when not running.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Collect the ticks due at `now`.
    ///
    /// Returns `None` if the scheduler is stopped. Falling behind by more than
    /// two periods drops the backlog, so a late poll yields at most three ticks.
    pub fn poll(&mut self, now: Instant) -> Option<TickResult> {
        let mut next = self.next_tick?;

        // Drift correction: re-anchor after a long stall
        let max_drift = self.period * 2;
        if now > next + max_drift {
            next = now;
        }

        let mut due = 0;
        while next <= now && due < MAX_DUE {
            due += 1;
            next += self.period;
        }
        self.next_tick = Some(next);

        Some(TickResult {
            due,
            sleep_duration: next
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
        })
    }

    /// Deadline of the next tick, if running
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }
}
