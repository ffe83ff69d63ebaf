//! Fader configuration
//!
//! Mirrors the options a host exposes for an on/off light script. Event name
//! fields accept comma separated lists; every listed name is treated the same.

use core::fmt;

use embassy_time::Duration;
use heapless::{String, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Maximum number of names in one event list
pub const MAX_EVENT_NAMES: usize = 8;

/// Maximum length of a single event name in bytes
pub const MAX_EVENT_NAME_LEN: usize = 32;

/// Longest fade the host accepts, in seconds
pub const MAX_FADE_SECONDS: f32 = 5.0;

/// Default fade time in seconds for both directions
pub const DEFAULT_FADE_SECONDS: f32 = 0.1;

pub type EventName = String<MAX_EVENT_NAME_LEN>;

/// Error returned when configuration values don't fit the fixed capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The list has more than [`MAX_EVENT_NAMES`] names
    TooManyNames,
    /// A name is longer than [`MAX_EVENT_NAME_LEN`] bytes
    NameTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyNames => write!(
                f,
                "event list has more than {} names",
                MAX_EVENT_NAMES
            ),
            Self::NameTooLong => write!(
                f,
                "event name is longer than {} bytes",
                MAX_EVENT_NAME_LEN
            ),
        }
    }
}

/// Set of event names parsed from a comma separated list.
///
/// Names are trimmed, empty entries are dropped and duplicates are kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventNames {
    names: Vec<EventName, MAX_EVENT_NAMES>,
}

impl EventNames {
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Parse a comma separated list like `"on, lights_on,,power"`.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let mut names = Self::new();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            names.insert(token)?;
        }
        Ok(names)
    }

    /// Add a single name, ignoring it if already present
    pub fn insert(&mut self, name: &str) -> Result<(), ConfigError> {
        if self.contains(name) {
            return Ok(());
        }
        let mut owned = EventName::new();
        owned
            .push_str(name)
            .map_err(|()| ConfigError::NameTooLong)?;
        self.names
            .push(owned)
            .map_err(|_| ConfigError::TooManyNames)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Convert a fade time in seconds to a [`Duration`].
///
/// Values are clamped to `0..=MAX_FADE_SECONDS`; non-finite input means no fade.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fade_duration(seconds: f32) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::from_ticks(0);
    }
    let clamped = if seconds > MAX_FADE_SECONDS {
        #[cfg(feature = "esp32-log")]
        println!(
            "[config.fade_duration] warn: fade time {}s clamped to {}s",
            seconds, MAX_FADE_SECONDS
        );
        MAX_FADE_SECONDS
    } else {
        seconds
    };
    Duration::from_millis(libm::roundf(clamped * 1000.0) as u64)
}

/// Configuration for the light fader
#[derive(Debug, Clone)]
pub struct FaderConfig {
    /// Events that fade the light to its initial value
    pub turn_on_events: EventNames,
    /// Fade duration when turning on, zero switches instantly
    pub turn_on_fade: Duration,
    /// Events that fade the light to black
    pub turn_off_events: EventNames,
    /// Fade duration when turning off, zero switches instantly
    pub turn_off_fade: Duration,
    /// Switch the lights off right after construction
    pub turn_off_at_start: bool,
    /// Events that start responding to on/off events
    pub enable_events: EventNames,
    /// Events that stop responding to on/off events
    pub disable_events: EventNames,
    /// Respond to on/off events right after construction
    pub start_enabled: bool,
}

/// Raw option values as a host editor stores them
#[derive(Debug, Clone, Copy)]
pub struct FaderOptions<'a> {
    pub turn_on_event: &'a str,
    pub turn_on_fade_time: f32,
    pub turn_off_event: &'a str,
    pub turn_off_fade_time: f32,
    pub turn_off_at_start: bool,
    pub enable_event: &'a str,
    pub disable_event: &'a str,
    pub start_enabled: bool,
}

impl Default for FaderOptions<'_> {
    fn default() -> Self {
        Self {
            turn_on_event: "on",
            turn_on_fade_time: DEFAULT_FADE_SECONDS,
            turn_off_event: "off",
            turn_off_fade_time: DEFAULT_FADE_SECONDS,
            turn_off_at_start: true,
            enable_event: "light_enable",
            disable_event: "light_disable",
            start_enabled: true,
        }
    }
}

impl FaderConfig {
    /// Build a configuration from raw option values
    pub fn from_options(options: &FaderOptions<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            turn_on_events: EventNames::parse(options.turn_on_event)?,
            turn_on_fade: fade_duration(options.turn_on_fade_time),
            turn_off_events: EventNames::parse(options.turn_off_event)?,
            turn_off_fade: fade_duration(options.turn_off_fade_time),
            turn_off_at_start: options.turn_off_at_start,
            enable_events: EventNames::parse(options.enable_event)?,
            disable_events: EventNames::parse(options.disable_event)?,
            start_enabled: options.start_enabled,
        })
    }

    /// Returns true if either direction fades instead of switching
    pub fn has_fade_time(&self) -> bool {
        self.turn_on_fade.as_ticks() > 0 || self.turn_off_fade.as_ticks() > 0
    }
}

impl Default for FaderConfig {
    fn default() -> Self {
        // Default options only contain short names, so parsing cannot fail.
        let options = FaderOptions::default();
        Self {
            turn_on_events: EventNames::parse(options.turn_on_event).unwrap_or_default(),
            turn_on_fade: fade_duration(options.turn_on_fade_time),
            turn_off_events: EventNames::parse(options.turn_off_event).unwrap_or_default(),
            turn_off_fade: fade_duration(options.turn_off_fade_time),
            turn_off_at_start: options.turn_off_at_start,
            enable_events: EventNames::parse(options.enable_event).unwrap_or_default(),
            disable_events: EventNames::parse(options.disable_event).unwrap_or_default(),
            start_enabled: options.start_enabled,
        }
    }
}
