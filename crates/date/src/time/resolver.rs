//! Current-time resolution and shifting
//!
//! [`TimeResolver`] turns a [`DateConfig`] plus per-call [`TimeOptions`]
//! into a [`TimeValue`], optionally shifted by an [`Interval`].
//!
//! ## Resolution order
//! 1. A per-call option, when set
//! 2. Otherwise the resolver's configuration
//!
//! | `utc` | `naive` | Result |
//! |-------|---------|--------|
//! | true  | true    | UTC wall time, no offset |
//! | true  | false   | UTC instant, `+00:00` attached |
//! | false | true    | Local wall time, no offset |
//! | false | false   | Local instant, offset in effect at that instant |

use super::clock::{Clock, SystemClock};
use super::interval::Interval;
use super::value::TimeValue;
use crate::config::DateConfig;
use crate::error::{DateError, DateResult};

/// Per-call overrides; `None` defers to the resolver's configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeOptions {
    /// Override naive mode
    pub naive: Option<bool>,
    /// Override UTC mode
    pub utc: Option<bool>,
}

impl TimeOptions {
    /// No overrides
    #[must_use]
    pub const fn new() -> Self {
        Self { naive: None, utc: None }
    }

    /// Request a naive (`true`) or aware (`false`) value
    #[must_use]
    pub const fn naive(mut self, naive: bool) -> Self {
        self.naive = Some(naive);
        self
    }

    /// Request the UTC (`true`) or local (`false`) clock
    #[must_use]
    pub const fn utc(mut self, utc: bool) -> Self {
        self.utc = Some(utc);
        self
    }
}

/// Direction of a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftMode {
    /// Move forward in time
    Add,
    /// Move backward in time
    Subtract,
}

/// Resolves current time values against a configuration and clock
///
/// # Examples
///
/// ```
/// use shortcuts_date::config::DateConfig;
/// use shortcuts_date::time::{Interval, TimeOptions, TimeResolver};
///
/// let resolver = TimeResolver::new(DateConfig::default());
/// let now = resolver.now(TimeOptions::new());
/// assert!(now.is_naive());
///
/// let aware = TimeOptions::new().naive(false);
/// let expires = resolver.future(&Interval::new().minutes(3), aware).unwrap();
/// assert!(expires.offset().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TimeResolver<C = SystemClock> {
    config: DateConfig,
    clock: C,
}

impl TimeResolver<SystemClock> {
    /// Create a resolver reading the system clock
    #[must_use]
    pub fn new(config: DateConfig) -> Self {
        Self { config, clock: SystemClock }
    }

    /// Create a resolver configured from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(DateConfig::from_env())
    }
}

impl<C: Clock> TimeResolver<C> {
    /// Create a resolver reading `clock`
    pub fn with_clock(config: DateConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Active configuration
    pub const fn config(&self) -> &DateConfig {
        &self.config
    }

    /// Mutable access to the configuration
    pub fn config_mut(&mut self) -> &mut DateConfig {
        &mut self.config
    }

    /// Clock backing this resolver
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Resolve the current time honoring `options` then the configuration
    pub fn resolve(&self, options: TimeOptions) -> TimeValue {
        let naive = options.naive.unwrap_or(self.config.naive);
        let utc = options.utc.unwrap_or(self.config.utc);

        if utc {
            let now = self.clock.now_utc();
            if naive {
                TimeValue::Naive(now.naive_utc())
            } else {
                TimeValue::Aware(now.fixed_offset())
            }
        } else {
            let now = self.clock.now_local();
            if naive {
                TimeValue::Naive(now.naive_local())
            } else {
                TimeValue::Aware(now)
            }
        }
    }

    /// Shift `base` by `interval` in the direction of `mode`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the interval or result cannot be
    /// represented.
    pub fn shift(
        &self,
        base: TimeValue,
        interval: &Interval,
        mode: ShiftMode,
    ) -> DateResult<TimeValue> {
        let delta = interval.to_delta()?;
        let shifted = match mode {
            ShiftMode::Add => base.checked_add(delta),
            ShiftMode::Subtract => base.checked_sub(delta),
        };
        shifted.ok_or_else(|| DateError::out_of_range(format!("{base} shifted by {delta}")))
    }

    /// Current time
    pub fn now(&self, options: TimeOptions) -> TimeValue {
        self.resolve(options)
    }

    /// Current time plus `interval`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on overflow.
    pub fn future(&self, interval: &Interval, options: TimeOptions) -> DateResult<TimeValue> {
        self.shift(self.resolve(options), interval, ShiftMode::Add)
    }

    /// Current time minus `interval`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on overflow.
    pub fn past(&self, interval: &Interval, options: TimeOptions) -> DateResult<TimeValue> {
        self.shift(self.resolve(options), interval, ShiftMode::Subtract)
    }

    /// Current time as a string
    ///
    /// The value is always resolved aware so offset tokens (`%z`, `%:z`)
    /// render even when naive mode is configured. The pattern is the first
    /// of `format`, the configured format, or the naive/aware default.
    ///
    /// # Errors
    /// Returns `DateError::Format` for a malformed pattern.
    pub fn render(&self, format: Option<&str>, utc: Option<bool>) -> DateResult<String> {
        let value = self.resolve(TimeOptions { naive: Some(false), utc });
        let pattern = format.unwrap_or_else(|| self.config.default_format());
        tracing::trace!(pattern, explicit = format.is_some(), "Rendering current time");
        value.format(pattern)
    }
}
