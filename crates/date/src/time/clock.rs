//! Wall-clock abstraction for testability
//!
//! Resolvers never call `Utc::now()` directly; they ask a [`Clock`]. The
//! clock also answers which UTC offset the local zone observes at a given
//! instant, so DST transitions are honored per call instead of being frozen
//! at startup.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use shortcuts_date::time::{Clock, MockClock};
//!
//! let start = Utc.with_ymd_and_hms(2025, 6, 22, 16, 54, 58).unwrap();
//! let clock = MockClock::new(start);
//! clock.advance(TimeDelta::seconds(5));
//! assert_eq!(clock.now_utc() - start, TimeDelta::seconds(5));
//! ```

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use parking_lot::Mutex;

/// Source of the current instant and the local zone's offset rules
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// UTC offset the local zone observes at `at`
    fn local_offset(&self, at: &DateTime<Utc>) -> FixedOffset;

    /// Current instant with the local offset attached
    fn now_local(&self) -> DateTime<FixedOffset> {
        let now = self.now_utc();
        now.with_timezone(&self.local_offset(&now))
    }
}

/// Real system clock using the operating system's local zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self, at: &DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&at.naive_utc()).fix()
    }
}

/// Mock clock for deterministic tests
///
/// Holds a settable instant and a `chrono-tz` zone standing in for the
/// local zone. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
    zone: Tz,
}

impl MockClock {
    /// Create a mock clock frozen at `now` whose local zone is UTC
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_zone(now, Tz::UTC)
    }

    /// Create a mock clock frozen at `now` observing `zone` as local time
    #[must_use]
    pub fn with_zone(now: DateTime<Utc>, zone: Tz) -> Self {
        Self { now: Arc::new(Mutex::new(now)), zone }
    }

    /// Create a mock clock from a local wall time in `zone`
    ///
    /// Returns `None` when the wall time is ambiguous or skipped by a DST
    /// transition in that zone.
    #[must_use]
    pub fn from_local(zone: Tz, local: NaiveDateTime) -> Option<Self> {
        let now = zone.from_local_datetime(&local).single()?.with_timezone(&Utc);
        Some(Self::with_zone(now, zone))
    }

    /// Move the clock forward (or back, for a negative delta)
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }

    /// Jump the clock to `instant`
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Zone used as local time
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }
}

impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock()
    }

    fn local_offset(&self, at: &DateTime<Utc>) -> FixedOffset {
        self.zone.offset_from_utc_datetime(&at.naive_utc()).fix()
    }
}
