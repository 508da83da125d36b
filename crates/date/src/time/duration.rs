//! Elapsed spans with memoized unit conversions
//!
//! A [`Duration`] records a span once, together with its total seconds as a
//! real number, and derives every unit from that magnitude. Conversions
//! truncate toward zero and are computed at most once per unit.
//! Milliseconds and microseconds come from the exact integer span, so float
//! rounding never drops a sub-second unit.
//!
//! # Examples
//!
//! ```
//! use chrono::TimeDelta;
//! use shortcuts_date::time::{Duration, TimeUnit};
//!
//! let elapsed = Duration::new(TimeDelta::milliseconds(3_661_500));
//! assert_eq!(elapsed.seconds(), 3_661);
//! assert_eq!(elapsed.minutes(), 61);
//! assert_eq!(elapsed.get(TimeUnit::Hours), 1);
//! assert_eq!(elapsed.to_string(), "1:01:01.500000");
//! ```

use std::fmt;

use chrono::TimeDelta;
use once_cell::unsync::OnceCell;

use super::format::{format_compact, format_verbose};
use super::unit::TimeUnit;
use super::value::TimeValue;
use crate::error::DateResult;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 604_800.0;
const MICROS_PER_DAY: i128 = 86_400_000_000;

/// A span with lazily computed, truncated unit conversions
///
/// A negative span keeps its sign: conversions truncate toward zero, so
/// `-90s` reports `-1` minute. [`difference`] never produces one.
#[derive(Debug, Clone)]
pub struct Duration {
    delta: TimeDelta,
    total_seconds: f64,
    cache: [OnceCell<i64>; TimeUnit::ALL.len()],
}

impl Duration {
    /// Wrap a span
    #[must_use]
    pub fn new(delta: TimeDelta) -> Self {
        let total_seconds =
            delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0;
        Self { delta, total_seconds, cache: Default::default() }
    }

    /// Absolute span between two time values
    ///
    /// # Errors
    /// Returns `DateError::MixedAwareness` when one value is naive and the
    /// other aware.
    pub fn between(a: &TimeValue, b: &TimeValue) -> DateResult<Self> {
        Ok(Self::new(a.signed_since(b)?.abs()))
    }

    /// Underlying span
    #[must_use]
    pub const fn delta(&self) -> TimeDelta {
        self.delta
    }

    /// Total seconds including the fractional part
    #[must_use]
    pub const fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Whether the wrapped span is negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.delta < TimeDelta::zero()
    }

    /// Magnitude in `unit`, truncated toward zero
    ///
    /// Computed on first request and cached.
    pub fn get(&self, unit: TimeUnit) -> i64 {
        *self.cache[unit.index()].get_or_init(|| self.convert(unit))
    }

    /// Magnitude in the unit called `name` (`"hours"`, `"ms"`, ...)
    ///
    /// # Errors
    /// Returns `DateError::UnknownUnit` for an unsupported name.
    pub fn get_named(&self, name: &str) -> DateResult<i64> {
        Ok(self.get(name.parse()?))
    }

    /// Whole weeks
    pub fn weeks(&self) -> i64 {
        self.get(TimeUnit::Weeks)
    }

    /// Whole days
    pub fn days(&self) -> i64 {
        self.get(TimeUnit::Days)
    }

    /// Whole hours
    pub fn hours(&self) -> i64 {
        self.get(TimeUnit::Hours)
    }

    /// Whole minutes
    pub fn minutes(&self) -> i64 {
        self.get(TimeUnit::Minutes)
    }

    /// Whole seconds
    pub fn seconds(&self) -> i64 {
        self.get(TimeUnit::Seconds)
    }

    /// Whole milliseconds
    pub fn milliseconds(&self) -> i64 {
        self.get(TimeUnit::Milliseconds)
    }

    /// Whole microseconds
    pub fn microseconds(&self) -> i64 {
        self.get(TimeUnit::Microseconds)
    }

    /// Compact form, e.g. `"1d 2h 3m 4s"`
    #[must_use]
    pub fn to_compact(&self) -> String {
        format_compact(self.delta)
    }

    /// Verbose form, e.g. `"1 day 2 hours 3 minutes 4 seconds"`
    #[must_use]
    pub fn to_verbose(&self) -> String {
        format_verbose(self.delta)
    }

    /// Number of units already computed
    #[cfg(test)]
    fn cached_units(&self) -> usize {
        self.cache.iter().filter(|cell| cell.get().is_some()).count()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn convert(&self, unit: TimeUnit) -> i64 {
        let total = self.total_seconds;
        let value = match unit {
            TimeUnit::Weeks => total / SECONDS_PER_WEEK,
            TimeUnit::Days => total / SECONDS_PER_DAY,
            TimeUnit::Hours => total / SECONDS_PER_HOUR,
            TimeUnit::Minutes => total / SECONDS_PER_MINUTE,
            TimeUnit::Seconds => total,
            TimeUnit::Milliseconds => return self.delta.num_milliseconds(),
            // Only spans beyond ~292k years overflow i64 microseconds
            TimeUnit::Microseconds => {
                return self
                    .delta
                    .num_microseconds()
                    .unwrap_or_else(|| (total * 1_000_000.0).trunc() as i64)
            }
        };
        value.trunc() as i64
    }
}

/// Absolute span between two time values
///
/// Commutative: `difference(a, b)` equals `difference(b, a)`.
///
/// # Errors
/// Returns `DateError::MixedAwareness` when one value is naive and the other
/// aware.
pub fn difference(a: &TimeValue, b: &TimeValue) -> DateResult<Duration> {
    Duration::between(a, b)
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self::new(delta)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.delta == other.delta
    }
}

impl Eq for Duration {}

impl fmt::Display for Duration {
    /// `[-]D day[s], H:MM:SS[.ffffff]`, with days normalized so the clock
    /// part is never negative
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = i128::from(self.delta.num_seconds()) * 1_000_000
            + i128::from(self.delta.subsec_nanos() / 1_000);
        let days = micros.div_euclid(MICROS_PER_DAY);
        let rem = micros.rem_euclid(MICROS_PER_DAY);

        let hours = rem / 3_600_000_000;
        let minutes = rem % 3_600_000_000 / 60_000_000;
        let seconds = rem % 60_000_000 / 1_000_000;
        let fraction = rem % 1_000_000;

        if days != 0 {
            let plural = if days.abs() == 1 { "" } else { "s" };
            write!(f, "{days} day{plural}, ")?;
        }
        write!(f, "{hours}:{minutes:02}:{seconds:02}")?;
        if fraction != 0 {
            write!(f, ".{fraction:06}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::duration.
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

    use super::*;
    use crate::error::DateError;

    fn wall(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    /// Validates unit conversions of a fractional span.
    ///
    /// Assertions:
    /// - Confirms 3661.5 seconds truncates to 3661 s, 61 min and 1 h.
    /// - Confirms the sub-second part survives into milliseconds and
    ///   microseconds.
    #[test]
    fn test_unit_conversions() {
        let elapsed = Duration::new(TimeDelta::milliseconds(3_661_500));

        assert!((elapsed.total_seconds() - 3_661.5).abs() < f64::EPSILON);
        assert_eq!(elapsed.seconds(), 3_661);
        assert_eq!(elapsed.minutes(), 61);
        assert_eq!(elapsed.hours(), 1);
        assert_eq!(elapsed.days(), 0);
        assert_eq!(elapsed.weeks(), 0);
        assert_eq!(elapsed.milliseconds(), 3_661_500);
        assert_eq!(elapsed.microseconds(), 3_661_500_000);
    }

    /// Validates truncation rather than rounding.
    ///
    /// Assertions:
    /// - Confirms 59.999 seconds is 0 minutes and 59 seconds.
    /// - Confirms 13 days 23 hours is 1 week.
    #[test]
    fn test_truncates_instead_of_rounding() {
        let elapsed = Duration::new(TimeDelta::milliseconds(59_999));
        assert_eq!(elapsed.minutes(), 0);
        assert_eq!(elapsed.seconds(), 59);

        let elapsed = Duration::new(TimeDelta::days(13) + TimeDelta::hours(23));
        assert_eq!(elapsed.weeks(), 1);
        assert_eq!(elapsed.days(), 13);
    }

    /// Validates exact sub-second conversions.
    ///
    /// Assertions:
    /// - Confirms 249 microseconds is not reported as 248.
    /// - Confirms every microsecond span up to two seconds converts exactly.
    /// - Confirms negative spans truncate toward zero.
    #[test]
    fn test_sub_second_units_are_exact() {
        let elapsed = Duration::new(TimeDelta::microseconds(249));
        assert_eq!(elapsed.microseconds(), 249);
        assert_eq!(elapsed.milliseconds(), 0);

        for micros in (1..2_000_000_i64).step_by(7) {
            let elapsed = Duration::new(TimeDelta::microseconds(micros));
            assert_eq!(elapsed.microseconds(), micros);
            assert_eq!(elapsed.milliseconds(), micros / 1_000);
        }

        let elapsed = Duration::new(TimeDelta::microseconds(-1_500));
        assert_eq!(elapsed.milliseconds(), -1);
        assert_eq!(elapsed.microseconds(), -1_500);
    }

    /// Validates the memo cache.
    ///
    /// Assertions:
    /// - Confirms nothing is computed before the first request.
    /// - Confirms repeated requests return the same value and compute once.
    #[test]
    fn test_conversions_are_cached() {
        let elapsed = Duration::new(TimeDelta::seconds(7_200));
        assert_eq!(elapsed.cached_units(), 0);

        assert_eq!(elapsed.hours(), 2);
        assert_eq!(elapsed.hours(), 2);
        assert_eq!(elapsed.cached_units(), 1);

        assert_eq!(elapsed.get(TimeUnit::Minutes), 120);
        assert_eq!(elapsed.cached_units(), 2);
    }

    /// Validates string-keyed access.
    ///
    /// Assertions:
    /// - Confirms names and suffixes resolve.
    /// - Confirms an unknown name fails with `UnknownUnit`.
    #[test]
    fn test_get_named() {
        let elapsed = Duration::new(TimeDelta::seconds(90));
        assert_eq!(elapsed.get_named("minutes").unwrap(), 1);
        assert_eq!(elapsed.get_named("ms").unwrap(), 90_000);
        let unknown = elapsed.get_named("fortnights");
        assert_eq!(unknown, Err(DateError::UnknownUnit("fortnights".into())));
    }

    /// Validates directly constructed negative spans.
    ///
    /// Assertions:
    /// - Confirms the sign is kept and conversions truncate toward zero.
    #[test]
    fn test_negative_span_keeps_sign() {
        let elapsed = Duration::new(TimeDelta::seconds(-90));
        assert!(elapsed.is_negative());
        assert_eq!(elapsed.minutes(), -1);
        assert_eq!(elapsed.seconds(), -90);
    }

    /// Validates `difference` symmetry.
    ///
    /// Assertions:
    /// - Confirms argument order does not matter.
    /// - Ensures the result is never negative.
    #[test]
    fn test_difference_is_commutative() {
        let a = TimeValue::from(wall(22, 16, 54, 58));
        let b = TimeValue::from(wall(21, 14, 51, 54));

        let forward = difference(&a, &b).unwrap();
        let backward = difference(&b, &a).unwrap();
        assert_eq!(forward, backward);
        assert!(!backward.is_negative());
        assert_eq!(forward.to_string(), "1 day, 2:03:04");
    }

    /// Validates `difference` across offsets and awareness.
    ///
    /// Assertions:
    /// - Confirms aware values compare by instant.
    /// - Confirms mixing naive and aware fails.
    #[test]
    fn test_difference_aware_and_mixed() {
        let utc = TimeValue::from(Utc.with_ymd_and_hms(2025, 6, 22, 12, 0, 0).unwrap());
        let plus_two = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let same_instant = TimeValue::Aware(plus_two.with_ymd_and_hms(2025, 6, 22, 14, 0, 0).unwrap());
        assert_eq!(difference(&utc, &same_instant).unwrap().seconds(), 0);

        let naive = TimeValue::from(wall(22, 12, 0, 0));
        assert_eq!(difference(&utc, &naive), Err(DateError::MixedAwareness));
    }

    /// Validates display normalization.
    ///
    /// Assertions:
    /// - Confirms plural days and microseconds render.
    /// - Confirms negative spans borrow a day like a clock.
    #[test]
    fn test_display() {
        assert_eq!(Duration::new(TimeDelta::zero()).to_string(), "0:00:00");
        let with_micros = Duration::new(TimeDelta::days(2) + TimeDelta::microseconds(7));
        assert_eq!(with_micros.to_string(), "2 days, 0:00:00.000007");
        assert_eq!(Duration::new(TimeDelta::seconds(-1)).to_string(), "-1 day, 23:59:59");
        assert_eq!(Duration::new(TimeDelta::days(-3)).to_string(), "-3 days, 0:00:00");
    }

    /// Validates the human-readable forms.
    ///
    /// Assertions:
    /// - Confirms compact and verbose output for a mixed span.
    #[test]
    fn test_compact_and_verbose() {
        let elapsed = Duration::new(TimeDelta::seconds(93_784));
        assert_eq!(elapsed.to_compact(), "1d 2h 3m 4s");
        assert_eq!(elapsed.to_verbose(), "1 day 2 hours 3 minutes 4 seconds");
    }
}
