//! Intervals built from independent unit magnitudes
//!
//! An [`Interval`] records a signed amount per unit and sums them into a
//! single [`TimeDelta`] only when applied. Intervals can also be parsed from
//! compact strings such as `"1h 30m"`.

use std::str::FromStr;

use chrono::TimeDelta;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::unit::TimeUnit;
use crate::error::{DateError, DateResult};

/// Signed magnitudes per unit, summed into one span on use
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use shortcuts_date::time::Interval;
///
/// let interval = Interval::new().hours(1).minutes(30);
/// assert_eq!(interval.to_delta().unwrap(), TimeDelta::minutes(90));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Interval {
    /// Weeks to apply
    pub weeks: i64,
    /// Days to apply
    pub days: i64,
    /// Hours to apply
    pub hours: i64,
    /// Minutes to apply
    pub minutes: i64,
    /// Seconds to apply
    pub seconds: i64,
    /// Milliseconds to apply
    pub milliseconds: i64,
    /// Microseconds to apply
    pub microseconds: i64,
}

impl Interval {
    /// Create an empty interval
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
            microseconds: 0,
        }
    }

    /// Create an interval holding `amount` of a single unit
    #[must_use]
    pub fn from_unit(unit: TimeUnit, amount: i64) -> Self {
        let mut interval = Self::new();
        *interval.slot_mut(unit) = amount;
        interval
    }

    /// Split a span into whole seconds and remaining microseconds
    ///
    /// Sub-microsecond precision is dropped.
    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        let seconds = delta.num_seconds();
        let remainder = delta - TimeDelta::seconds(seconds);
        Self { seconds, microseconds: remainder.num_microseconds().unwrap_or(0), ..Self::new() }
    }

    /// Set the weeks magnitude
    #[must_use]
    pub const fn weeks(mut self, weeks: i64) -> Self {
        self.weeks = weeks;
        self
    }

    /// Set the days magnitude
    #[must_use]
    pub const fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Set the hours magnitude
    #[must_use]
    pub const fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Set the minutes magnitude
    #[must_use]
    pub const fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Set the seconds magnitude
    #[must_use]
    pub const fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Set the milliseconds magnitude
    #[must_use]
    pub const fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    /// Set the microseconds magnitude
    #[must_use]
    pub const fn microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Magnitude recorded for `unit`
    #[must_use]
    pub const fn get(&self, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Weeks => self.weeks,
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Milliseconds => self.milliseconds,
            TimeUnit::Microseconds => self.microseconds,
        }
    }

    /// Add `amount` to the magnitude recorded for `unit`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the magnitude overflows.
    pub fn add_unit(mut self, unit: TimeUnit, amount: i64) -> DateResult<Self> {
        let slot = self.slot_mut(unit);
        *slot = slot
            .checked_add(amount)
            .ok_or_else(|| DateError::out_of_range(format!("{amount} {unit} overflows")))?;
        Ok(self)
    }

    /// Whether every magnitude is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        TimeUnit::ALL.iter().all(|unit| self.get(*unit) == 0)
    }

    /// Sum all magnitudes into one signed span
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if a magnitude or the sum exceeds
    /// what [`TimeDelta`] can represent.
    pub fn to_delta(&self) -> DateResult<TimeDelta> {
        TimeUnit::ALL.iter().try_fold(TimeDelta::zero(), |total, unit| {
            let amount = self.get(*unit);
            unit_delta(*unit, amount).and_then(|delta| total.checked_add(&delta)).ok_or_else(|| {
                DateError::out_of_range(format!("{amount} {unit} overflows interval"))
            })
        })
    }

    /// Parse an interval string
    ///
    /// Components are an integer (optionally signed) followed by a unit
    /// suffix or name; whitespace between components is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortcuts_date::time::Interval;
    ///
    /// let interval = Interval::parse("1h 30m 250ms").unwrap();
    /// assert_eq!(interval, Interval::new().hours(1).minutes(30).milliseconds(250));
    /// ```
    ///
    /// # Errors
    /// - `DateError::EmptyInterval` for an empty string
    /// - `DateError::InvalidInterval` for a unit without a number, a number
    ///   without a unit, or an unexpected character
    /// - `DateError::InvalidNumber` for an unparseable amount
    /// - `DateError::UnknownUnit` for an unsupported unit
    pub fn parse(s: &str) -> DateResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateError::EmptyInterval);
        }

        let mut interval = Self::new();
        let mut number = String::new();
        let mut unit = String::new();
        // Whitespace ends the current token
        let mut separated = false;

        for ch in s.chars() {
            if ch.is_whitespace() {
                separated = true;
                continue;
            }

            let is_sign = ch == '-' || ch == '+';
            let starts_number =
                ch.is_ascii_digit() || (is_sign && (number.is_empty() || !unit.is_empty()));
            if starts_number {
                if !unit.is_empty() {
                    interval = interval.push_component(&number, &unit)?;
                    number.clear();
                    unit.clear();
                } else if separated && !number.is_empty() {
                    return Err(DateError::invalid_interval("Missing unit after number"));
                }
                number.push(ch);
            } else if ch.is_ascii_alphabetic() {
                if number.is_empty() || (separated && !unit.is_empty()) {
                    return Err(DateError::invalid_interval("Expected number before unit"));
                }
                unit.push(ch);
            } else {
                return Err(DateError::invalid_interval(format!("Unexpected character '{ch}'")));
            }
            separated = false;
        }

        if !number.is_empty() {
            interval = interval.push_component(&number, &unit)?;
        }

        Ok(interval)
    }

    fn push_component(self, number: &str, unit: &str) -> DateResult<Self> {
        if unit.is_empty() {
            return Err(DateError::invalid_interval("Missing unit after number"));
        }

        let amount: i64 =
            number.parse().map_err(|_| DateError::InvalidNumber(number.to_string()))?;
        let unit: TimeUnit = unit.parse()?;
        self.add_unit(unit, amount)
    }

    fn slot_mut(&mut self, unit: TimeUnit) -> &mut i64 {
        match unit {
            TimeUnit::Weeks => &mut self.weeks,
            TimeUnit::Days => &mut self.days,
            TimeUnit::Hours => &mut self.hours,
            TimeUnit::Minutes => &mut self.minutes,
            TimeUnit::Seconds => &mut self.seconds,
            TimeUnit::Milliseconds => &mut self.milliseconds,
            TimeUnit::Microseconds => &mut self.microseconds,
        }
    }
}

impl FromStr for Interval {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Interval> for TimeDelta {
    type Error = DateError;

    fn try_from(interval: Interval) -> Result<Self, Self::Error> {
        interval.to_delta()
    }
}

fn unit_delta(unit: TimeUnit, amount: i64) -> Option<TimeDelta> {
    match unit {
        TimeUnit::Weeks => TimeDelta::try_weeks(amount),
        TimeUnit::Days => TimeDelta::try_days(amount),
        TimeUnit::Hours => TimeDelta::try_hours(amount),
        TimeUnit::Minutes => TimeDelta::try_minutes(amount),
        TimeUnit::Seconds => TimeDelta::try_seconds(amount),
        TimeUnit::Milliseconds => TimeDelta::try_milliseconds(amount),
        TimeUnit::Microseconds => Some(TimeDelta::microseconds(amount)),
    }
}
