//! Naive and aware time values

use std::fmt::{self, Write as _};

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Timelike, Utc};

use crate::error::{DateError, DateResult};

/// A point in time, with or without an attached UTC offset
///
/// Values are produced fresh by the resolver and never mutated; shifting
/// returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeValue {
    /// Wall time without offset information
    Naive(NaiveDateTime),
    /// Instant with a fixed UTC offset attached
    Aware(DateTime<FixedOffset>),
}

impl TimeValue {
    /// Whether the value carries no offset
    #[must_use]
    pub const fn is_naive(&self) -> bool {
        matches!(self, Self::Naive(_))
    }

    /// Attached offset, `None` for naive values
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Aware(value) => Some(*value.offset()),
        }
    }

    /// Wall-clock reading, dropping any offset
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(value) => *value,
            Self::Aware(value) => value.naive_local(),
        }
    }

    /// Instant in UTC, `None` for naive values
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Naive(_) => None,
            Self::Aware(value) => Some(value.with_timezone(&Utc)),
        }
    }

    /// Add a span, `None` if the result leaves chrono's range
    #[must_use]
    pub fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        match self {
            Self::Naive(value) => value.checked_add_signed(delta).map(Self::Naive),
            Self::Aware(value) => value.checked_add_signed(delta).map(Self::Aware),
        }
    }

    /// Subtract a span, `None` if the result leaves chrono's range
    #[must_use]
    pub fn checked_sub(self, delta: TimeDelta) -> Option<Self> {
        match self {
            Self::Naive(value) => value.checked_sub_signed(delta).map(Self::Naive),
            Self::Aware(value) => value.checked_sub_signed(delta).map(Self::Aware),
        }
    }

    /// Signed span `self - earlier`
    ///
    /// Aware values compare by instant regardless of their offsets.
    ///
    /// # Errors
    /// Returns `DateError::MixedAwareness` when exactly one side is naive.
    pub fn signed_since(&self, earlier: &Self) -> DateResult<TimeDelta> {
        match (self, earlier) {
            (Self::Naive(a), Self::Naive(b)) => Ok(a.signed_duration_since(*b)),
            (Self::Aware(a), Self::Aware(b)) => Ok(a.signed_duration_since(*b)),
            _ => Err(DateError::MixedAwareness),
        }
    }

    /// Render with a strftime-style pattern
    ///
    /// # Errors
    /// Returns `DateError::Format` when the pattern is malformed or asks for
    /// offset data a naive value does not have.
    pub fn format(&self, pattern: &str) -> DateResult<String> {
        let mut rendered = String::new();
        let result = match self {
            Self::Naive(value) => write!(rendered, "{}", value.format(pattern)),
            Self::Aware(value) => write!(rendered, "{}", value.format(pattern)),
        };
        result.map_err(|_| DateError::format(pattern))?;
        Ok(rendered)
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for TimeValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Aware(value)
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Aware(value.fixed_offset())
    }
}

impl fmt::Display for TimeValue {
    /// `YYYY-MM-DD HH:MM:SS[.ffffff][+HH:MM]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.naive_local();
        write!(f, "{}", local.format("%Y-%m-%d %H:%M:%S"))?;
        let micros = local.nanosecond() / 1_000;
        if micros > 0 {
            write!(f, ".{micros:06}")?;
        }
        if let Self::Aware(value) = self {
            write!(f, "{}", value.format("%:z"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::value.
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn wall(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 22).unwrap().and_hms_micro_opt(h, m, s, micro).unwrap()
    }

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    /// Validates the accessors of naive and aware values.
    ///
    /// Assertions:
    /// - Confirms naive values have no offset or UTC instant.
    /// - Confirms aware values expose offset and UTC instant.
    #[test]
    fn test_accessors() {
        let naive = TimeValue::from(wall(16, 54, 58, 0));
        assert!(naive.is_naive());
        assert_eq!(naive.offset(), None);
        assert_eq!(naive.to_utc(), None);

        let aware = TimeValue::Aware(offset(-4).from_local_datetime(&wall(16, 54, 58, 0)).unwrap());
        assert!(!aware.is_naive());
        assert_eq!(aware.offset(), Some(offset(-4)));
        assert_eq!(aware.naive_local(), wall(16, 54, 58, 0));
        assert_eq!(aware.to_utc().unwrap(), Utc.with_ymd_and_hms(2025, 6, 22, 20, 54, 58).unwrap());
    }

    /// Validates signed subtraction.
    ///
    /// Assertions:
    /// - Confirms aware values in different offsets compare by instant.
    /// - Confirms mixing naive and aware fails with `MixedAwareness`.
    #[test]
    fn test_signed_since() {
        let utc = TimeValue::from(Utc.with_ymd_and_hms(2025, 6, 22, 20, 0, 0).unwrap());
        let eastern = TimeValue::Aware(offset(-4).with_ymd_and_hms(2025, 6, 22, 15, 0, 0).unwrap());
        assert_eq!(utc.signed_since(&eastern).unwrap(), TimeDelta::hours(1));
        assert_eq!(eastern.signed_since(&utc).unwrap(), TimeDelta::hours(-1));

        let naive = TimeValue::from(wall(12, 0, 0, 0));
        assert_eq!(naive.signed_since(&utc), Err(DateError::MixedAwareness));
        assert_eq!(utc.signed_since(&naive), Err(DateError::MixedAwareness));
    }

    /// Validates checked arithmetic.
    ///
    /// Assertions:
    /// - Confirms adding then subtracting returns the original value.
    /// - Ensures overflow yields `None`.
    #[test]
    fn test_checked_arithmetic() {
        let value = TimeValue::from(wall(23, 30, 0, 0));
        let later = value.checked_add(TimeDelta::hours(1)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 6, 23).unwrap().and_hms_opt(0, 30, 0).unwrap();
        assert_eq!(later.naive_local(), expected);
        assert_eq!(later.checked_sub(TimeDelta::hours(1)), Some(value));

        assert!(TimeValue::from(NaiveDateTime::MAX).checked_add(TimeDelta::days(1)).is_none());
    }

    /// Validates pattern formatting.
    ///
    /// Assertions:
    /// - Confirms a date pattern renders the literal date.
    /// - Confirms `%z` on a naive value fails with `Format`.
    /// - Confirms `%z` on an aware value renders the offset.
    #[test]
    fn test_format() {
        let naive = TimeValue::from(wall(16, 54, 58, 507_887));
        assert_eq!(naive.format("%Y-%m-%d").unwrap(), "2025-06-22");
        assert_eq!(naive.format("%H:%M:%S%.6f").unwrap(), "16:54:58.507887");
        assert_eq!(naive.format("%z"), Err(DateError::format("%z")));

        let aware = TimeValue::Aware(offset(2).from_local_datetime(&wall(16, 54, 58, 0)).unwrap());
        assert_eq!(aware.format("%z").unwrap(), "+0200");
    }

    /// Validates display output.
    ///
    /// Assertions:
    /// - Confirms microseconds are omitted when zero.
    /// - Confirms aware values append the offset.
    #[test]
    fn test_display() {
        assert_eq!(TimeValue::from(wall(1, 2, 3, 0)).to_string(), "2025-06-22 01:02:03");
        assert_eq!(TimeValue::from(wall(1, 2, 3, 40)).to_string(), "2025-06-22 01:02:03.000040");

        let aware = TimeValue::Aware(offset(-5).from_local_datetime(&wall(1, 2, 3, 0)).unwrap());
        assert_eq!(aware.to_string(), "2025-06-22 01:02:03-05:00");
    }
}
