//! Closed set of time units

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A unit an interval can be expressed in or a duration converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// 604 800 seconds
    Weeks,
    /// 86 400 seconds
    Days,
    /// 3 600 seconds
    Hours,
    /// 60 seconds
    Minutes,
    /// The base unit
    Seconds,
    /// 1/1 000 second
    Milliseconds,
    /// 1/1 000 000 second
    Microseconds,
}

impl TimeUnit {
    /// Every unit, largest first
    pub const ALL: [Self; 7] = [
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
    ];

    /// Plural lowercase name, e.g. `"minutes"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }

    /// Short suffix used by [`Interval::parse`](super::Interval::parse)
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Weeks => "w",
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
        }
    }

    /// Position in [`Self::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = DateError;

    /// Accepts plural and singular names and the short suffixes,
    /// case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "w" | "week" | "weeks" => Self::Weeks,
            "d" | "day" | "days" => Self::Days,
            "h" | "hour" | "hours" => Self::Hours,
            "m" | "min" | "minute" | "minutes" => Self::Minutes,
            "s" | "sec" | "second" | "seconds" => Self::Seconds,
            "ms" | "millisecond" | "milliseconds" => Self::Milliseconds,
            "us" | "microsecond" | "microseconds" => Self::Microseconds,
            _ => return Err(DateError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}
