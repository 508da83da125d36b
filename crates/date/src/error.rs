//! Error types for date and duration operations
//!
//! Every fallible operation in this crate returns [`DateResult`]. The
//! variants mirror the few ways a date shortcut can fail:
//!
//! | Pattern | Variant | When |
//! |---------|---------|------|
//! | **Unknown unit** | `UnknownUnit` | A unit name outside `weeks..microseconds` |
//! | **Interval syntax** | `InvalidInterval`, `InvalidNumber`, `EmptyInterval` | `Interval::parse` input |
//! | **Format** | `Format` | A pattern the formatter rejects |
//! | **Mixed awareness** | `MixedAwareness` | Subtracting a naive value from an aware one |
//! | **Range** | `OutOfRange` | Interval or result beyond the representable range |

use thiserror::Error;

/// Standard result type using [`DateError`]
pub type DateResult<T> = Result<T, DateError>;

/// Errors raised by resolvers, intervals and durations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Unit name not in the closed set of supported units
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Interval string has a structural problem
    #[error("Invalid interval format: {0}")]
    InvalidInterval(String),

    /// Interval component could not be parsed as an integer
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Interval string was empty or whitespace
    #[error("Empty interval string")]
    EmptyInterval,

    /// Format pattern is malformed or needs data the value does not carry
    #[error("Invalid format pattern '{pattern}'")]
    Format {
        /// The offending pattern
        pattern: String,
    },

    /// Naive and aware values cannot be compared
    #[error("Cannot subtract offset-naive and offset-aware time values")]
    MixedAwareness,

    /// Arithmetic left the representable range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl DateError {
    /// Create a format error for `pattern`
    pub fn format<S: Into<String>>(pattern: S) -> Self {
        Self::Format { pattern: pattern.into() }
    }

    /// Create an out-of-range error
    pub fn out_of_range<S: Into<String>>(message: S) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Create an interval syntax error
    pub fn invalid_interval<S: Into<String>>(message: S) -> Self {
        Self::InvalidInterval(message.into())
    }

    /// Whether the error came from caller input rather than arithmetic limits
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::OutOfRange(_))
    }
}
