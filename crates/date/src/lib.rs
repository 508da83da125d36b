//! Date and time shortcuts over `chrono`.
//!
//! Resolve the current time as a naive or aware value on the local or UTC
//! clock, shift it by an interval, render it as a string, and measure the
//! span between two values with truncated unit conversions.
//!
//! # Modules
//!
//! - [`config`]: the naive/utc/format knobs and their environment seeding
//! - [`time`]: clocks, values, intervals, the resolver and durations
//! - [`defaults`]: a process-wide configuration with free-function shortcuts
//! - [`error`]: the crate error type
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`DateConfig`], [`Interval`]
//!   and [`TimeUnit`]

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod time;

// Re-export commonly used types and functions for convenience
pub use config::DateConfig;
pub use defaults::{time_ago, time_between, time_in, time_now, timestamp};
pub use error::{DateError, DateResult};
pub use time::{
    difference, Clock, Duration, Interval, MockClock, SystemClock, TimeOptions, TimeResolver,
    TimeUnit, TimeValue,
};
