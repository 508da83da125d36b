//! Time resolution and duration utilities
//!
//! This module provides:
//! - **[`clock`]**: Real and mock wall clocks
//! - **[`value`]**: Naive and aware time values
//! - **[`unit`]**: The closed set of time units
//! - **[`interval`]**: Multi-unit intervals and their string form
//! - **[`resolver`]**: Current-time resolution, shifting and rendering
//! - **[`duration`]**: Spans with memoized unit conversions
//! - **[`format`]**: Human-readable span formatting
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use shortcuts_date::config::DateConfig;
//! use shortcuts_date::time::{difference, Interval, MockClock, TimeOptions, TimeResolver};
//!
//! let clock = MockClock::new(Utc.with_ymd_and_hms(2025, 6, 22, 16, 54, 58).unwrap());
//! let resolver = TimeResolver::with_clock(DateConfig::default(), clock);
//!
//! let start = resolver.now(TimeOptions::new());
//! let interval = Interval::parse("1h 30m").unwrap();
//! let deadline = resolver.future(&interval, TimeOptions::new()).unwrap();
//!
//! let remaining = difference(&deadline, &start).unwrap();
//! assert_eq!(remaining.minutes(), 90);
//! assert_eq!(resolver.render(Some("%Y-%m-%d"), None).unwrap(), "2025-06-22");
//! ```

pub mod clock;
pub mod duration;
pub mod format;
pub mod interval;
pub mod resolver;
pub mod unit;
pub mod value;

// Re-export commonly used items
pub use clock::{Clock, MockClock, SystemClock};
pub use duration::{difference, Duration};
pub use format::{format_compact, format_verbose};
pub use interval::Interval;
pub use resolver::{ShiftMode, TimeOptions, TimeResolver};
pub use unit::TimeUnit;
pub use value::TimeValue;
