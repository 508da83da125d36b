//! Process-wide default configuration and free-function shortcuts
//!
//! The configuration is seeded from the environment on first use and can be
//! replaced at any time. Set it once at startup, before other threads start
//! resolving times; a writer racing readers is not an error, but in-flight
//! calls see either the old or the new configuration.
//!
//! # Examples
//!
//! ```
//! use shortcuts_date::defaults::{self, time_in, time_now};
//! use shortcuts_date::time::{Interval, TimeOptions};
//!
//! defaults::update_config(|config| config.naive = false);
//! assert!(!time_now(TimeOptions::new()).is_naive());
//!
//! let expires = time_in(&Interval::new().seconds(5), TimeOptions::new().utc(true)).unwrap();
//! assert_eq!(expires.offset().unwrap().local_minus_utc(), 0);
//! # defaults::reset_config();
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::DateConfig;
use crate::error::DateResult;
use crate::time::{Duration, Interval, TimeOptions, TimeResolver, TimeValue};

static CONFIG: Lazy<RwLock<DateConfig>> = Lazy::new(|| RwLock::new(DateConfig::from_env()));

/// Snapshot of the current default configuration
pub fn config() -> DateConfig {
    CONFIG.read().clone()
}

/// Replace the default configuration
pub fn set_config(config: DateConfig) {
    tracing::debug!(
        naive = config.naive,
        utc = config.utc,
        format = ?config.format,
        "Default date configuration replaced"
    );
    *CONFIG.write() = config;
}

/// Modify the default configuration in place
pub fn update_config<F>(update: F)
where
    F: FnOnce(&mut DateConfig),
{
    let mut config = CONFIG.write();
    update(&mut config);
    tracing::debug!(naive = config.naive, utc = config.utc, "Default date configuration updated");
}

/// Re-read the default configuration from the environment
pub fn reset_config() {
    set_config(DateConfig::from_env());
}

/// Resolver over a snapshot of the default configuration
pub fn resolver() -> TimeResolver {
    TimeResolver::new(config())
}

/// Current time
///
/// Pass `TimeOptions::new().naive(false)` for an aware value or
/// `.utc(true)` for the UTC clock.
pub fn time_now(options: TimeOptions) -> TimeValue {
    resolver().now(options)
}

/// Future time `interval` from now
///
/// # Errors
/// Returns `DateError::OutOfRange` on overflow.
pub fn time_in(interval: &Interval, options: TimeOptions) -> DateResult<TimeValue> {
    resolver().future(interval, options)
}

/// Past time `interval` ago
///
/// # Errors
/// Returns `DateError::OutOfRange` on overflow.
pub fn time_ago(interval: &Interval, options: TimeOptions) -> DateResult<TimeValue> {
    resolver().past(interval, options)
}

/// Current time as a string
///
/// # Errors
/// Returns `DateError::Format` for a malformed pattern.
pub fn timestamp(format: Option<&str>, utc: Option<bool>) -> DateResult<String> {
    resolver().render(format, utc)
}

/// Absolute span between two time values
///
/// # Errors
/// Returns `DateError::MixedAwareness` when one value is naive and the other
/// aware.
pub fn time_between(a: &TimeValue, b: &TimeValue) -> DateResult<Duration> {
    Duration::between(a, b)
}

#[cfg(test)]
mod tests {
    //! Unit tests for defaults.
    use parking_lot::Mutex;

    use super::*;
    use crate::config::NAIVE_FORMAT;

    static CONFIG_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// Validates replacing and restoring the default configuration.
    ///
    /// Assertions:
    /// - Confirms `set_config` is visible through `config`.
    /// - Confirms `update_config` edits in place.
    #[test]
    fn test_set_and_update_config() {
        let _guard = CONFIG_LOCK.lock();
        let original = config();

        set_config(DateConfig::new().with_utc(true));
        assert!(config().utc);

        update_config(|config| config.format = Some("%H".to_string()));
        assert_eq!(config().format.as_deref(), Some("%H"));
        assert!(config().utc);

        set_config(original);
    }

    /// Validates that shortcuts follow the default configuration.
    ///
    /// Assertions:
    /// - Confirms naive and aware defaults are honored by `time_now`.
    /// - Confirms `time_in` and `time_ago` bracket `time_now`.
    #[test]
    fn test_shortcuts_follow_config() {
        let _guard = CONFIG_LOCK.lock();
        let original = config();

        set_config(DateConfig::new().with_naive(false).with_utc(true));
        let now = time_now(TimeOptions::new());
        assert_eq!(now.offset().unwrap().local_minus_utc(), 0);

        let interval = Interval::new().minutes(5);
        let ahead = time_in(&interval, TimeOptions::new()).unwrap();
        let behind = time_ago(&interval, TimeOptions::new()).unwrap();
        let span = time_between(&ahead, &behind).unwrap().delta();
        assert!(span > chrono::TimeDelta::minutes(9));
        assert!(span <= chrono::TimeDelta::minutes(10));
        assert!(ahead.signed_since(&now).unwrap() > chrono::TimeDelta::minutes(4));

        set_config(original);
    }

    /// Validates the default timestamp shape.
    ///
    /// Assertions:
    /// - Confirms the naive default pattern yields `YYYY-MM-DDTHH:MM:SS.ffffff`.
    #[test]
    fn test_timestamp_default_shape() {
        let _guard = CONFIG_LOCK.lock();
        let original = config();

        set_config(DateConfig::new());
        let rendered = timestamp(None, None).unwrap();
        assert_eq!(config().default_format(), NAIVE_FORMAT);
        assert_eq!(rendered.len(), "2025-06-22T16:54:58.507887".len());
        assert_eq!(&rendered[10..11], "T");

        set_config(original);
    }
}
