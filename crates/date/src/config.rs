//! Resolver configuration
//!
//! [`DateConfig`] holds the three knobs every shortcut consults when a call
//! leaves them unspecified: naive vs aware values, UTC vs local clock, and
//! the default render pattern.
//!
//! ## Environment Variables
//! - `SHORTCUTS_DATE_NAIVE`: produce naive values (`true`/other, default `true`)
//! - `SHORTCUTS_DATE_UTC`: read the UTC clock (`true`/other, default `false`)
//! - `SHORTCUTS_DATE_FORMAT`: default render pattern (unset by default)
//!
//! Boolean variables compare case-insensitively against `"true"`; any other
//! value reads as `false`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable seeding [`DateConfig::naive`]
pub const ENV_NAIVE: &str = "SHORTCUTS_DATE_NAIVE";
/// Environment variable seeding [`DateConfig::utc`]
pub const ENV_UTC: &str = "SHORTCUTS_DATE_UTC";
/// Environment variable seeding [`DateConfig::format`]
pub const ENV_FORMAT: &str = "SHORTCUTS_DATE_FORMAT";

/// Render pattern used when no format is configured and values are naive
pub const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Render pattern used when no format is configured and values are aware
pub const AWARE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Defaults consulted by [`TimeResolver`](crate::time::TimeResolver)
///
/// The injectable replacement for a module-level mutable config: build one
/// at wiring time and hand it to the resolver. [`crate::defaults`] keeps a
/// process-wide instance for the free-function shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateConfig {
    /// Produce values without an attached offset
    pub naive: bool,

    /// Read the UTC clock instead of local wall time
    pub utc: bool,

    /// Default pattern for rendering; `None` picks [`NAIVE_FORMAT`] or
    /// [`AWARE_FORMAT`] from `naive`
    pub format: Option<String>,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self { naive: true, utc: false, format: None }
    }
}

impl DateConfig {
    /// Create the hardcoded default configuration (naive, local, no format)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment
    ///
    /// Unset or unparseable variables fall back to the hardcoded defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        tracing::debug!(
            naive = config.naive,
            utc = config.utc,
            format = ?config.format,
            "Date configuration loaded from environment"
        );
        config
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the real environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let format = lookup(ENV_FORMAT).filter(|f| !f.is_empty());

        Self {
            naive: env_bool(lookup(ENV_NAIVE), defaults.naive),
            utc: env_bool(lookup(ENV_UTC), defaults.utc),
            format,
        }
    }

    /// Set naive mode
    #[must_use]
    pub fn with_naive(mut self, naive: bool) -> Self {
        self.naive = naive;
        self
    }

    /// Set UTC mode
    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Set the default render pattern
    #[must_use]
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Clear the default render pattern
    #[must_use]
    pub fn without_format(mut self) -> Self {
        self.format = None;
        self
    }

    /// Pattern `render` falls back to when the caller passes none
    ///
    /// Configured format first, then the naive or aware default.
    #[must_use]
    pub fn default_format(&self) -> &str {
        match &self.format {
            Some(format) => format.as_str(),
            None if self.naive => NAIVE_FORMAT,
            None => AWARE_FORMAT,
        }
    }
}

/// Parse a boolean variable
///
/// Case-insensitive `"true"` is true, any other value is false, and a
/// missing variable yields `default`.
fn env_bool(value: Option<String>, default: bool) -> bool {
    value.map_or(default, |s| s.eq_ignore_ascii_case("true"))
}
