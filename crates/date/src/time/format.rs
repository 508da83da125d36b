//! Human-readable span formatting
//!
//! Negative spans render as their magnitude prefixed with `-`.

use chrono::TimeDelta;

/// Format a span compactly
///
/// Leading zero components are dropped; spans under a second fall back to
/// milliseconds or microseconds.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use shortcuts_date::time::format::format_compact;
///
/// assert_eq!(format_compact(TimeDelta::seconds(5)), "5s");
/// assert_eq!(format_compact(TimeDelta::seconds(3665)), "1h 1m 5s");
/// assert_eq!(format_compact(TimeDelta::milliseconds(-250)), "-250ms");
/// ```
pub fn format_compact(delta: TimeDelta) -> String {
    let (sign, delta) = split_sign(delta);
    let total_secs = delta.num_seconds();

    if total_secs == 0 {
        let millis = delta.num_milliseconds();
        if millis == 0 {
            return format!("{sign}{}us", delta.num_microseconds().unwrap_or(0));
        }
        return format!("{sign}{millis}ms");
    }

    let components = [
        (total_secs / 86_400, "d"),
        ((total_secs % 86_400) / 3_600, "h"),
        ((total_secs % 3_600) / 60, "m"),
        (total_secs % 60, "s"),
    ];
    let start_index =
        components.iter().position(|(value, _)| *value > 0).unwrap_or(components.len() - 1);

    let body = components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{sign}{body}")
}

/// Format a span in words, omitting zero components
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use shortcuts_date::time::format::format_verbose;
///
/// assert_eq!(format_verbose(TimeDelta::seconds(1)), "1 second");
/// assert_eq!(format_verbose(TimeDelta::seconds(3665)), "1 hour 1 minute 5 seconds");
/// ```
pub fn format_verbose(delta: TimeDelta) -> String {
    let (sign, delta) = split_sign(delta);
    let total_secs = delta.num_seconds();

    if total_secs == 0 {
        let millis = delta.num_milliseconds();
        if millis == 0 {
            let micros = delta.num_microseconds().unwrap_or(0);
            return format!("{sign}{}", plural(micros, "microsecond"));
        }
        return format!("{sign}{}", plural(millis, "millisecond"));
    }

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }

    format!("{sign}{}", parts.join(" "))
}

fn plural(value: i64, unit: &str) -> String {
    format!("{value} {unit}{}", if value == 1 { "" } else { "s" })
}

fn split_sign(delta: TimeDelta) -> (&'static str, TimeDelta) {
    if delta < TimeDelta::zero() {
        ("-", delta.abs())
    } else {
        ("", delta)
    }
}
