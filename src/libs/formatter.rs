//! Duration and timestamp formatting for human-readable output.
//!
//! Both the live elapsed display of an active timer and the finalized duration
//! of an entry use the same `HH:MM:SS` form, which is also the formatted
//! duration column of the CSV export.
//!
//! ## Format Specifications
//!
//! ### Duration Format
//! - Hours are zero-padded to at least 2 digits and never wrap at 24
//! - Minutes and seconds are always 2 digits
//! - Negative durations are treated as "00:00:00"
//!
//! ### Examples
//! - 3661 seconds → "01:02:01"
//! - 90000 seconds → "25:00:00"
//! - 0 seconds → "00:00:00"
//!
//! ```rust
//! use timer::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(3722), "01:02:02");
//! ```

use chrono::NaiveDateTime;

/// Timestamp layout used by persisted documents and CSV export.
///
/// Sorts lexicographically in chronological order and parses back with
/// `NaiveDateTime::parse_from_str` using the same pattern.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Hours are unbounded: a duration of 100 hours renders as `100:00:00`.
/// Negative input is clamped to zero.
///
/// # Examples
///
/// ```rust
/// use timer::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(59), "00:00:59");
/// assert_eq!(format_duration(3600), "01:00:00");
/// assert_eq!(format_duration(-5), "00:00:00");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Renders a timestamp in the sortable ISO-8601 layout of [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Short date for tables, e.g. `2025-01-15`.
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Date and time to the second for status output, e.g. `2025-01-15 09:30:00`.
pub fn format_datetime(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
