//! Uptime accounting.
//!
//! Uptime is the wall-clock time elapsed since the reporter was built,
//! rendered as `HH:MM:SS`. Hours are never wrapped and grow past two
//! digits when needed; minutes and seconds are always two digits.

use time::OffsetDateTime;

/// Whole seconds between `start` and `now`, clamped at zero.
///
/// A wall clock stepped backwards after startup would otherwise yield a
/// negative duration.
pub fn elapsed_seconds(start: OffsetDateTime, now: OffsetDateTime) -> u64 {
    let secs = (now - start).whole_seconds();
    u64::try_from(secs).unwrap_or(0)
}

/// Format a number of elapsed seconds as `HH:MM:SS`.
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Elapsed time between `start` and `now`, formatted as `HH:MM:SS`.
pub fn uptime_between(start: OffsetDateTime, now: OffsetDateTime) -> String {
    format_uptime(elapsed_seconds(start, now))
}
