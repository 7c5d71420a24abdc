//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Wrapper around [`Timestamp`] that formats a posting time for calendar
/// output: `YYYY-MM-DD HH:MM UTC`.
///
/// Calendar output is always UTC, matching the scheduler's arithmetic, so
/// the rendered plan is identical regardless of the host timezone.
pub struct ScheduledAt<'a>(pub &'a Timestamp);

impl fmt::Display for ScheduledAt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
