//! ISO-8601 timestamps in UTC.

use chrono::{DateTime, Utc};

/// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, e.g. `2024-03-05T07:08:09.123+0000`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Formats `instant` with millisecond precision and an RFC 822 `+0000` zone.
#[must_use]
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}

/// Current wall-clock time formatted by [`format_date`].
#[must_use]
pub fn current_date() -> String {
    format_date(Utc::now())
}
