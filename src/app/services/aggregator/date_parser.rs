//! Locale-independent sighting date parsing
//!
//! The export mixes US-style `M/D/YYYY H:MM` stamps with the odd ISO value.
//! Formats are tried in a fixed order so the same text always produces the
//! same instant, whatever the host locale.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use std::borrow::Cow;

/// Date-time formats, most common first
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats, read as midnight
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parse a sighting timestamp into a naive date-time
///
/// A `24:00` clock time is read as midnight at the start of the next day.
/// Returns `None` for anything that is not a real calendar date.
pub fn parse_sighting_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (normalized, next_day) = normalize_end_of_day(value);
    let parsed = parse_with_known_formats(&normalized)?;

    if next_day {
        parsed.checked_add_signed(Duration::days(1))
    } else {
        Some(parsed)
    }
}

/// Rewrite a trailing `24:00` / `24:00:00` as `00:00`
fn normalize_end_of_day(value: &str) -> (Cow<'_, str>, bool) {
    match value.rsplit_once(' ') {
        Some((date, time)) if time == "24:00" || time == "24:00:00" => {
            (Cow::Owned(format!("{} 00:00", date.trim_end())), true)
        }
        _ => (Cow::Borrowed(value), false),
    }
}

fn parse_with_known_formats(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Offsets are dropped; the reported wall-clock time is kept
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.naive_local())
}
