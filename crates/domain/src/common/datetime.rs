//! Timestamp parsing and display helpers.
//!
//! Server timestamps are only ever shown to the user, never compared, so
//! unparseable values degrade to the raw string instead of an error.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parses a server timestamp.
///
/// Accepts RFC 3339 and the offset-less ISO / SQL forms many backends emit
/// (treated as UTC).
///
/// # Examples
///
/// ```
/// use mediadmin_domain::common::parse_timestamp;
/// use chrono::Datelike;
///
/// let dt = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
///
/// assert!(parse_timestamp("2024-01-15 10:30:00").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Formats a server timestamp as a short date (`Jan 15, 2024`) in the
/// platform's local zone. Unparseable input is returned verbatim.
pub fn format_display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Local).format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2024-03-10T08:15:00+02:00").unwrap();
        assert_eq!(dt.hour(), 6);
        assert_eq!(dt.day(), 10);
    }

    #[test]
    fn parses_sql_style_timestamps_as_utc() {
        let dt = parse_timestamp("2023-12-31 23:59:59").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.second(), 59);
    }

    #[test]
    fn parses_fractional_seconds_without_offset() {
        let dt = parse_timestamp("2024-06-01T12:00:00.123456").unwrap();
        assert_eq!(dt.month(), 6);
    }

    #[test]
    fn display_date_uses_short_month_and_year() {
        // Midday keeps the calendar day stable for any local offset.
        let shown = format_display_date("2024-01-15T12:00:00Z");
        assert!(shown.starts_with("Jan 1"), "got {shown}");
        assert!(shown.ends_with(", 2024"), "got {shown}");
    }

    #[test]
    fn display_date_falls_back_to_raw_value() {
        assert_eq!(format_display_date("not a date"), "not a date");
        assert_eq!(format_display_date(""), "");
    }
}
