//! Timestamp parsing and the reader-facing date format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an API timestamp. Offsets are honoured; timestamps without one are
/// taken as UTC; bare dates mean midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    tracing::debug!(raw, "unparseable timestamp");
    None
}

/// Reader-facing date, e.g. `Jan 5 2024`. Unparseable input is returned as
/// is; blank input yields `None`.
pub fn display_date(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(match parse_timestamp(raw) {
        Some(ts) => ts.format("%b %-d %Y").to_string(),
        None => raw.trim().to_string(),
    })
}

/// `YYYY-MM-DD` for date inputs and form fields.
pub fn input_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|ts| ts.format("%Y-%m-%d").to_string())
}

/// ISO timestamp sent for a date picked in an admin form.
pub fn date_to_iso(input: &str) -> Option<String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_api_shapes() {
        let expected = "2024-01-05T10:30:00+00:00";
        for raw in ["2024-01-05T10:30:00Z", "2024-01-05T10:30:00", "2024-01-05 10:30:00.000"] {
            let parsed = parse_timestamp(raw).expect(raw);
            assert_eq!(parsed.to_rfc3339(), expected, "{raw}");
        }
        let offset = parse_timestamp("2024-01-05T16:00:00+05:30").expect("offset");
        assert_eq!(offset.to_rfc3339(), expected);
        assert!(parse_timestamp("2024-01-05").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn display_matches_site_format() {
        assert_eq!(display_date("2024-01-05").as_deref(), Some("Jan 5 2024"));
        assert_eq!(display_date("2023-12-31T23:59:00Z").as_deref(), Some("Dec 31 2023"));
        assert_eq!(display_date("soon").as_deref(), Some("soon"));
        assert_eq!(display_date("  "), None);
    }

    #[test]
    fn form_dates_round_trip() {
        assert_eq!(input_date("2024-02-10T08:00:00Z").as_deref(), Some("2024-02-10"));
        assert_eq!(date_to_iso("2024-02-10").as_deref(), Some("2024-02-10T00:00:00.000Z"));
        assert_eq!(date_to_iso("10/02/2024"), None);
    }
}
