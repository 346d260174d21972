use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Accepted date-only layouts, tried in order after RFC 3339.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// How an unparseable post date is handled when the source is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Sort the post as if it carried the minimum instant.
    #[default]
    TreatAsMinimum,
    /// Refuse the whole source with `InvalidDateFormat`.
    Reject,
}

/// Parses a post date into a comparable UTC instant.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, `M/D/YYYY` and offset-less
/// `YYYY-MM-DDTHH:MM:SS`. Date-only values resolve to midnight.
pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
