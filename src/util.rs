use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Normalize a date-valued field to `YYYY-MM-DD` for drafts and display.
///
/// The backend is loose about date formats (RFC 3339 timestamps, bare
/// dates); anything unparseable is passed through unchanged rather than
/// turned into an error, since this is a display concern only.
pub fn normalize_date(value: &str) -> String {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    // %.f also covers offset-less timestamps with fractional seconds,
    // the usual Java LocalDateTime serialization
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }

    value.to_string()
}
