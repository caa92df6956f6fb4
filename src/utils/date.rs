use chrono::{DateTime, NaiveDate};

use crate::consts::DATE_FORMAT;

/// Render a service timestamp as a calendar date ("2024-03-01").
/// Anything unparseable is shown as-is.
pub(crate) fn format_added(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(DATE_FORMAT).to_string();
    }
    if let Some(prefix) = raw.get(..10)
        && let Ok(d) = NaiveDate::parse_from_str(prefix, DATE_FORMAT)
    {
        return d.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}
