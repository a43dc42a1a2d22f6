use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(FORMAT).to_string()
}

/// Format a timestamp as an ISO 8601 / RFC 3339 string
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a timestamp string in either the custom format or RFC 3339
pub fn parse_flexible(s: &str) -> AppResult<DateTime<Utc>> {
    // First, try parsing our custom format.
    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(s, FORMAT) {
        return Ok(naive_dt.and_utc());
    }
    // If that fails, try the RFC 3339 format.
    s.parse::<DateTime<Utc>>()
        .map_err(|e| AppError::InvalidArgument(format!("Unparseable timestamp '{}': {}", s, e)))
}
