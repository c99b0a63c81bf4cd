use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::metadata::record::MetadataError;

/// Current UTC time as ISO-8601 with microseconds and a `+00:00` offset,
/// e.g. `2024-01-01T12:30:00.000000+00:00`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse an ISO-8601 / RFC 3339 timestamp. Accepts both `Z` and numeric offsets.
pub fn parse_iso(value: &str) -> Result<DateTime<FixedOffset>, MetadataError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| MetadataError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}
