//! Generic protobuf ↔ domain conversions
//!
//! The courses schema carries identifiers as canonical UUID strings and
//! timestamps as RFC 3339 strings, so these helpers translate between those
//! wire forms and `Uuid` / `DateTime<Utc>`. Parse failures come back as
//! `String` messages that name the offending field, ready for
//! [`ToTonicResult::to_tonic`](crate::ToTonicResult::to_tonic).
//!
//! ## Usage
//!
//! ```ignore
//! use grpc_client::conversions::*;
//! use grpc_client::ToTonicResult;
//!
//! let course_id = parse_uuid("course_id", &request.course_id).to_tonic()?;
//! let image_id = parse_opt_uuid("image_id", request.image_id.as_deref()).to_tonic()?;
//! let created_at = datetime_to_rfc3339(course.created_at);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

// ============================================================================
// UUID Conversions (protobuf string ↔ Uuid)
// ============================================================================

/// Parse a UUID string field, naming the field on failure.
pub fn parse_uuid(field: &str, value: &str) -> Result<Uuid, String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(format!("{field} is required"));
  }
  Uuid::parse_str(trimmed).map_err(|e| format!("{field} must be a valid UUID: {e}"))
}

/// Parse an optional UUID string field. Absent and blank values are `None`.
pub fn parse_opt_uuid(field: &str, value: Option<&str>) -> Result<Option<Uuid>, String> {
  match value.map(str::trim) {
    None | Some("") => Ok(None),
    Some(v) => parse_uuid(field, v).map(Some),
  }
}

/// Parse every entry of a repeated UUID field.
pub fn parse_uuids<S: AsRef<str>>(field: &str, values: &[S]) -> Result<Vec<Uuid>, String> {
  values.iter().map(|v| parse_uuid(field, v.as_ref())).collect()
}

pub fn uuid_to_string(uuid: Uuid) -> String {
  uuid.to_string()
}

pub fn opt_uuid_to_string(uuid: Option<Uuid>) -> Option<String> {
  uuid.map(uuid_to_string)
}

// ============================================================================
// Timestamp Conversions (RFC 3339 ↔ DateTime<Utc>)
// ============================================================================

/// Render a timestamp as RFC 3339 UTC with `Z` and the shortest exact
/// sub-second precision.
pub fn datetime_to_rfc3339(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an RFC 3339 timestamp with any offset into UTC.
pub fn rfc3339_to_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, String> {
  DateTime::parse_from_rfc3339(value.trim())
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| format!("{field} must be an RFC 3339 timestamp: {e}"))
}
