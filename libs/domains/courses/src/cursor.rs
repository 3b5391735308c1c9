//! Opaque keyset pagination tokens.
//!
//! A token is `"{timestamp}|{id}"` encoded as URL-safe base64 without
//! padding. The timestamp is RFC 3339 UTC with `Z` and as many fractional
//! digits as needed, so microsecond Postgres timestamps survive the trip.
//! Standard padded base64 is accepted on decode for tokens minted before the
//! switch to the URL-safe alphabet.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{CourseError, CourseResult};

const SEPARATOR: char = '|';

/// Decoded position: the exclusive upper bound of the next page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl Cursor {
    pub fn new(timestamp: DateTime<Utc>, id: impl Into<String>) -> Self {
        Self {
            timestamp,
            id: id.into(),
        }
    }

    pub fn encode(&self) -> String {
        encode(self.timestamp, &self.id)
    }

    /// The id as a UUID, for keyset scans over UUID primary keys.
    pub fn uuid(&self) -> CourseResult<Uuid> {
        Uuid::parse_str(&self.id)
            .map_err(|_| CourseError::InvalidCursor(format!("'{}' is not a valid id", self.id)))
    }
}

pub fn encode(timestamp: DateTime<Utc>, id: &str) -> String {
    let raw = format!(
        "{}{SEPARATOR}{id}",
        timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    );
    URL_SAFE_NO_PAD.encode(raw)
}

pub fn decode(token: &str) -> CourseResult<Cursor> {
    let token = token.trim();
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .map_err(|_| CourseError::InvalidCursor("not base64".to_string()))?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| CourseError::InvalidCursor("not UTF-8".to_string()))?;

    let mut fields = raw.split(SEPARATOR);
    let (Some(timestamp), Some(id), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(CourseError::InvalidCursor(
            "expected exactly two fields".to_string(),
        ));
    };
    if id.is_empty() {
        return Err(CourseError::InvalidCursor("empty id".to_string()));
    }

    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| CourseError::InvalidCursor(format!("bad timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok(Cursor::new(timestamp, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_round_trip_whole_seconds() {
        let token = encode(ts("2024-01-15T10:00:00.000Z"), "c1");
        let cursor = decode(&token).unwrap();
        assert_eq!(cursor.timestamp, ts("2024-01-15T10:00:00Z"));
        assert_eq!(cursor.id, "c1");
    }

    #[test]
    fn test_round_trip_keeps_microseconds() {
        let t = Utc.timestamp_opt(1_705_312_800, 123_456_000).unwrap();
        let id = Uuid::new_v4();
        let cursor = decode(&encode(t, &id.to_string())).unwrap();
        assert_eq!(cursor.timestamp, t);
        assert_eq!(cursor.uuid().unwrap(), id);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode(Utc::now(), &Uuid::new_v4().to_string());
        assert!(!token.contains(['+', '/', '=']));
    }

    #[test]
    fn test_accepts_standard_padded_base64() {
        let legacy = STANDARD.encode("2024-01-15T10:00:00.000Z|c1");
        let cursor = decode(&legacy).unwrap();
        assert_eq!(cursor.timestamp, ts("2024-01-15T10:00:00Z"));
        assert_eq!(cursor.id, "c1");
    }

    #[test]
    fn test_malformed_tokens() {
        let bad = [
            "%%%not-base64%%%".to_string(),
            URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]),
            URL_SAFE_NO_PAD.encode("2024-01-15T10:00:00Z"),
            URL_SAFE_NO_PAD.encode("2024-01-15T10:00:00Z|"),
            URL_SAFE_NO_PAD.encode("2024-01-15T10:00:00Z|a|b"),
            URL_SAFE_NO_PAD.encode("yesterday|c1"),
            String::new(),
        ];
        for token in bad {
            assert!(
                matches!(decode(&token), Err(CourseError::InvalidCursor(_))),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_truncated_token() {
        let token = encode(ts("2024-01-15T10:00:00Z"), &Uuid::nil().to_string());
        // 15 bytes: the timestamp is cut off before the separator
        assert!(decode(&token[..20]).is_err());
    }

    #[test]
    fn test_non_uuid_id() {
        let cursor = decode(&encode(Utc::now(), "c1")).unwrap();
        assert!(matches!(cursor.uuid(), Err(CourseError::InvalidCursor(_))));
    }
}
