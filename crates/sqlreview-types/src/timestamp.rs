use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server timestamp.
///
/// The service emits both offset-aware RFC 3339 strings and naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` values depending on the backing database.
/// Naive values are taken as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| Self(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_naive_as_utc() {
        let ts = Timestamp::parse("2024-03-01T08:30:00.123456").unwrap();
        assert_eq!(
            ts.as_datetime().date_naive(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().date_naive()
        );
    }

    #[test]
    fn test_parse_offset_aware() {
        let ts = Timestamp::parse("2024-03-01T08:30:00+08:00").unwrap();
        assert_eq!(ts.as_datetime(), Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_none());
        let result: Result<Timestamp, _> = serde_json::from_str("\"not-a-date\"");
        assert!(result.is_err());
    }
}
