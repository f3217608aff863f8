//! Serde adapter for the wire date pattern `yyyy-MM-dd'T'HH:mm:ss.SSS`.
//!
//! Timestamps travel without a timezone suffix and with exactly
//! millisecond precision; values are interpreted as UTC. Use with
//! `#[serde(with = "datetime", default)]` on `Option<Timestamp>`
//! fields so a missing key and an explicit `null` both read as `None`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};
use timekeeper_core::types::Timestamp;

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => serializer.serialize_str(&timestamp.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    value
        .map(|text| {
            NaiveDateTime::parse_from_str(&text, FORMAT)
                .map(|naive| naive.and_utc())
                .map_err(serde::de::Error::custom)
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "super", default)]
        at: Option<Timestamp>,
    }

    #[test]
    fn serializes_with_millisecond_precision_and_no_offset() {
        let probe = Probe {
            at: Some(Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 15).unwrap()),
        };
        assert_eq!(
            serde_json::to_string(&probe).unwrap(),
            r#"{"at":"2024-03-07T09:30:15.000"}"#
        );
    }

    #[test]
    fn round_trips() {
        let json = r#"{"at":"2024-03-07T09:30:15.123"}"#;
        let probe: Probe = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&probe).unwrap(), json);
    }

    #[test]
    fn missing_and_null_both_read_as_none() {
        let missing: Probe = serde_json::from_str("{}").unwrap();
        let null: Probe = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(missing.at, None);
        assert_eq!(null.at, None);
    }

    #[test]
    fn rejects_other_formats() {
        assert!(serde_json::from_str::<Probe>(r#"{"at":"2024-03-07T09:30:15"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"at":"2024-03-07"}"#).is_err());
    }
}
