//! Treatment events read from the host's event log.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An event suitable for recency evaluation.
///
/// This trait allows evaluation to work with different event
/// representations (host records, database rows, or test fixtures).
pub trait RecencyEvent {
    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Dose carried by the event, if any.
    fn dose(&self) -> Option<f64> {
        None
    }

    /// Free-form notes attached to the event, if any.
    fn notes(&self) -> Option<&str> {
        None
    }
}

/// A recorded treatment, as supplied by the host's event log.
///
/// The log is owned by the caller; evaluation only reads it. Timestamps
/// deserialize from either RFC 3339 strings or epoch-millisecond
/// integers (the `mills` alias), since both appear in the wild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    /// When the treatment occurred.
    #[serde(alias = "mills", deserialize_with = "de_timestamp")]
    pub created_at: DateTime<Utc>,

    /// Insulin amount, if the treatment carried a dose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulin: Option<f64>,

    /// Free-form caregiver notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecencyEvent for Treatment {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn dose(&self) -> Option<f64> {
        self.insulin
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rfc3339_timestamp() {
        let treatment: Treatment = serde_json::from_str(
            r#"{"created_at": "2025-01-01T12:30:00Z", "insulin": 14.0, "notes": "Tresiba"}"#,
        )
        .unwrap();
        assert_eq!(
            treatment.created_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(treatment.dose(), Some(14.0));
        assert_eq!(treatment.notes(), Some("Tresiba"));
    }

    #[test]
    fn deserializes_epoch_millis_via_mills_alias() {
        let treatment: Treatment = serde_json::from_str(r#"{"mills": 1735689600000}"#).unwrap();
        assert_eq!(
            treatment.created_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(treatment.insulin, None);
        assert_eq!(treatment.notes, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let treatment: Treatment = serde_json::from_str(
            r#"{"created_at": "2025-01-01T00:00:00Z", "eventType": "Site Change", "enteredBy": "nurse"}"#,
        )
        .unwrap();
        assert_eq!(treatment.notes, None);
    }

    #[test]
    fn serialization_roundtrip() {
        let treatment = Treatment {
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            insulin: Some(20.0),
            notes: None,
        };
        let json = serde_json::to_string(&treatment).unwrap();
        let parsed: Treatment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, treatment);
    }
}
