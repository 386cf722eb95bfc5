//! Frontend Models
//!
//! Appointment records as stored in the clinic's realtime database.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One appointment entry (read-only snapshot from the data store)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub patient_full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub appointment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub service_ref: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<AppointmentDate>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub checked_in: Option<bool>,
}

impl AppointmentRecord {
    /// Bare record with only an id (all optional fields absent)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            patient_full_name: None,
            email_address: None,
            contact_number: None,
            appointment_type: None,
            service_ref: None,
            appointment_date: None,
            status: None,
            checked_in: None,
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in.unwrap_or(false)
    }

    /// Fields the search box matches against, in display order
    pub fn searchable_fields(&self) -> [Option<&str>; 6] {
        [
            self.patient_full_name.as_deref(),
            self.email_address.as_deref(),
            self.contact_number.as_deref(),
            self.appointment_type.as_deref(),
            self.status.as_deref(),
            self.service_ref.as_deref(),
        ]
    }
}

/// Stored appointment timestamp
///
/// Accepts an ISO-8601 string, epoch milliseconds, or a `{ seconds, nanoseconds }` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AppointmentDate {
    Text(String),
    Millis(i64),
    Timestamp {
        seconds: i64,
        #[serde(default)]
        nanoseconds: u32,
    },
}

impl AppointmentDate {
    /// Resolve to a UTC instant (None if the text is not a recognised date)
    ///
    /// Date-time text without an offset is wall-clock time at `local`; date-only
    /// text is midnight UTC.
    pub fn to_utc(&self, local: &FixedOffset) -> Option<DateTime<Utc>> {
        match self {
            AppointmentDate::Text(text) => parse_date_text(text.trim(), local),
            AppointmentDate::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            AppointmentDate::Timestamp { seconds, nanoseconds } => {
                Utc.timestamp_opt(*seconds, *nanoseconds).single()
            }
        }
    }
}

fn parse_date_text(text: &str, local: &FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return local
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Tolerant decoders for loosely-typed store values
mod lenient {
    use super::*;

    fn scalar_to_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_to_string))
    }

    /// `true`/`false`, `1`/`0` or their string forms; anything else reads as unset
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Bool(b)) => Some(b),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!("invalid appointment id: {}", other))),
        }
    }
}
