use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Reply status the booking server uses for a confirmed appointment
pub const STATUS_SUCCESS: &str = "success";

/// Bookable time slots, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "1:00 PM")]
    OnePm,
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "3:00 PM")]
    ThreePm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::OnePm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::Noon => "12:00 PM",
            TimeSlot::OnePm => "1:00 PM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::ThreePm => "3:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

/// Body of `POST /book-appointment`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub date: NaiveDate,
    pub time: TimeSlot,
}

/// Reply from the booking server. Only `status` decides the outcome, and
/// any JSON value is accepted there so that odd replies count as a refusal
/// rather than a broken body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingReply {
    pub status: Option<Value>,
    pub message: Option<Value>,
}

impl BookingReply {
    /// Read a reply out of any JSON body.
    ///
    /// Only an object can carry a `status`; arrays, numbers and strings give
    /// an empty reply. `null` has no fields to read and yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(fields) => Some(Self::from_fields(fields)),
            _ => Some(Self::default()),
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        Self {
            status: fields.remove("status"),
            message: fields.remove("message"),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.as_ref().and_then(Value::as_str) == Some(STATUS_SUCCESS)
    }

    /// Status as text, for logging
    pub fn status_text(&self) -> String {
        match &self.status {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<missing>".to_string(),
        }
    }

    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

mod iso_date {
    use crate::dates::format_iso;
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso(*date))
    }
}
