//! Date handling at the wire and display boundaries.
//!
//! The backend exchanges publication dates as ISO `yyyy-MM-dd` strings but
//! answers with whatever its `Date` serializer produces, which may carry a
//! full timestamp. Display uses the fixed `dd/MM/yyyy` regional format.

use chrono::{DateTime, NaiveDate, Utc};

/// Format sent to the backend and produced by `<input type="date">`.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed regional display format.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a wire date, tolerating a full RFC 3339 timestamp by taking its
/// date part.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.date_naive())
}

pub fn to_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn display_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Serde adapter for date fields exchanged as `yyyy-MM-dd`.
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_wire_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_wire_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}
