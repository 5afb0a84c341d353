use chrono::{DateTime, FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, Utc};
use derive_more::From;

use super::Tz;
use crate::TimestampParseError;

/// Wire format of every emitted timestamp.
pub const UTC_BASIC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S",
];

/// A date/time as handed in by the caller.
///
/// Values without an offset are interpreted in the configured [`Tz`] when they are converted.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum DateTimeValue {
    Text(String),
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
    Utc(DateTime<Utc>),
}

impl From<&str> for DateTimeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl DateTimeValue {
    pub fn to_utc(&self, tz: &Tz) -> Result<DateTime<Utc>, TimestampParseError> {
        match self {
            Self::Text(text) => Self::parse(text)?.to_utc(tz),
            Self::Naive(naive) => resolve_local(naive, tz),
            Self::Offset(dt) => Ok(dt.with_timezone(&Utc)),
            Self::Utc(dt) => Ok(*dt),
        }
    }

    /// Format as `YYYYMMDDTHHMMSSZ`.
    pub fn format_utc(&self, tz: &Tz) -> Result<String, TimestampParseError> {
        Ok(self.to_utc(tz)?.format(UTC_BASIC_FORMAT).to_string())
    }

    /// Parse text into a typed value. The result is never `Text`.
    pub fn parse(text: &str) -> Result<Self, TimestampParseError> {
        let text = text.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::Offset(dt));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, UTC_BASIC_FORMAT) {
            return Ok(Self::Utc(naive.and_utc()));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(Self::Naive(naive));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::Naive(date.and_time(chrono::NaiveTime::MIN)));
        }

        Err(TimestampParseError::Unrecognized(text.to_owned()))
    }
}

/// Accepts strings as well as native datetime literals of formats such as TOML, which hand
/// their value over as a single-entry map holding the literal's text.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTimeValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateTimeValueVisitor)
    }
}

#[cfg(feature = "serde")]
struct DateTimeValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for DateTimeValueVisitor {
    type Value = DateTimeValue;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a date/time string or datetime literal")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DateTimeValue::from(value))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DateTimeValue::Text(value))
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        match map.next_entry::<serde::de::IgnoredAny, String>()? {
            Some((_, text)) => Ok(DateTimeValue::Text(text)),
            None => Err(serde::de::Error::invalid_length(0, &self)),
        }
    }
}

fn resolve_local(naive: &NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, TimestampParseError> {
    match naive.and_local_timezone(*tz) {
        MappedLocalTime::Single(dt) => Ok(dt.with_timezone(&Utc)),
        MappedLocalTime::Ambiguous(earliest, _) => {
            tracing::warn!(
                local = %naive,
                timezone = tz.name(),
                "ambiguous local time, using the earliest instant"
            );
            Ok(earliest.with_timezone(&Utc))
        }
        MappedLocalTime::None => Err(TimestampParseError::NonexistentLocalTime(*naive)),
    }
}
