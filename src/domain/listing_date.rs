//! Serde support for listing calendar dates.
//!
//! Dates are written as `YYYY-MM-DD`. Stored documents may also carry full
//! RFC 3339 timestamps, in which case only the date part is kept.

use serde::{de::Error, Deserialize, Deserializer, Serializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

pub fn parse(s: &str) -> Result<Date, String> {
    let s = s.trim();

    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .or_else(|_| OffsetDateTime::parse(s, &Rfc3339).map(|timestamp| timestamp.date()))
        .map_err(|e| format!("`{s}` is not a valid date: {e}"))
}

pub fn format(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = format(*date).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(D::Error::custom)
}

/// Same as the parent module for optional dates. `null` and blank strings
/// both read as `None`.
pub mod option {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.trim().is_empty() => super::parse(&s).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }

    /// For partial updates: an absent field (handled by `#[serde(default)]`)
    /// stays `None`, while `null` or a blank string become `Some(None)`.
    pub fn deserialize_clearable<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<Date>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Some)
    }
}
