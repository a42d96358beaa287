//! Lenient decoding of backend date-times
//!
//! The backend serializes `LocalDateTime` either as an ISO-like string
//! (`2024-05-01T10:00:00`, `2024-05-01 10:00`) or as a component array
//! (`[2024, 5, 1, 10, 0, 0]`), depending on its Jackson setup.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Parts(Vec<i64>),
}

fn from_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn from_parts(parts: &[i64]) -> Option<NaiveDateTime> {
    let part = |i: usize| parts.get(i).copied().unwrap_or(0);
    if parts.len() < 3 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(part(0)).ok()?,
        u32::try_from(part(1)).ok()?,
        u32::try_from(part(2)).ok()?,
    )?;
    // Index 6, when present, is nanoseconds
    date.and_hms_nano_opt(
        u32::try_from(part(3)).ok()?,
        u32::try_from(part(4)).ok()?,
        u32::try_from(part(5)).ok()?,
        u32::try_from(part(6)).ok()?,
    )
}

fn convert<E: de::Error>(raw: Raw) -> Result<NaiveDateTime, E> {
    match raw {
        Raw::Text(text) => from_text(&text)
            .ok_or_else(|| E::custom(format!("invalid date-time: {}", text))),
        Raw::Parts(parts) => from_parts(&parts)
            .ok_or_else(|| E::custom(format!("invalid date-time parts: {:?}", parts))),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    convert(Raw::deserialize(deserializer)?)
}

/// Optional variant: `null`, a missing field and an empty string all decode to `None`
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(raw) => convert(raw).map(Some),
        }
    }
}
