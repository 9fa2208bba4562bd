//! Formatting and parsing of the gateway's date, time and enum strings.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use databento::dbn::Compression;
use serde::{Deserialize, Deserializer, de};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses every timestamp shape the gateway has emitted: RFC 3339, naive ISO 8601
/// (UTC implied), the legacy space-separated form and bare dates (midnight UTC).
pub(crate) fn parse_date_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

pub(crate) fn de_date_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date_time(&s).ok_or_else(|| de::Error::custom(format!("unrecognized date/time: {s}")))
}

pub(crate) fn de_opt_date_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_date_time(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognized date/time: {s}"))),
        None => Ok(None),
    }
}

pub(crate) fn de_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(de::Error::custom)
}

pub(crate) fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(de::Error::custom))
        .transpose()
}

/// Deserializes any `FromStr` type from its string form (used for the `dbn` enums).
pub(crate) fn de_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<T>().map_err(de::Error::custom)
}

/// `null` means uncompressed.
pub(crate) fn de_compression<'de, D>(deserializer: D) -> Result<Compression, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => s.parse::<Compression>().map_err(de::Error::custom),
        None => Ok(Compression::None),
    }
}

/// Symbols arrive either as a JSON array or as one comma-separated string.
pub(crate) fn de_symbols<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnySymbols {
        Many(Vec<String>),
        Joined(String),
    }

    Ok(match AnySymbols::deserialize(deserializer)? {
        AnySymbols::Many(v) => v,
        AnySymbols::Joined(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
