use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{HistError, wire};

/// Sentinel the gateway accepts in place of an explicit symbol list.
pub const ALL_SYMBOLS: &str = "ALL_SYMBOLS";

/// A half-open interval `[start, end)`: the start is inclusive, the end exclusive.
///
/// The fields are public and `start <= end` is the caller's responsibility;
/// [`DateRange::new`] checks it. An end left at the Unix epoch (the
/// [`Default`] value) is treated as unset and omitted from requests, which the
/// gateway reads as "the full available range".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The start (inclusive).
    #[serde(deserialize_with = "wire::de_date_time")]
    pub start: DateTime<Utc>,
    /// The end (exclusive).
    #[serde(deserialize_with = "wire::de_date_time")]
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidDates`] if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, HistError> {
        if start > end {
            return Err(HistError::InvalidDates);
        }
        Ok(Self { start, end })
    }

    /// Creates a range spanning midnight UTC of `start` up to midnight UTC of `end`.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidDates`] if `start` is after `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, HistError> {
        Self::new(
            start.and_time(chrono::NaiveTime::MIN).and_utc(),
            end.and_time(chrono::NaiveTime::MIN).and_utc(),
        )
    }

    /// True for the [`Default`] value, i.e. neither end was set.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// True when `ts` falls inside `[start, end)`.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }

    /// `start_date` / `end_date` parameters for day-granular endpoints.
    pub(crate) fn date_params(&self) -> Vec<(&'static str, String)> {
        [("start_date", &self.start), ("end_date", &self.end)]
            .into_iter()
            .filter(|(_, ts)| is_set(ts))
            .map(|(key, ts)| (key, wire::format_date(ts)))
            .collect()
    }

    /// `start` / `end` parameters for timestamp-granular endpoints.
    pub(crate) fn time_params(&self) -> Vec<(&'static str, String)> {
        [("start", &self.start), ("end", &self.end)]
            .into_iter()
            .filter(|(_, ts)| is_set(ts))
            .map(|(key, ts)| (key, wire::format_date_time(ts)))
            .collect()
    }
}

fn is_set(ts: &DateTime<Utc>) -> bool {
    *ts != DateTime::<Utc>::default()
}

/// A type of data feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedMode {
    /// The historical batch data feed.
    #[default]
    Historical,
    /// The historical streaming data feed.
    HistoricalStreaming,
    /// The live data feed for real-time and intraday historical.
    Live,
}

impl FeedMode {
    /// The wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::HistoricalStreaming => "historical-streaming",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for FeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins symbols for the wire, substituting [`ALL_SYMBOLS`] for an empty list.
pub(crate) fn symbols_param(symbols: &[String]) -> String {
    if symbols.is_empty() {
        ALL_SYMBOLS.to_string()
    } else {
        symbols.join(",")
    }
}
