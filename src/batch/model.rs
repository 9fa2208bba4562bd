use std::collections::HashMap;

use chrono::{DateTime, Utc};
use databento::dbn::{Compression, Encoding, SType, Schema};
use serde::{Deserialize, Serialize};

use crate::core::models::symbols_param;
use crate::core::{DateRange, wire};

/// The duration of time at which batch files will be split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDuration {
    /// One file per day.
    #[default]
    Day,
    /// One file per week. A week starts on Sunday UTC.
    Week,
    /// One file per month.
    Month,
}

impl SplitDuration {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// How the batch job will be delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// Via download from the Databento portal.
    #[default]
    Download,
    /// Via Amazon S3.
    S3,
    /// Via disk.
    Disk,
}

impl Delivery {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::S3 => "s3",
            Self::Disk => "disk",
        }
    }
}

/// The state of a batch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// The job has been received (the initial state).
    Received,
    /// The job has been queued for processing.
    Queued,
    /// The job has begun processing.
    Processing,
    /// The job has finished processing and is ready for delivery.
    Done,
    /// The job is no longer available.
    Expired,
}

impl JobState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Expired => "expired",
        }
    }
}

/// Parameters for a batch job submission and for streaming range requests.
///
/// [`HistClient::get_range`](crate::HistClient::get_range) only reads the
/// dataset, symbols, schema, range, encoding, compression, symbology types and
/// limit; the formatting and splitting options apply to batch jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitJobParams {
    pub dataset: String,
    /// Symbols to filter for; empty means all symbols.
    pub symbols: Vec<String>,
    pub schema: Schema,
    /// Filters on `ts_recv` if the schema has it, otherwise `ts_event`.
    pub date_range: DateRange,
    /// Defaults to [`Encoding::Dbn`].
    pub encoding: Encoding,
    /// Defaults to [`Compression::Zstd`].
    pub compression: Compression,
    /// Scale prices to decimals. CSV and JSON only.
    pub pretty_px: bool,
    /// Render timestamps as ISO 8601. CSV and JSON only.
    pub pretty_ts: bool,
    /// Add a symbol field to each text-encoded record. CSV and JSON only.
    pub map_symbols: bool,
    /// One file per raw symbol.
    pub split_symbols: bool,
    pub split_duration: SplitDuration,
    /// Maximum size in bytes of each file before splitting.
    pub split_size: Option<u64>,
    pub delivery: Delivery,
    pub stype_in: SType,
    pub stype_out: SType,
    pub limit: Option<u64>,
}

impl SubmitJobParams {
    /// Creates parameters for zstd-compressed DBN over raw symbols, split daily
    /// and delivered by download.
    pub fn new(
        dataset: impl Into<String>,
        symbols: impl IntoIterator<Item = impl Into<String>>,
        schema: Schema,
        date_range: DateRange,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            schema,
            date_range,
            encoding: Encoding::Dbn,
            compression: Compression::Zstd,
            pretty_px: false,
            pretty_ts: false,
            map_symbols: false,
            split_symbols: false,
            split_duration: SplitDuration::Day,
            split_size: None,
            delivery: Delivery::Download,
            stype_in: SType::RawSymbol,
            stype_out: SType::InstrumentId,
            limit: None,
        }
    }

    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub const fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    #[must_use]
    pub const fn stype_in(mut self, stype_in: SType) -> Self {
        self.stype_in = stype_in;
        self
    }

    #[must_use]
    pub const fn stype_out(mut self, stype_out: SType) -> Self {
        self.stype_out = stype_out;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets `pretty_px`, `pretty_ts` and `map_symbols` together.
    #[must_use]
    pub const fn pretty(mut self, enabled: bool) -> Self {
        self.pretty_px = enabled;
        self.pretty_ts = enabled;
        self.map_symbols = enabled;
        self
    }

    #[must_use]
    pub const fn split(mut self, duration: SplitDuration, size: Option<u64>) -> Self {
        self.split_duration = duration;
        self.split_size = size;
        self
    }

    #[must_use]
    pub const fn split_symbols(mut self, enabled: bool) -> Self {
        self.split_symbols = enabled;
        self
    }

    #[must_use]
    pub const fn delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Fields common to range requests and job submissions.
    pub(crate) fn range_form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("dataset", self.dataset.clone()),
            ("symbols", symbols_param(&self.symbols)),
            ("schema", self.schema.to_string()),
            ("encoding", self.encoding.to_string()),
            ("compression", self.compression.to_string()),
            ("stype_in", self.stype_in.to_string()),
            ("stype_out", self.stype_out.to_string()),
        ];
        form.extend(self.date_range.time_params());
        if let Some(limit) = self.limit {
            form.push(("limit", limit.to_string()));
        }
        form
    }

    pub(crate) fn job_form(&self) -> Vec<(&'static str, String)> {
        let mut form = self.range_form();
        form.extend([
            ("pretty_px", self.pretty_px.to_string()),
            ("pretty_ts", self.pretty_ts.to_string()),
            ("map_symbols", self.map_symbols.to_string()),
            ("split_symbols", self.split_symbols.to_string()),
            ("split_duration", self.split_duration.as_str().to_string()),
            ("delivery", self.delivery.as_str().to_string()),
        ]);
        if let Some(split_size) = self.split_size {
            form.push(("split_size", split_size.to_string()));
        }
        form
    }
}

/// The description of a submitted batch job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchJob {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bill_id: Option<String>,
    /// `None` until the job is processed.
    #[serde(default)]
    pub cost_usd: Option<f64>,
    pub dataset: String,
    #[serde(deserialize_with = "wire::de_symbols")]
    pub symbols: Vec<String>,
    #[serde(deserialize_with = "wire::de_from_str")]
    pub stype_in: SType,
    #[serde(deserialize_with = "wire::de_from_str")]
    pub stype_out: SType,
    #[serde(deserialize_with = "wire::de_from_str")]
    pub schema: Schema,
    #[serde(deserialize_with = "wire::de_date_time")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "wire::de_date_time")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(deserialize_with = "wire::de_from_str")]
    pub encoding: Encoding,
    #[serde(default = "uncompressed", deserialize_with = "wire::de_compression")]
    pub compression: Compression,
    #[serde(default)]
    pub pretty_px: bool,
    #[serde(default)]
    pub pretty_ts: bool,
    #[serde(default)]
    pub map_symbols: bool,
    #[serde(default)]
    pub split_symbols: bool,
    #[serde(default)]
    pub split_duration: SplitDuration,
    #[serde(default)]
    pub split_size: Option<u64>,
    #[serde(default)]
    pub delivery: Delivery,
    /// `None` until the job is processed.
    #[serde(default)]
    pub record_count: Option<u64>,
    #[serde(default)]
    pub billed_size: Option<u64>,
    #[serde(default)]
    pub actual_size: Option<u64>,
    #[serde(default)]
    pub package_size: Option<u64>,
    pub state: JobState,
    #[serde(deserialize_with = "wire::de_date_time")]
    pub ts_received: DateTime<Utc>,
    #[serde(default, deserialize_with = "wire::de_opt_date_time")]
    pub ts_queued: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::de_opt_date_time")]
    pub ts_process_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::de_opt_date_time")]
    pub ts_process_done: Option<DateTime<Utc>>,
    /// When the files leave the download center.
    #[serde(default, deserialize_with = "wire::de_opt_date_time")]
    pub ts_expiration: Option<DateTime<Utc>>,
}

const fn uncompressed() -> Compression {
    Compression::None
}

/// The file details for a batch job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFileDesc {
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// SHA-256 of the file contents.
    pub hash: String,
    /// Download protocol (`https`, `ftp`) to URL.
    #[serde(default)]
    pub urls: HashMap<String, String>,
}

impl BatchFileDesc {
    pub fn https_url(&self) -> Option<&str> {
        self.urls.get("https").map(String::as_str)
    }

    pub fn ftp_url(&self) -> Option<&str> {
        self.urls.get("ftp").map(String::as_str)
    }
}
