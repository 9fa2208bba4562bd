//! dbn-hist: typed async client for the Databento historical API.
//!
//! Every endpoint is one buffered HTTP round trip authenticated with the API
//! key, with no retries and no caching. Failures come back as [`HistError`]
//! values; a rejected request keeps the gateway's status and body verbatim.
//!
//! ```no_run
//! # use dbn_hist::{DateRange, HistClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HistClient::new("db-YOUR_API_KEY")?;
//! let datasets = client.list_datasets(DateRange::default()).await?;
//! let range = client.get_dataset_range(&datasets[0]).await?;
//! println!("{} available from {} to {}", datasets[0], range.start, range.end);
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `tracing` feature to get a span per endpoint call.

pub mod batch;
pub mod core;
pub mod metadata;
pub mod symbology;
pub mod timeseries;

pub use batch::{BatchFileDesc, BatchJob, Delivery, JobState, SplitDuration, SubmitJobParams};
pub use crate::core::{
    ALL_SYMBOLS, DateRange, FeedMode, HistClient, HistClientBuilder, HistError, HistoricalService,
    RequestError,
};
pub use metadata::{
    ConditionDetail, DatasetCondition, FieldDetail, MetadataQueryParams, PublisherDetail,
    UnitPricesForMode,
};
pub use symbology::{MappingInterval, Resolution, ResolveParams};

/// The DBN enums used in request parameters, re-exported so callers and the
/// decoder agree on one version.
pub use databento::dbn::{Compression, Encoding, SType, Schema};
