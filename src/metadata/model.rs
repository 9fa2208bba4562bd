use std::collections::HashMap;

use chrono::NaiveDate;
use databento::dbn::{SType, Schema};
use serde::{Deserialize, Serialize};

use crate::core::models::symbols_param;
use crate::core::{DateRange, FeedMode, wire};

/// The details about a publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherDetail {
    /// The publisher ID assigned by Databento, which denotes the dataset and venue.
    pub publisher_id: u16,
    /// The dataset code for the publisher.
    pub dataset: String,
    /// The venue for the publisher.
    pub venue: String,
    /// The publisher description.
    pub description: String,
}

/// The details about a field in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDetail {
    /// The field name.
    pub name: String,
    /// The field type name.
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Unit prices in US dollars per gigabyte for one [`FeedMode`], keyed by schema name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPricesForMode {
    pub mode: FeedMode,
    pub unit_prices: HashMap<String, f64>,
}

impl UnitPricesForMode {
    /// Price for `schema`, if the dataset offers it in this mode.
    pub fn price(&self, schema: Schema) -> Option<f64> {
        self.unit_prices.get(schema.as_str()).copied()
    }
}

/// The condition of a dataset on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetCondition {
    /// The data is available with no known issues.
    Available,
    /// The data is available, but there may be missing data or other correctness issues.
    Degraded,
    /// The data is not yet available, but may be available soon.
    Pending,
    /// The data is not available.
    Missing,
    /// The data is available intraday, which may have different licensing.
    Intraday,
}

/// The condition of a dataset on a particular day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDetail {
    #[serde(deserialize_with = "wire::de_date")]
    pub date: NaiveDate,
    pub condition: DatasetCondition,
    /// When any schema for `date` was last regenerated; absent for missing days.
    #[serde(default, deserialize_with = "wire::de_opt_date")]
    pub last_modified_date: Option<NaiveDate>,
}

/// Parameters shared by the record-count, billable-size and cost queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataQueryParams {
    /// The dataset code, e.g. `XNAS.ITCH`.
    pub dataset: String,
    /// Symbols to filter for; empty means all symbols.
    pub symbols: Vec<String>,
    pub schema: Schema,
    /// Symbology type of `symbols`. Defaults to [`SType::RawSymbol`].
    pub stype_in: SType,
    /// Feed mode used for pricing; only sent by [`get_cost`](crate::HistClient::get_cost).
    pub mode: FeedMode,
    pub date_range: DateRange,
    /// Optional cap on the number of records.
    pub limit: Option<u64>,
}

impl MetadataQueryParams {
    /// Creates parameters with raw-symbol input, historical mode and no limit.
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
            stype_in: SType::RawSymbol,
            mode: FeedMode::Historical,
            date_range,
            limit: None,
        }
    }

    #[must_use]
    pub const fn stype_in(mut self, stype_in: SType) -> Self {
        self.stype_in = stype_in;
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: FeedMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn query(&self, with_mode: bool) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("dataset", self.dataset.clone()),
            ("symbols", symbols_param(&self.symbols)),
            ("schema", self.schema.to_string()),
            ("stype_in", self.stype_in.to_string()),
        ];
        query.extend(self.date_range.time_params());
        if with_mode {
            query.push(("mode", self.mode.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}
