//! Metadata endpoints: publishers, datasets, schemas, fields, prices, availability and
//! query sizing.

mod api;
mod model;

pub use model::{
    ConditionDetail, DatasetCondition, FieldDetail, MetadataQueryParams, PublisherDetail,
    UnitPricesForMode,
};

use databento::dbn::{Encoding, Schema};

use crate::core::{DateRange, HistClient, HistError};

impl HistClient {
    /// Lists the details of all publishers.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_publishers(&self) -> Result<Vec<PublisherDetail>, HistError> {
        api::list_publishers(self).await
    }

    /// Lists the dataset codes available to this API key.
    ///
    /// Unset ends of `date_range` are not sent; pass `DateRange::default()` for all datasets.
    /// Both ends are truncated to their UTC dates.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_datasets(&self, date_range: DateRange) -> Result<Vec<String>, HistError> {
        api::list_datasets(self, date_range).await
    }

    /// Lists the schema names available for `dataset`.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_schemas(&self, dataset: &str) -> Result<Vec<String>, HistError> {
        api::list_schemas(self, dataset).await
    }

    /// Lists the fields of `schema` when rendered with `encoding`.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_fields(
        &self,
        encoding: Encoding,
        schema: Schema,
    ) -> Result<Vec<FieldDetail>, HistError> {
        api::list_fields(self, encoding, schema).await
    }

    /// Lists unit prices per schema and feed mode, in US dollars per gigabyte.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_unit_prices(&self, dataset: &str) -> Result<Vec<UnitPricesForMode>, HistError> {
        api::list_unit_prices(self, dataset).await
    }

    /// Gets the per-day data condition of `dataset`.
    ///
    /// Both ends of `date_range` are truncated to their UTC dates.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn get_dataset_condition(
        &self,
        dataset: &str,
        date_range: DateRange,
    ) -> Result<Vec<ConditionDetail>, HistError> {
        api::get_dataset_condition(self, dataset, date_range).await
    }

    /// Gets the available range of `dataset` for this API key's entitlements.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn get_dataset_range(&self, dataset: &str) -> Result<DateRange, HistError> {
        api::get_dataset_range(self, dataset).await
    }

    /// Gets the number of records the query would return.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset)))]
    pub async fn get_record_count(&self, params: &MetadataQueryParams) -> Result<u64, HistError> {
        api::get_record_count(self, params).await
    }

    /// Gets the billable uncompressed raw binary size of the query, in bytes.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset)))]
    pub async fn get_billable_size(&self, params: &MetadataQueryParams) -> Result<u64, HistError> {
        api::get_billable_size(self, params).await
    }

    /// Gets the cost of the query in US dollars for `params.mode`.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset)))]
    pub async fn get_cost(&self, params: &MetadataQueryParams) -> Result<f64, HistError> {
        api::get_cost(self, params).await
    }
}
