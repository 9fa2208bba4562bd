use chrono::{DateTime, Utc};
use databento::dbn::{Encoding, Schema};
use futures::future::BoxFuture;

use crate::batch::{BatchFileDesc, BatchJob, JobState, SubmitJobParams};
use crate::core::{DateRange, HistClient, HistError};
use crate::metadata::{
    ConditionDetail, FieldDetail, MetadataQueryParams, PublisherDetail, UnitPricesForMode,
};
use crate::symbology::{Resolution, ResolveParams};

/// The full historical API as an object-safe trait.
///
/// [`HistClient`] is the production implementation. Code that only needs
/// to issue requests can take `&dyn HistoricalService` (or an `Arc` of it) and be
/// handed a stub in tests. Each method mirrors the inherent `HistClient`
/// method of the same name.
pub trait HistoricalService: Send + Sync {
    /// Downloads the records selected by `params` as raw bytes.
    fn get_range<'a>(
        &'a self,
        params: &'a SubmitJobParams,
    ) -> BoxFuture<'a, Result<Vec<u8>, HistError>>;

    /// Resolves symbols between symbology types.
    fn symbology_resolve<'a>(
        &'a self,
        params: &'a ResolveParams,
    ) -> BoxFuture<'a, Result<Resolution, HistError>>;

    fn list_publishers(&self) -> BoxFuture<'_, Result<Vec<PublisherDetail>, HistError>>;

    fn list_datasets(&self, date_range: DateRange) -> BoxFuture<'_, Result<Vec<String>, HistError>>;

    fn list_schemas<'a>(&'a self, dataset: &'a str) -> BoxFuture<'a, Result<Vec<String>, HistError>>;

    fn list_fields(
        &self,
        encoding: Encoding,
        schema: Schema,
    ) -> BoxFuture<'_, Result<Vec<FieldDetail>, HistError>>;

    fn list_unit_prices<'a>(
        &'a self,
        dataset: &'a str,
    ) -> BoxFuture<'a, Result<Vec<UnitPricesForMode>, HistError>>;

    fn get_dataset_condition<'a>(
        &'a self,
        dataset: &'a str,
        date_range: DateRange,
    ) -> BoxFuture<'a, Result<Vec<ConditionDetail>, HistError>>;

    fn get_dataset_range<'a>(&'a self, dataset: &'a str) -> BoxFuture<'a, Result<DateRange, HistError>>;

    fn get_record_count<'a>(
        &'a self,
        params: &'a MetadataQueryParams,
    ) -> BoxFuture<'a, Result<u64, HistError>>;

    fn get_billable_size<'a>(
        &'a self,
        params: &'a MetadataQueryParams,
    ) -> BoxFuture<'a, Result<u64, HistError>>;

    fn get_cost<'a>(&'a self, params: &'a MetadataQueryParams) -> BoxFuture<'a, Result<f64, HistError>>;

    fn list_jobs<'a>(
        &'a self,
        states: &'a [JobState],
        since: Option<DateTime<Utc>>,
    ) -> BoxFuture<'a, Result<Vec<BatchJob>, HistError>>;

    fn list_files<'a>(&'a self, job_id: &'a str) -> BoxFuture<'a, Result<Vec<BatchFileDesc>, HistError>>;

    /// Submits a batch job.
    fn submit_job<'a>(
        &'a self,
        params: &'a SubmitJobParams,
    ) -> BoxFuture<'a, Result<BatchJob, HistError>>;
}

impl HistoricalService for HistClient {
    fn get_range<'a>(
        &'a self,
        params: &'a SubmitJobParams,
    ) -> BoxFuture<'a, Result<Vec<u8>, HistError>> {
        Box::pin(Self::get_range(self, params))
    }

    fn symbology_resolve<'a>(
        &'a self,
        params: &'a ResolveParams,
    ) -> BoxFuture<'a, Result<Resolution, HistError>> {
        Box::pin(Self::symbology_resolve(self, params))
    }

    fn list_publishers(&self) -> BoxFuture<'_, Result<Vec<PublisherDetail>, HistError>> {
        Box::pin(Self::list_publishers(self))
    }

    fn list_datasets(&self, date_range: DateRange) -> BoxFuture<'_, Result<Vec<String>, HistError>> {
        Box::pin(Self::list_datasets(self, date_range))
    }

    fn list_schemas<'a>(&'a self, dataset: &'a str) -> BoxFuture<'a, Result<Vec<String>, HistError>> {
        Box::pin(Self::list_schemas(self, dataset))
    }

    fn list_fields(
        &self,
        encoding: Encoding,
        schema: Schema,
    ) -> BoxFuture<'_, Result<Vec<FieldDetail>, HistError>> {
        Box::pin(Self::list_fields(self, encoding, schema))
    }

    fn list_unit_prices<'a>(
        &'a self,
        dataset: &'a str,
    ) -> BoxFuture<'a, Result<Vec<UnitPricesForMode>, HistError>> {
        Box::pin(Self::list_unit_prices(self, dataset))
    }

    fn get_dataset_condition<'a>(
        &'a self,
        dataset: &'a str,
        date_range: DateRange,
    ) -> BoxFuture<'a, Result<Vec<ConditionDetail>, HistError>> {
        Box::pin(Self::get_dataset_condition(self, dataset, date_range))
    }

    fn get_dataset_range<'a>(&'a self, dataset: &'a str) -> BoxFuture<'a, Result<DateRange, HistError>> {
        Box::pin(Self::get_dataset_range(self, dataset))
    }

    fn get_record_count<'a>(
        &'a self,
        params: &'a MetadataQueryParams,
    ) -> BoxFuture<'a, Result<u64, HistError>> {
        Box::pin(Self::get_record_count(self, params))
    }

    fn get_billable_size<'a>(
        &'a self,
        params: &'a MetadataQueryParams,
    ) -> BoxFuture<'a, Result<u64, HistError>> {
        Box::pin(Self::get_billable_size(self, params))
    }

    fn get_cost<'a>(&'a self, params: &'a MetadataQueryParams) -> BoxFuture<'a, Result<f64, HistError>> {
        Box::pin(Self::get_cost(self, params))
    }

    fn list_jobs<'a>(
        &'a self,
        states: &'a [JobState],
        since: Option<DateTime<Utc>>,
    ) -> BoxFuture<'a, Result<Vec<BatchJob>, HistError>> {
        Box::pin(Self::list_jobs(self, states, since))
    }

    fn list_files<'a>(&'a self, job_id: &'a str) -> BoxFuture<'a, Result<Vec<BatchFileDesc>, HistError>> {
        Box::pin(Self::list_files(self, job_id))
    }

    fn submit_job<'a>(
        &'a self,
        params: &'a SubmitJobParams,
    ) -> BoxFuture<'a, Result<BatchJob, HistError>> {
        Box::pin(Self::submit_job(self, params))
    }
}
