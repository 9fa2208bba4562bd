//! Batch job endpoints: submission and the job/file listings used to track it.

mod api;
mod model;

pub use model::{BatchFileDesc, BatchJob, Delivery, JobState, SplitDuration, SubmitJobParams};

use chrono::{DateTime, Utc};

use crate::core::{HistClient, HistError};

impl HistClient {
    /// Submits a batch job and returns its initial description.
    ///
    /// Calling this method will incur a cost.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset)))]
    pub async fn submit_job(&self, params: &SubmitJobParams) -> Result<BatchJob, HistError> {
        api::submit_job(self, params).await
    }

    /// Lists batch jobs, optionally filtered by state and by submission day.
    ///
    /// An empty `states` slice applies no state filter. `since` is sent as a date,
    /// so jobs from earlier that same day are included.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_jobs(
        &self,
        states: &[JobState],
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<BatchJob>, HistError> {
        api::list_jobs(self, states, since).await
    }

    /// Lists the files produced by the job `job_id`.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, level = "debug"))]
    pub async fn list_files(&self, job_id: &str) -> Result<Vec<BatchFileDesc>, HistError> {
        api::list_files(self, job_id).await
    }
}
