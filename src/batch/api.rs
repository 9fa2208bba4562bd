use chrono::{DateTime, Utc};

use crate::batch::model::{BatchFileDesc, BatchJob, JobState, SubmitJobParams};
use crate::core::{HistClient, HistError, net, wire};

const SUBMIT_JOB: &str = "batch.submit_job";
const LIST_JOBS: &str = "batch.list_jobs";
const LIST_FILES: &str = "batch.list_files";

pub(super) async fn submit_job(
    client: &HistClient,
    params: &SubmitJobParams,
) -> Result<BatchJob, HistError> {
    let url = net::endpoint_url(client, SUBMIT_JOB, &[])?;
    net::post_form_json(client, SUBMIT_JOB, url.as_str(), &params.job_form()).await
}

pub(super) async fn list_jobs(
    client: &HistClient,
    states: &[JobState],
    since: Option<DateTime<Utc>>,
) -> Result<Vec<BatchJob>, HistError> {
    let mut query = Vec::with_capacity(2);
    if !states.is_empty() {
        let joined = states
            .iter()
            .map(JobState::as_str)
            .collect::<Vec<_>>()
            .join(",");
        query.push(("states", joined));
    }
    if let Some(since) = since {
        query.push(("since", wire::format_date(&since)));
    }

    let url = net::endpoint_url(client, LIST_JOBS, &query)?;
    net::get_json(client, LIST_JOBS, url.as_str()).await
}

pub(super) async fn list_files(
    client: &HistClient,
    job_id: &str,
) -> Result<Vec<BatchFileDesc>, HistError> {
    let url = net::endpoint_url(client, LIST_FILES, &[("job_id", job_id.to_string())])?;
    net::get_json(client, LIST_FILES, url.as_str()).await
}
