//! The two request helpers every endpoint goes through.
//!
//! Both attach Basic credentials, buffer the whole response body and turn any
//! status other than `200 OK` into [`HistError::Status`]. Nothing is retried.

use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION};
use reqwest::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{HistClient, HistError};

/// Resolves an endpoint slug against the client's base URL and appends `query`.
pub(crate) fn endpoint_url(
    client: &HistClient,
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<Url, HistError> {
    let mut url = client.base_url().join(endpoint)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

pub(crate) fn get_request(client: &HistClient, url: &str) -> Result<Request, HistError> {
    let url = Url::parse(url)?;
    client
        .http()
        .get(url)
        .header(AUTHORIZATION, client.auth_header().clone())
        .build()
        .map_err(HistError::Request)
}

pub(crate) fn post_form_request(
    client: &HistClient,
    url: &str,
    form: &[(&str, String)],
    accept_encoding: Option<&str>,
) -> Result<Request, HistError> {
    let url = Url::parse(url)?;
    let mut builder = client
        .http()
        .post(url)
        .header(AUTHORIZATION, client.auth_header().clone())
        .form(form);
    if let Some(encoding) = accept_encoding {
        builder = builder.header(ACCEPT_ENCODING, encoding);
    }
    builder.build().map_err(HistError::Request)
}

/// GETs `url` (query already attached) and returns the raw body.
pub(crate) async fn get(
    client: &HistClient,
    endpoint: &str,
    url: &str,
) -> Result<Vec<u8>, HistError> {
    let req = get_request(client, url)?;
    execute(client, endpoint, req).await
}

/// POSTs `form` as `application/x-www-form-urlencoded` and returns the raw body.
pub(crate) async fn post_form(
    client: &HistClient,
    endpoint: &str,
    url: &str,
    form: &[(&str, String)],
    accept_encoding: Option<&str>,
) -> Result<Vec<u8>, HistError> {
    let req = post_form_request(client, url, form, accept_encoding)?;
    execute(client, endpoint, req).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &HistClient,
    endpoint: &str,
    url: &str,
) -> Result<T, HistError> {
    let body = get(client, endpoint, url).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub(crate) async fn post_form_json<T: DeserializeOwned>(
    client: &HistClient,
    endpoint: &str,
    url: &str,
    form: &[(&str, String)],
) -> Result<T, HistError> {
    let body = post_form(client, endpoint, url, form, None).await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn execute(client: &HistClient, endpoint: &str, req: Request) -> Result<Vec<u8>, HistError> {
    let resp = client.http().execute(req).await?;
    read_body(resp, endpoint).await
}

async fn read_body(resp: Response, _endpoint: &str) -> Result<Vec<u8>, HistError> {
    let status = resp.status();
    let body = resp.bytes().await.map_err(|source| HistError::Body {
        status: status.as_u16(),
        source,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        endpoint = _endpoint,
        status = status.as_u16(),
        bytes = body.len(),
        "historical API response"
    );

    if status != StatusCode::OK {
        return Err(HistError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body.to_vec())
}
