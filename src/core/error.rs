use serde::Deserialize;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum HistError {
    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP request could not be constructed.
    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    /// The request could not be delivered (DNS, connect, TLS, timeout...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than `200 OK`.
    ///
    /// `body` is the response text exactly as received; see
    /// [`HistError::request_error`] to decode the vendor's error envelope.
    #[error("HTTP {status} {reason}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for `status`, if any.
        reason: String,
        /// The raw response body.
        body: String,
    },

    /// The response arrived but its body could not be read.
    #[error("HTTP {status}: failed to read response body: {source}")]
    Body {
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying read failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape expected for the endpoint.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API key is missing or cannot be used for Basic authentication.
    #[error("invalid API key: {0}")]
    InvalidApiKey(&'static str),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,
}

impl HistError {
    /// The HTTP status code, when the failure came with a response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Body { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decodes the vendor's structured error from a [`HistError::Status`] body.
    ///
    /// Returns `None` for other variants or when the body is not a
    /// `{"detail": {...}}` envelope.
    pub fn request_error(&self) -> Option<RequestError> {
        match self {
            Self::Status { body, .. } => serde_json::from_str::<RequestErrorResp>(body)
                .ok()
                .map(|resp| resp.detail),
            _ => None,
        }
    }
}

/// Structured error reported by the historical gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestError {
    /// Machine-readable error category, e.g. `bad_request`.
    pub case: String,
    /// Human-readable description.
    pub message: String,
    /// HTTP status the gateway associated with the error.
    pub status_code: u16,
    /// Link to relevant documentation.
    #[serde(default)]
    pub docs: Option<String>,
    /// Extra context attached by the gateway.
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RequestErrorResp {
    detail: RequestError,
}
