//! HTTP Basic credentials for the historical gateway.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::HeaderValue;

use crate::core::error::HistError;

/// Builds the `Authorization` value: the API key is the user name, the password is empty.
pub(crate) fn basic_auth_header(api_key: &str) -> Result<HeaderValue, HistError> {
    if api_key.is_empty() {
        return Err(HistError::InvalidApiKey("API key is empty"));
    }
    // A colon would split the key into user and password on the server side.
    if api_key.contains(':') {
        return Err(HistError::InvalidApiKey("API key must not contain ':'"));
    }

    let token = STANDARD.encode(format!("{api_key}:"));
    let mut value = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|_| HistError::InvalidApiKey("API key is not a valid header value"))?;
    value.set_sensitive(true);
    Ok(value)
}

impl super::HistClient {
    pub(crate) fn auth_header(&self) -> &HeaderValue {
        &self.auth
    }
}
