//! Public client surface + builder.
//! Internals are split into `auth` (Basic credentials) and `constants` (UA + defaults).

mod auth;
mod constants;

use crate::core::HistError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use reqwest::header::HeaderValue;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Handle to the historical API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool,
/// and nothing inside changes after construction, so one instance can serve
/// concurrent calls from many tasks.
#[derive(Clone)]
pub struct HistClient {
    http: Client,
    base_url: Url,
    auth: HeaderValue,
}

impl fmt::Debug for HistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HistClient {
    /// Creates a client with the default transport and endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidApiKey`] if the key is empty or malformed, or
    /// [`HistError::Http`] if the default HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> Result<Self, HistError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new builder.
    pub fn builder() -> HistClientBuilder {
        HistClientBuilder::default()
    }

    /// The base URL that endpoint slugs are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct HistClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    http_client: Option<Client>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HistClientBuilder {
    /// The Databento API key. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (e.g., `https://hist.databento.com/v0/`).
    ///
    /// A missing trailing slash is added so that endpoint slugs join under the path.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use a preconfigured `reqwest::Client` instead of building one.
    ///
    /// When set, `user_agent`, `timeout` and `connect_timeout` are ignored; configure
    /// them on the supplied client instead.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidApiKey`] if no usable key was supplied, or
    /// [`HistError::Http`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<HistClient, HistError> {
        let api_key = self
            .api_key
            .ok_or(HistError::InvalidApiKey("API key is missing"))?;
        let auth = auth::basic_auth_header(&api_key)?;

        let mut base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                httpb.build()?
            }
        };

        Ok(HistClient {
            http,
            base_url,
            auth,
        })
    }
}
