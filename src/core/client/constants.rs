//! Centralized constants for default endpoints and UA.

/// Identifies this crate to the gateway.
pub(crate) const USER_AGENT: &str = concat!("dbn-hist/", env!("CARGO_PKG_VERSION"));

/// Historical API base (endpoint slugs such as `metadata.list_datasets` are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://hist.databento.com/v0/";
