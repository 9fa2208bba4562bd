mod model;

pub use model::{MappingInterval, Resolution, ResolveParams};

use crate::core::{HistClient, HistError, net};

const RESOLVE_ENDPOINT: &str = "symbology.resolve";

impl HistClient {
    /// Maps `params.symbols` from `stype_in` to `stype_out` over the date range.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the response cannot be parsed.
    /// A rejected request surfaces as [`HistError::Status`] with the body untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset)))]
    pub async fn symbology_resolve(&self, params: &ResolveParams) -> Result<Resolution, HistError> {
        let url = net::endpoint_url(self, RESOLVE_ENDPOINT, &[])?;
        net::post_form_json(self, RESOLVE_ENDPOINT, url.as_str(), &params.form()).await
    }
}
