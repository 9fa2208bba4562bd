//! Buffered range retrieval.
//!
//! The body is returned as received; decode it with the `dbn` crate (for
//! [`Encoding::Dbn`](databento::dbn::Encoding::Dbn)) or as CSV/JSON lines.

use databento::dbn::Compression;

use crate::batch::SubmitJobParams;
use crate::core::{HistClient, HistError, net};

const GET_RANGE_ENDPOINT: &str = "timeseries.get_range";

impl HistClient {
    /// Downloads the records selected by `params` in one buffered response.
    ///
    /// Only the dataset, symbols, schema, range, encoding, compression, symbology
    /// types and limit of `params` are sent. With [`Compression::Zstd`] the
    /// request advertises `Accept-Encoding: zstd` and the compressed bytes are
    /// returned untouched.
    ///
    /// Calling this method will incur a cost.
    ///
    /// # Errors
    ///
    /// Returns a `HistError` if the request fails or the gateway rejects it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err, level = "debug", fields(dataset = %params.dataset, schema = %params.schema)))]
    pub async fn get_range(&self, params: &SubmitJobParams) -> Result<Vec<u8>, HistError> {
        let url = net::endpoint_url(self, GET_RANGE_ENDPOINT, &[])?;
        let accept_encoding = matches!(params.compression, Compression::Zstd).then_some("zstd");
        net::post_form(
            self,
            GET_RANGE_ENDPOINT,
            url.as_str(),
            &params.range_form(),
            accept_encoding,
        )
        .await
    }
}
