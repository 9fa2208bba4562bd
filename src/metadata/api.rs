use databento::dbn::{Encoding, Schema};

use crate::core::{DateRange, HistClient, HistError, net};
use crate::metadata::model::{
    ConditionDetail, FieldDetail, MetadataQueryParams, PublisherDetail, UnitPricesForMode,
};

async fn get_metadata<T: serde::de::DeserializeOwned>(
    client: &HistClient,
    slug: &str,
    query: &[(&str, String)],
) -> Result<T, HistError> {
    let endpoint = format!("metadata.{slug}");
    let url = net::endpoint_url(client, &endpoint, query)?;
    net::get_json(client, &endpoint, url.as_str()).await
}

pub(super) async fn list_publishers(client: &HistClient) -> Result<Vec<PublisherDetail>, HistError> {
    get_metadata(client, "list_publishers", &[]).await
}

pub(super) async fn list_datasets(
    client: &HistClient,
    date_range: DateRange,
) -> Result<Vec<String>, HistError> {
    get_metadata(client, "list_datasets", &date_range.date_params()).await
}

pub(super) async fn list_schemas(client: &HistClient, dataset: &str) -> Result<Vec<String>, HistError> {
    get_metadata(client, "list_schemas", &[("dataset", dataset.to_string())]).await
}

pub(super) async fn list_fields(
    client: &HistClient,
    encoding: Encoding,
    schema: Schema,
) -> Result<Vec<FieldDetail>, HistError> {
    let query = [
        ("encoding", encoding.as_str().to_string()),
        ("schema", schema.as_str().to_string()),
    ];
    get_metadata(client, "list_fields", &query).await
}

pub(super) async fn list_unit_prices(
    client: &HistClient,
    dataset: &str,
) -> Result<Vec<UnitPricesForMode>, HistError> {
    get_metadata(client, "list_unit_prices", &[("dataset", dataset.to_string())]).await
}

pub(super) async fn get_dataset_condition(
    client: &HistClient,
    dataset: &str,
    date_range: DateRange,
) -> Result<Vec<ConditionDetail>, HistError> {
    let mut query = vec![("dataset", dataset.to_string())];
    query.extend(date_range.date_params());
    get_metadata(client, "get_dataset_condition", &query).await
}

pub(super) async fn get_dataset_range(
    client: &HistClient,
    dataset: &str,
) -> Result<DateRange, HistError> {
    get_metadata(client, "get_dataset_range", &[("dataset", dataset.to_string())]).await
}

pub(super) async fn get_record_count(
    client: &HistClient,
    params: &MetadataQueryParams,
) -> Result<u64, HistError> {
    get_metadata(client, "get_record_count", &params.query(false)).await
}

pub(super) async fn get_billable_size(
    client: &HistClient,
    params: &MetadataQueryParams,
) -> Result<u64, HistError> {
    get_metadata(client, "get_billable_size", &params.query(false)).await
}

pub(super) async fn get_cost(
    client: &HistClient,
    params: &MetadataQueryParams,
) -> Result<f64, HistError> {
    get_metadata(client, "get_cost", &params.query(true)).await
}
