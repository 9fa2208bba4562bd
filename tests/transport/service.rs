use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dbn_hist::{DateRange, HistoricalService, MetadataQueryParams, Schema};
use httpmock::Method::GET;

use crate::common::{client_for, setup_server};

async fn total_cost(
    service: &dyn HistoricalService,
    queries: &[MetadataQueryParams],
) -> Result<f64, dbn_hist::HistError> {
    let mut total = 0.0;
    for query in queries {
        total += service.get_cost(query).await?;
    }
    Ok(total)
}

#[tokio::test]
async fn client_works_behind_the_trait_object() {
    let server = setup_server();
    let aapl = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/metadata.get_cost")
            .query_param("symbols", "AAPL");
        then.status(200).body("1.25");
    });
    let msft = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/metadata.get_cost")
            .query_param("symbols", "MSFT");
        then.status(200).body("0.75");
    });

    let range = DateRange::new(
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let queries = [
        MetadataQueryParams::new("XNAS.ITCH", ["AAPL"], Schema::Trades, range),
        MetadataQueryParams::new("XNAS.ITCH", ["MSFT"], Schema::Trades, range),
    ];

    let service: Arc<dyn HistoricalService> = Arc::new(client_for(&server));
    let total = total_cost(service.as_ref(), &queries).await.unwrap();

    aapl.assert();
    msft.assert();
    assert!((total - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/metadata.list_schemas")
            .query_param("dataset", "GLBX.MDP3");
        then.status(200).body(r#"["mbo","trades"]"#);
    });

    let client = client_for(&server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.list_schemas("GLBX.MDP3").await })
        })
        .collect();

    for handle in handles {
        let schemas = handle.await.unwrap().unwrap();
        assert_eq!(schemas.len(), 2);
    }
    mock.assert_hits(4);
}
