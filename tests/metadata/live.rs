use dbn_hist::Schema;

#[tokio::test]
#[ignore]
async fn live_metadata_smoke() {
    let Some(client) = crate::common::live_client() else {
        return;
    };

    let datasets = client.list_datasets(Default::default()).await.unwrap();
    assert!(datasets.iter().any(|d| d == "XNAS.ITCH"));

    let range = client.get_dataset_range("XNAS.ITCH").await.unwrap();
    assert!(range.start < range.end);

    let schemas = client.list_schemas("XNAS.ITCH").await.unwrap();
    assert!(schemas.iter().any(|s| s == Schema::Trades.as_str()));

    let publishers = client.list_publishers().await.unwrap();
    assert!(!publishers.is_empty());
}
