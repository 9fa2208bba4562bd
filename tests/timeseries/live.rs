use chrono::{TimeZone, Utc};
use dbn_hist::{Compression, DateRange, Encoding, Schema, SubmitJobParams};

#[tokio::test]
#[ignore]
async fn live_get_range_small_csv() {
    let Some(client) = crate::common::live_client() else {
        return;
    };

    let range = DateRange::new(
        Utc.with_ymd_and_hms(2023, 6, 1, 14, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 6, 1, 14, 31, 0).unwrap(),
    )
    .unwrap();
    let params = SubmitJobParams::new("XNAS.ITCH", ["AAPL"], Schema::Trades, range)
        .encoding(Encoding::Csv)
        .compression(Compression::None)
        .limit(10);
    let body = client.get_range(&params).await.unwrap();

    let text = String::from_utf8(body).unwrap();
    assert!(text.lines().count() <= 11);
}
