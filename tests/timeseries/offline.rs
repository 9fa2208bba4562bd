use chrono::{TimeZone, Utc};
use dbn_hist::{Compression, DateRange, Encoding, Schema, SubmitJobParams};
use httpmock::Method::POST;

use crate::common::{client_for, setup_server, EXPECTED_AUTH};

fn one_hour() -> DateRange {
    DateRange::new(
        Utc.with_ymd_and_hms(2023, 6, 1, 14, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 6, 1, 15, 0, 0).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn get_range_returns_body_unaltered() {
    // zstd frame magic followed by bytes that are not valid UTF-8
    let payload: Vec<u8> = vec![0x28, 0xb5, 0x2f, 0xfd, 0x00, 0xff, 0xfe, 0x80, 0x0a, 0x00, 0x01];

    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/timeseries.get_range")
            .header("authorization", EXPECTED_AUTH)
            .header("content-type", "application/x-www-form-urlencoded")
            .header("accept-encoding", "zstd");
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(payload.clone());
    });

    let params = SubmitJobParams::new("XNAS.ITCH", ["AAPL"], Schema::Trades, one_hour());
    let body = client_for(&server).get_range(&params).await.unwrap();
    mock.assert();

    assert_eq!(body, payload);
}

#[tokio::test]
async fn get_range_uncompressed_csv() {
    let csv = "ts_recv,ts_event,rtype,publisher_id,instrument_id,action,side,depth,price,size\n\
               1685628000000012345,1685628000000001234,0,2,38,T,A,0,180120000000,100\n";

    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/timeseries.get_range");
        then.status(200).header("content-type", "text/csv").body(csv);
    });

    let params = SubmitJobParams::new("XNAS.ITCH", ["AAPL"], Schema::Trades, one_hour())
        .encoding(Encoding::Csv)
        .compression(Compression::None);
    let body = client_for(&server).get_range(&params).await.unwrap();
    mock.assert();

    assert_eq!(String::from_utf8(body).unwrap(), csv);
}

#[tokio::test]
async fn get_range_rejection_is_a_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v0/timeseries.get_range");
        then.status(401)
            .body(r#"{"detail":"Authorization failed: illegal chars in username."}"#);
    });

    let params = SubmitJobParams::new("XNAS.ITCH", ["AAPL"], Schema::Trades, one_hour());
    let err = client_for(&server).get_range(&params).await.unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("illegal chars in username"));
    // `detail` is a plain string here, not the structured form
    assert!(err.request_error().is_none());
}
