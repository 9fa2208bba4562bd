use chrono::{TimeZone, Utc};
use dbn_hist::{
    Compression, DateRange, Delivery, Encoding, JobState, SType, Schema, SplitDuration,
    SubmitJobParams,
};
use httpmock::Method::{GET, POST};

use crate::common::{client_for, fixture, setup_server, EXPECTED_AUTH};

#[tokio::test]
async fn submit_job_parses_received_job() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v0/batch.submit_job")
            .header("authorization", EXPECTED_AUTH)
            .header("content-type", "application/x-www-form-urlencoded")
            .body_includes("dataset=GLBX.MDP3")
            .body_includes("schema=trades")
            .body_includes("symbols=ESZ3%2CNQZ3")
            .body_includes("split_duration=day")
            .body_includes("delivery=download");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("batch.submit_job", "GLBX.MDP3"));
    });

    let range = DateRange::new(
        Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let params = SubmitJobParams::new("GLBX.MDP3", ["ESZ3", "NQZ3"], Schema::Trades, range);
    let job = client_for(&server).submit_job(&params).await.unwrap();
    mock.assert();

    assert_eq!(job.id, "GLBX-20230926-3LGT3ZEGMT");
    assert_eq!(job.state, JobState::Received);
    assert_eq!(job.symbols, vec!["ESZ3".to_string(), "NQZ3".to_string()]);
    assert_eq!(job.schema, Schema::Trades);
    assert_eq!(job.stype_in, SType::RawSymbol);
    assert_eq!(job.stype_out, SType::InstrumentId);
    assert_eq!(job.encoding, Encoding::Dbn);
    assert_eq!(job.compression, Compression::Zstd);
    assert_eq!(job.start, range.start);
    assert_eq!(job.end, range.end);
    assert_eq!(job.cost_usd, None);
    assert_eq!(job.ts_queued, None);
    assert_eq!(
        job.ts_received,
        Utc.with_ymd_and_hms(2023, 9, 26, 20, 53, 27).unwrap()
            + chrono::Duration::microseconds(276_950)
    );
}

#[tokio::test]
async fn list_jobs_sends_state_filter_and_since_date() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/batch.list_jobs")
            .query_param("states", "processing,done")
            .query_param("since", "2023-09-20")
            .header("authorization", EXPECTED_AUTH);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("batch.list_jobs", "done"));
    });

    let since = Utc.with_ymd_and_hms(2023, 9, 20, 9, 15, 0).unwrap();
    let jobs = client_for(&server)
        .list_jobs(&[JobState::Processing, JobState::Done], Some(since))
        .await
        .unwrap();
    mock.assert();

    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.state, JobState::Done);
    assert_eq!(job.symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    assert_eq!(job.schema, Schema::Ohlcv1D);
    assert_eq!(job.encoding, Encoding::Csv);
    assert_eq!(job.compression, Compression::None);
    assert_eq!(job.split_duration, SplitDuration::Month);
    assert_eq!(job.delivery, Delivery::Download);
    assert_eq!(job.limit, Some(1000));
    assert_eq!(job.record_count, Some(208));
    assert_eq!(job.cost_usd, Some(0.119));
    assert!(job.pretty_px && job.pretty_ts && job.map_symbols);
    assert_eq!(job.start, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    assert!(job.ts_expiration.is_some());
    assert!(job.ts_process_done.unwrap() > job.ts_process_start.unwrap());
}

#[tokio::test]
async fn list_jobs_without_filters_sends_no_query() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/batch.list_jobs")
            .is_true(|req| req.query_params().is_empty());
        then.status(200).body("[]");
    });

    let jobs = client_for(&server).list_jobs(&[], None).await.unwrap();
    mock.assert();

    assert!(jobs.is_empty());
}

#[tokio::test]
async fn list_files_returns_download_urls() {
    let server = setup_server();
    let job_id = "XNAS-20230920-AB12CD34EF";
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/batch.list_files")
            .query_param("job_id", job_id);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("batch.list_files", job_id));
    });

    let files = client_for(&server).list_files(job_id).await.unwrap();
    mock.assert();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].filename, "metadata.json");
    assert_eq!(files[0].size, 1102);
    assert!(files[0].hash.starts_with("sha256:"));
    assert!(files[0].ftp_url().is_some());
    assert!(files[1].https_url().unwrap().ends_with(".ohlcv-1d.csv"));
    assert_eq!(files[1].ftp_url(), None);
}
