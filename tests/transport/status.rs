use dbn_hist::HistError;
use httpmock::Method::GET;

use crate::common::{client_for, setup_server};

async fn list_datasets_with_status(status: u16, body: &'static str) -> HistError {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v0/metadata.list_datasets");
        then.status(status).body(body);
    });

    let err = client_for(&server)
        .list_datasets(Default::default())
        .await
        .unwrap_err();
    mock.assert();
    err
}

#[tokio::test]
async fn server_error_carries_status_reason_and_body() {
    let err = list_datasets_with_status(500, "upstream unavailable").await;

    match &err {
        HistError::Status {
            status,
            reason,
            body,
        } => {
            assert_eq!(*status, 500);
            assert_eq!(reason, "Internal Server Error");
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "HTTP 500 Internal Server Error: upstream unavailable"
    );
}

#[tokio::test]
async fn only_200_counts_as_success() {
    // A JSON body that would parse is still rejected when the status is not 200.
    let err = list_datasets_with_status(202, r#"["XNAS.ITCH"]"#).await;
    assert_eq!(err.status(), Some(202));
    assert!(err.to_string().contains(r#"["XNAS.ITCH"]"#));
}

#[tokio::test]
async fn empty_error_body_is_kept_empty() {
    let err = list_datasets_with_status(403, "").await;
    match err {
        HistError::Status { status, body, .. } => {
            assert_eq!(status, 403);
            assert!(body.is_empty());
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
