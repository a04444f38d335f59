use crate::common::{bio_page, client_for, mock_profile_page, next_page, setup_server};
use ezbio_rs::{EzClient, EzError, Extraction};
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;

fn error_of(out: Extraction) -> String {
    match out {
        Extraction::Error { error } => error,
        Extraction::Profile(p) => panic!("expected error, got {p:?}"),
    }
}

#[tokio::test]
async fn connection_failure_becomes_error_message() {
    // Nothing listens on port 1.
    let client = EzClient::builder()
        .base_bio(Url::parse("http://127.0.0.1:1/").unwrap())
        .build()
        .unwrap();

    let err = ezbio_rs::profile::load_profile(&client, "alice")
        .await
        .unwrap_err();
    let expected = err.to_string();
    assert!(matches!(err, EzError::Http(_)));

    let out = ezbio_rs::profile::extract(&client, "alice").await;
    assert_eq!(error_of(out), expected);
}

#[tokio::test]
async fn non_2xx_is_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/alice");
        then.status(503).body("<html>challenge</html>");
    });
    let client = client_for(&server);

    let err = ezbio_rs::profile::load_profile(&client, "alice")
        .await
        .unwrap_err();
    mock.assert();

    match err {
        EzError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/alice"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    let msg = error_of(ezbio_rs::profile::extract(&client, "alice").await);
    assert!(msg.starts_with("Unexpected response status: 503"), "{msg}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(bio_page("{}"));
    });
    let client = EzClient::builder()
        .base_bio(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = ezbio_rs::profile::load_profile(&client, "slow")
        .await
        .unwrap_err();
    match err {
        EzError::Http(e) => assert!(e.is_timeout(), "{e}"),
        other => panic!("expected Http timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_next_data_is_unclassified() {
    let server = setup_server();
    let _mock = mock_profile_page(&server, "broken", next_page("{\"props\": {"));
    let client = client_for(&server);

    let msg = error_of(ezbio_rs::profile::extract(&client, "broken").await);
    assert!(msg.starts_with("JSON error:"), "{msg}");
}

#[tokio::test]
async fn mistyped_bio_field_is_unclassified() {
    let server = setup_server();
    let _mock = mock_profile_page(&server, "odd", bio_page(r#"{"views":"many"}"#));
    let client = client_for(&server);

    let msg = error_of(ezbio_rs::profile::extract(&client, "odd").await);
    assert!(msg.starts_with("JSON error:"), "{msg}");
    assert_ne!(msg, "User not found");
}
