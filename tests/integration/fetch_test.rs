//! Integration tests for the Indodax ticker client

mod common;

use btc_ticker::error::{ErrorKind, FetchError};
use btc_ticker::feed::{IndodaxClient, PriceSource, TickerClientConfig};
use common::{refused_url, spawn_responder, Reply};
use std::time::Duration;

fn client(url: String) -> IndodaxClient {
    IndodaxClient::with_config(TickerClientConfig::new(url).timeout(Duration::from_millis(500)))
        .unwrap()
}

#[tokio::test]
async fn test_fetch_valid_ticker() {
    let url = spawn_responder(vec![Reply::ticker("1050000")]).await;
    let sample = client(url).fetch_once().await.unwrap();
    assert_eq!(sample.value, 1_050_000);
}

#[tokio::test]
async fn test_fetch_numeric_last() {
    let url = spawn_responder(vec![Reply::ok(r#"{"ticker":{"last":987654321}}"#)]).await;
    let sample = client(url).fetch_once().await.unwrap();
    assert_eq!(sample.value, 987_654_321);
}

#[tokio::test]
async fn test_fetch_server_error_is_http_error() {
    let url = spawn_responder(vec![Reply::Status(500, "oops".to_string())]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500 }));
    assert_eq!(err.kind(), ErrorKind::Http);
}

#[tokio::test]
async fn test_fetch_non_200_success_is_http_error() {
    let body = r#"{"ticker":{"last":"1050000"}}"#.to_string();
    let url = spawn_responder(vec![Reply::Status(201, body)]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 201 }));
}

#[tokio::test]
async fn test_fetch_not_found_is_http_error() {
    let url = spawn_responder(vec![Reply::Status(404, "{}".to_string())]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Http);
}

#[tokio::test]
async fn test_fetch_malformed_body_is_parse_error() {
    let url = spawn_responder(vec![Reply::ok("<html>maintenance</html>")]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_fetch_missing_field_is_parse_error() {
    let url = spawn_responder(vec![Reply::ok(r#"{"ticker":{"high":"1"}}"#)]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_fetch_non_numeric_is_parse_error() {
    let url = spawn_responder(vec![Reply::ticker("n/a")]).await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_fetch_timeout_is_connectivity_error() {
    let url = spawn_responder(vec![Reply::Hang]).await;
    let client = IndodaxClient::with_config(
        TickerClientConfig::new(url).timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = client.fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connectivity);
}

#[tokio::test]
async fn test_fetch_refused_is_connectivity_error() {
    let url = refused_url().await;
    let err = client(url).fetch_once().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connectivity);
}
