//! Mock API tests for the raw transport client
//!
//! These tests use wiremock to simulate the profile service and exercise the
//! single-shot fetch path: success, protocol failures, transport failures,
//! and the never-raises boundary.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use twinfetch::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_body(mail: &str) -> serde_json::Value {
    json!({
        "id": "48d31887-5fad-4d73-a9f5-3c356e68a038",
        "displayName": "Ada Lovelace",
        "mail": mail,
        "userPrincipalName": "ada@example.com"
    })
}

fn client_for(server: &MockServer) -> DirectClient {
    DirectClient::new(
        Arc::new(StaticTokenProvider::new("test-token")),
        HttpConfig::default(),
    )
    .unwrap()
    .with_base_url(server.uri())
}

#[tokio::test]
async fn test_successful_fetch_extracts_mail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body("ada@example.com")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = client.fetch("me").await;

    assert_eq!(outcome, FetchOutcome::Success("ada@example.com".to_string()));
}

#[tokio::test]
async fn test_repeated_fetches_are_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body("ada@example.com")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.fetch("me").await;
    let second = client.fetch("me").await;

    assert_eq!(first, second);
    assert_eq!(first.success_value(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_null_mail_surfaces_as_empty_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "mail": null })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.fetch("me").await, FetchOutcome::Success(String::new()));
}

#[tokio::test]
async fn test_protocol_failure_carries_status_reason_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"error":{"code":"Forbidden"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.fetch("me").await {
        FetchOutcome::Failure {
            status,
            reason,
            body,
        } => {
            assert_eq!(status, 403);
            assert_eq!(reason, "Forbidden");
            assert!(body.contains("Forbidden"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_never_raises() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.fetch("me").await {
        FetchOutcome::Transport(message) => assert!(message.contains("JSON")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_never_raises() {
    // Nothing listens on this address; the request fails at the transport layer.
    let client = DirectClient::new(
        Arc::new(StaticTokenProvider::new("test-token")),
        HttpConfig::default(),
    )
    .unwrap()
    .with_base_url("http://127.0.0.1:9");

    match client.fetch("me").await {
        FetchOutcome::Transport(_) => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_never_raises() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile_body("ada@example.com"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder()
        .timeout(Some(Duration::from_millis(50)))
        .build();
    let client = DirectClient::new(Arc::new(StaticTokenProvider::new("test-token")), config)
        .unwrap()
        .with_base_url(mock_server.uri());

    match client.fetch("me").await {
        FetchOutcome::Transport(_) => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}
