//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::{Disposition, RawRecord};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn records_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/records", server.uri())).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("managed-records/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_records_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "disposition": "open", "color": "red"},
            {"id": 2, "disposition": "closed", "color": "green"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let records = client.get_records(&records_url(&mock_server)).await.unwrap();

    assert_eq!(
        records,
        vec![
            RawRecord::new(1, Disposition::Open, "red"),
            RawRecord::new(2, Disposition::Closed, "green"),
        ]
    );
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(header("X-Api-Key", "secret"))
        .and(header("user-agent", "records-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Api-Key", "secret")
        .user_agent("records-test/0.1")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let records = client.get_records(&records_url(&mock_server)).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_gate_rejects_server_error_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus {
            status,
            status_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gate_rejects_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    assert!(err.is_status());
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
}

#[tokio::test]
async fn test_gate_reports_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_gate_rejects_non_array_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"records": []})),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_gate_rejects_page_with_string_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "disposition": "open", "color": "red"},
            {"id": "rec-2", "disposition": "closed", "color": "blue"}
        ])))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    // One bad record fails the whole page
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_gate_rejects_record_without_color() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "disposition": "open"}
        ])))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_records(&records_url(&mock_server))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_transport_failure() {
    // Bind and drop a listener so the port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = Url::parse(&format!("http://127.0.0.1:{port}/records")).unwrap();

    let client = HttpClient::new().unwrap();
    let err = client.get(&url).await.unwrap_err();

    assert!(err.is_transport());
}
