//! Integration tests for the reqwest transport against a mock gateway.
//!
//! These exercise real HTTP: status handling, body decoding, timeouts and
//! refused connections all go through reqwest.

use std::time::Duration;

use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payments_gateway::{AdapterConfig, PaymentAdapter, PaymentResult};

/// Helper to build an adapter aimed at the mock server's charge endpoint.
fn adapter_for(server: &MockServer) -> PaymentAdapter {
    let config = AdapterConfig::new(format!("{}/v1/charge", server.uri()));
    PaymentAdapter::new(config).unwrap()
}

/// Helper to mount a single canned reply for any POST.
async fn reply_with(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/charge"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_success_sends_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charge"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(body_json(json!({
            "amount": 150.0,
            "currency": "RUB",
            "card_token": "tok_visa_9999",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success", "tx_id": "txn_123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter_for(&server).charge(150.0, "tok_visa_9999").await;

    assert_eq!(result, PaymentResult::success(Some("txn_123".into())));
}

#[tokio::test]
async fn test_single_content_type_header() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "success", "tx_id": "t"})),
    )
    .await;

    adapter_for(&server).charge(5.0, "tok").await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_types: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(content_types[0], "application/json");
}

#[tokio::test]
async fn test_gateway_decline() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"status": "failure", "reason": "insufficient_funds"})),
    )
    .await;

    let result = adapter_for(&server).charge(100.0, "tok_fail").await;

    assert_eq!(result.error(), Some("insufficient_funds"));
}

#[tokio::test]
async fn test_http_500_is_network_error() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"status": "failure", "reason": "boom"})),
    )
    .await;

    let result = adapter_for(&server).charge(120.0, "tok_err500").await;

    assert_eq!(result.error(), Some("network_error"));
}

#[tokio::test]
async fn test_http_400_is_network_error() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(400).set_body_string("Bad request"),
    )
    .await;

    let result = adapter_for(&server).charge(1.0, "bad_token").await;

    assert_eq!(result.error(), Some("network_error"));
}

#[tokio::test]
async fn test_empty_json_is_unknown() {
    let server = MockServer::start().await;
    reply_with(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let result = adapter_for(&server).charge(90.0, "tok_empty").await;

    assert_eq!(result.error(), Some("unknown"));
}

#[tokio::test]
async fn test_empty_body_is_unknown() {
    let server = MockServer::start().await;
    reply_with(&server, ResponseTemplate::new(200)).await;

    let result = adapter_for(&server).charge(90.0, "tok_empty").await;

    assert_eq!(result.error(), Some("unknown"));
}

#[tokio::test]
async fn test_unknown_status() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "strange_value"})),
    )
    .await;

    let result = adapter_for(&server).charge(50.0, "tok_weird").await;

    assert_eq!(result.error(), Some("unknown"));
}

#[tokio::test]
async fn test_malformed_json_is_network_error() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>gateway maintenance</html>"),
    )
    .await;

    let result = adapter_for(&server).charge(10.0, "tok_html").await;

    assert_eq!(result.error(), Some("network_error"));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    reply_with(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"status": "success", "tx_id": "too_late"}))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let config = AdapterConfig::new(format!("{}/v1/charge", server.uri()))
        .with_timeout(Duration::from_millis(200));
    let adapter = PaymentAdapter::new(config).unwrap();

    let result = adapter.charge(200.0, "tok_timeout").await;

    assert_eq!(result.error(), Some("timeout"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = AdapterConfig::new(format!("http://{addr}/v1/charge"));
    let adapter = PaymentAdapter::new(config).unwrap();

    let result = adapter.charge(300.0, "tok_network").await;

    assert_eq!(result.error(), Some("network_error"));
}

#[tokio::test]
async fn test_custom_url_receives_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = AdapterConfig::new(format!("{}/pay", server.uri()));
    let adapter = PaymentAdapter::new(config).unwrap();

    let result = adapter.charge(10.0, "tok_custom").await;

    assert_eq!(result, PaymentResult::success(None));
}
