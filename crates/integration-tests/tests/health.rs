//! Integration tests for health checks and request ids.

use atelier_integration_tests::TestServer;
use reqwest::StatusCode;

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn_empty().await;

    let resp = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_readiness_with_memory_storage() {
    let server = TestServer::spawn_empty().await;

    let resp = server
        .client
        .get(server.url("/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::spawn_empty().await;

    let resp = server
        .client
        .get(server.url("/health"))
        .header("x-request-id", "trace-abc-123")
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-abc-123")
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = TestServer::spawn_empty().await;

    let resp = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to get health");
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("Missing request id");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = TestServer::spawn().await;

    let resp = server
        .client
        .post(server.url("/api/cart"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to post");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
