//! Integration tests for admin login and analytics.

use atelier_integration_tests::{ADMIN_PASSWORD, TestServer};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn login(server: &TestServer, body: Value) -> (StatusCode, Value) {
    let resp = server
        .client
        .post(server.url("/api/admin/login"))
        .json(&body)
        .send()
        .await
        .expect("Failed to log in");
    let status = resp.status();
    (status, resp.json().await.expect("Response was not JSON"))
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = TestServer::spawn().await;

    let (status, body) = login(
        &server,
        json!({"username": "admin", "password": ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["admin"]["username"], "admin");
    assert_eq!(body["admin"]["role"], "admin");
    assert!(body["admin"].get("password").is_none());
    assert_eq!(body["token"].as_str().map(str::len), Some(43));
    assert!(body["expiresAt"].is_string());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let server = TestServer::spawn().await;

    for body in [
        json!({"username": "admin", "password": "wrong"}),
        json!({"username": "nobody", "password": ADMIN_PASSWORD}),
        json!({"username": "admin"}),
        json!({}),
    ] {
        let (status, err) = login(&server, body.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{body}");
        assert_eq!(err["message"], "Invalid credentials");
    }
}

// ============================================================================
// Analytics
// ============================================================================

#[tokio::test]
async fn test_analytics_requires_token() {
    let server = TestServer::spawn().await;

    let resp = server
        .client
        .get(server.url("/api/admin/analytics"))
        .send()
        .await
        .expect("Failed to fetch analytics");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = server
        .client
        .get(server.url("/api/admin/analytics"))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("Failed to fetch analytics");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_analytics_with_token() {
    let server = TestServer::spawn().await;
    let token = server.admin_token().await;

    let resp = server
        .client
        .get(server.url("/api/admin/analytics"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch analytics");
    assert_eq!(resp.status(), StatusCode::OK);

    let text = resp.text().await.expect("Failed to read body");
    let golden = text.find(r#""golden":{"S":"#).expect("golden sizes start at S");
    assert!(text[golden..].find(r#""M":"#) < text[golden..].find(r#""XL":"#));
    assert!(text.contains(r#""fabricReturns":{"Cotton":12,"Viscose":8"#));

    let body: Value = serde_json::from_str(&text).expect("Response was not JSON");
    assert_eq!(body["fabricReturns"]["Polyester"], 15);
    assert_eq!(body["returnReasons"]["Size too small"], 35);
    assert!(body["sizeRecommendationAcceptance"].is_object());
    assert!(body["sizingData"]["golden"].is_object());
    assert!(body["sizingData"]["actual"].is_object());
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let server = TestServer::spawn().await;
    let token = server.admin_token().await;

    let resp = server
        .client
        .post(server.url("/api/admin/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(body["message"], "Logout successful");

    let resp = server
        .client
        .get(server.url("/api/admin/analytics"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch analytics");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
