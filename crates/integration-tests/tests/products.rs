//! Integration tests for catalog browsing and product insights.

use atelier_integration_tests::TestServer;
use reqwest::StatusCode;
use serde_json::Value;

async fn get_json(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let resp = server
        .client
        .get(server.url(path))
        .send()
        .await
        .expect("Request failed");
    let status = resp.status();
    let body = resp.json().await.expect("Response was not JSON");
    (status, body)
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_list_products_in_id_order() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products").await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().expect("Expected an array");
    assert_eq!(products.len(), 8);
    let ids: Vec<i64> = products.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    assert_eq!(products[0]["name"], "100% Viscose Relaxed Lace-Tie Pants");
    assert_eq!(products[0]["inStock"], true);
    assert_eq!(products[0]["inventory"]["30"], 12);
}

#[tokio::test]
async fn test_list_products_empty_store() {
    let server = TestServer::spawn_empty().await;

    let (status, body) = get_json(&server, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_get_product() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["originalPrice"], 2590);
    assert_eq!(body["discountPercentage"], 15);
}

#[tokio::test]
async fn test_get_product_coerces_leading_digits() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/2abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = TestServer::spawn().await;

    for path in ["/api/products/999", "/api/products/abc"] {
        let (status, body) = get_json(&server, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["message"], "Product not found");
    }
}

#[tokio::test]
async fn test_products_by_category_is_exact() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/category/Bottoms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (_, body) = get_json(&server, "/api/products/category/bottoms").await;
    assert_eq!(body, Value::Array(vec![]));

    let (_, body) = get_json(&server, "/api/products/category/Co-ord%20Set").await;
    assert_eq!(body[0]["id"], 8);
}

// ============================================================================
// Insights
// ============================================================================

#[tokio::test]
async fn test_insights_for_viscose() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/1/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fabricFamily"], "viscose");
    assert_eq!(body["stretchability"], 85);
    assert_eq!(body["lowStretch"], false);
    assert_eq!(body["fitAdvice"], "True to size");
    assert_eq!(body["sustainabilityScore"], 75);
    assert_eq!(body["impactLabel"], "Moderate Impact");
    assert_eq!(body["estimatedWears"], 50);
}

#[tokio::test]
async fn test_insights_for_linen_suggest_sizing_up() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/3/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fabricFamily"], "linen");
    assert_eq!(body["lowStretch"], true);
    assert_eq!(body["fitAdvice"], "Consider sizing up");
    assert_eq!(body["impactLabel"], "Eco-Friendly");
}

#[tokio::test]
async fn test_insights_missing_product() {
    let server = TestServer::spawn().await;

    let (status, body) = get_json(&server, "/api/products/42/insights").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}
