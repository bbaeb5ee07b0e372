//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use atelier_core::ProductId;
use atelier_core::insights::ProductInsights;
use atelier_core::models::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::validation::parse_id;

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Look up a product by its raw path segment.
async fn find_product(state: &AppState, raw_id: &str) -> Result<Product> {
    let Some(id) = parse_id::<ProductId>(raw_id) else {
        return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    };

    state
        .storage()
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}

/// List every product.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.storage().get_products().await?))
}

/// Fetch one product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    find_product(&state, &id).await.map(Json)
}

/// Products in one category (case-sensitive).
///
/// GET /api/products/category/{category}
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.storage().get_products_by_category(&category).await?))
}

/// Fit, sustainability and cost-of-wearing insights for a product.
///
/// GET /api/products/{id}/insights
#[instrument(skip(state))]
pub async fn insights(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductInsights>> {
    let product = find_product(&state, &id).await?;
    Ok(Json(ProductInsights::derive(&product, state.fabric_rules())))
}
