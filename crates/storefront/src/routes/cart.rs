//! Cart route handlers.
//!
//! Carts are keyed by the `session-id` header (see [`CartSession`]). Lines
//! are not checked against the catalog and inventory is never reserved.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use atelier_core::models::{CartItem, NewCartItem};
use atelier_core::{CartItemId, ProductId};

use super::{MessageResponse, ValidatedJson};
use crate::error::{AppError, Result};
use crate::middleware::CartSession;
use crate::state::AppState;
use crate::validation::{RequestBody, Violation, parse_id};

const CART_ITEM_NOT_FOUND: &str = "Cart item not found";

fn not_found() -> AppError {
    AppError::NotFound(CART_ITEM_NOT_FOUND.to_string())
}

/// Body of `POST /api/cart`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub size: String,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl RequestBody for AddToCartRequest {
    const INVALID_MESSAGE: &'static str = "Invalid cart item data";
}

/// Body of `PATCH /api/cart/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: i32,
}

impl RequestBody for UpdateCartRequest {
    const INVALID_MESSAGE: &'static str = "Invalid quantity";
}

/// Reject quantities below one.
fn check_quantity(quantity: i32, message: &str) -> Result<i32> {
    if quantity < 1 {
        return Err(AppError::Validation {
            message: message.to_string(),
            errors: vec![Violation::new(
                "quantity",
                "Number must be greater than or equal to 1",
            )],
        });
    }
    Ok(quantity)
}

/// Cart lines for the caller's session.
///
/// GET /api/cart
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    CartSession(session_id): CartSession,
) -> Result<Json<Vec<CartItem>>> {
    Ok(Json(state.storage().get_cart_items(&session_id).await?))
}

/// Add a line to the caller's cart.
///
/// POST /api/cart
///
/// Body: `{productId, size, quantity?}`. Any `sessionId` in the body is
/// ignored in favour of the header.
#[instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    CartSession(session_id): CartSession,
    ValidatedJson(body): ValidatedJson<AddToCartRequest>,
) -> Result<Json<CartItem>> {
    let quantity = body
        .quantity
        .map(|q| check_quantity(q, AddToCartRequest::INVALID_MESSAGE))
        .transpose()?;
    let item = NewCartItem {
        product_id: body.product_id,
        size: body.size,
        quantity,
        session_id,
    };

    let item = state.storage().add_to_cart(item).await?;
    tracing::info!(cart_item_id = %item.id, product_id = %item.product_id, "Added to cart");
    Ok(Json(item))
}

/// Change a line's quantity.
///
/// PATCH /api/cart/{id}
///
/// Body: `{quantity}`, an integer of at least 1.
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCartRequest>,
) -> Result<Json<CartItem>> {
    let quantity = check_quantity(body.quantity, UpdateCartRequest::INVALID_MESSAGE)?;
    let id = parse_id::<CartItemId>(&id).ok_or_else(not_found)?;

    state
        .storage()
        .update_cart_item(id, quantity)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Remove a line.
///
/// DELETE /api/cart/{id}
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id::<CartItemId>(&id).ok_or_else(not_found)?;

    if !state.storage().remove_from_cart(id).await? {
        return Err(not_found());
    }

    Ok(Json(MessageResponse::new("Item removed from cart")))
}
