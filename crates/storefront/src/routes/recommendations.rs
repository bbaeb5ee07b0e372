//! Size recommendation handlers.
//!
//! A stored recommendation is returned when one exists for the product and
//! user. Otherwise a fixed fallback is returned; it is not persisted.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use atelier_core::models::SizeRecommendation;
use atelier_core::{ProductId, SizeRecommendationId};

use super::{MessageResponse, ValidatedJson};
use crate::error::Result;
use crate::state::AppState;
use crate::validation::{RequestBody, parse_id};

/// Size suggested when nothing is stored for the shopper.
pub const FALLBACK_SIZE: &str = "M";

/// Reason given with the fallback size.
pub const FALLBACK_REASON: &str = "Considering the fabric stretchability and based on your past purchases and returns, we recommend going one size up for optimal comfort.";

/// Recommendation returned when none is stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackRecommendation {
    /// `null` when the path segment has no leading integer.
    pub product_id: Option<ProductId>,
    pub user_id: String,
    pub recommended_size: &'static str,
    pub reason: &'static str,
}

impl FallbackRecommendation {
    #[must_use]
    pub const fn new(product_id: Option<ProductId>, user_id: String) -> Self {
        Self {
            product_id,
            user_id,
            recommended_size: FALLBACK_SIZE,
            reason: FALLBACK_REASON,
        }
    }
}

/// Either a stored recommendation or the fallback.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationBody {
    Stored(SizeRecommendation),
    Fallback(FallbackRecommendation),
}

/// Body of `POST /api/size-recommendation/{id}/response`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponseRequest {
    pub accepted: bool,
    #[serde(default)]
    pub actual_size: Option<String>,
}

impl RequestBody for RecommendationResponseRequest {
    const INVALID_MESSAGE: &'static str = "Invalid recommendation response";
}

/// User id the `/{id}/response` path carries on a GET.
pub const RESPONSE_USER_ID: &str = "response";

/// Recommendation for a product and shopper.
///
/// GET /api/size-recommendation/{productId}/{userId}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path((product_id, user_id)): Path<(String, String)>,
) -> Result<Json<RecommendationBody>> {
    lookup(&state, &product_id, user_id).await
}

/// GET /api/size-recommendation/{productId}/response
///
/// The static `response` segment shadows `{userId}` in the router, so this
/// serves the lookup for a shopper whose id is literally "response".
#[instrument(skip(state))]
pub async fn show_for_response_user(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<RecommendationBody>> {
    lookup(&state, &product_id, RESPONSE_USER_ID.to_string()).await
}

async fn lookup(
    state: &AppState,
    raw_product_id: &str,
    user_id: String,
) -> Result<Json<RecommendationBody>> {
    let product_id = parse_id::<ProductId>(raw_product_id);

    let stored = match product_id {
        Some(id) => state.storage().get_size_recommendation(id, &user_id).await?,
        None => None,
    };

    let body = stored.map_or_else(
        || RecommendationBody::Fallback(FallbackRecommendation::new(product_id, user_id)),
        RecommendationBody::Stored,
    );
    Ok(Json(body))
}

/// Record whether the shopper took the recommendation.
///
/// POST /api/size-recommendation/{id}/response
///
/// Body: `{accepted, actualSize?}`. Unknown ids are acknowledged without
/// changing anything.
#[instrument(skip(state, body))]
pub async fn respond(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<RecommendationResponseRequest>,
) -> Result<Json<MessageResponse>> {
    if let Some(id) = parse_id::<SizeRecommendationId>(&id) {
        state
            .storage()
            .update_size_recommendation_acceptance(id, body.accepted, body.actual_size)
            .await?;
    }

    Ok(Json(MessageResponse::new("Recommendation response recorded")))
}
