//! Back-in-stock notification signups.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use atelier_core::ProductId;
use atelier_core::models::{NewNotificationSignup, NotificationSignup};

use super::ValidatedJson;
use crate::error::Result;
use crate::state::AppState;
use crate::validation::{self, RequestBody};

/// Body of `POST /api/notification-signup`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSignupRequest {
    #[serde(deserialize_with = "validation::lenient_id")]
    pub product_id: ProductId,
    pub size: String,
    pub email: String,
}

impl RequestBody for NotificationSignupRequest {
    const INVALID_MESSAGE: &'static str = "Invalid notification signup data";
}

impl From<NotificationSignupRequest> for NewNotificationSignup {
    fn from(req: NotificationSignupRequest) -> Self {
        Self {
            product_id: req.product_id,
            size: req.size,
            email: req.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub signup: NotificationSignup,
}

/// Register interest in a sold-out size.
///
/// POST /api/notification-signup
///
/// Body: `{productId, size, email}`. `productId` may be a numeric string.
/// The email is stored as given and duplicates are accepted.
#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<NotificationSignupRequest>,
) -> Result<Json<SignupResponse>> {
    let signup = state
        .storage()
        .create_notification_signup(body.into())
        .await?;

    Ok(Json(SignupResponse {
        message: "Notification signup successful",
        signup,
    }))
}
