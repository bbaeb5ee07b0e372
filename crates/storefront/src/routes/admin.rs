//! Admin dashboard API.
//!
//! Login issues a bearer token; analytics and logout require it.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use atelier_core::models::{AdminUser, AnalyticsSnapshot};

use super::{MessageResponse, ValidatedJson};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::services::{AdminAuthService, AuthError};
use crate::state::AppState;
use crate::validation::RequestBody;

/// Body of `POST /api/admin/login`.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl RequestBody for LoginRequest {
    const INVALID_MESSAGE: &'static str = "Invalid credentials";
}

/// Successful login body. The admin serializes without its password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: &'static str,
    pub admin: AdminUser,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Check admin credentials and issue a bearer token.
///
/// POST /api/admin/login
///
/// Body: `{username, password}`. Missing fields and bad credentials are
/// both 401 "Invalid credentials".
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<ValidatedJson<LoginRequest>, AppError>,
) -> Result<Json<LoginResponse>> {
    let ValidatedJson(LoginRequest { username, password }) =
        body.map_err(|_| AppError::Auth(AuthError::InvalidCredentials))?;

    let auth = AdminAuthService::new(state.storage(), state.admin_sessions());
    let (admin, issued) = auth.login(&username, &password).await.inspect_err(|e| {
        if matches!(e, AuthError::InvalidCredentials) {
            tracing::warn!(username = %username, "Admin login rejected");
        }
    })?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        admin,
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// Revoke the caller's token.
///
/// POST /api/admin/logout
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    admin: RequireAdmin,
) -> Json<MessageResponse> {
    state.admin_sessions().revoke(&admin.token).await;
    tracing::info!(admin = %admin.session.username, "Admin logged out");
    Json(MessageResponse::new("Logout successful"))
}

/// Dashboard analytics.
///
/// GET /api/admin/analytics
#[instrument(skip_all)]
pub async fn analytics(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<AnalyticsSnapshot>> {
    Ok(Json(state.storage().get_analytics_data().await?))
}
