//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                    - Liveness
//! GET    /health/ready                              - Storage readiness
//!
//! # Products
//! GET    /api/products                              - All products
//! GET    /api/products/{id}                         - One product
//! GET    /api/products/{id}/insights                - Fabric fit/sustainability/cost insights
//! GET    /api/products/category/{category}          - Products in a category
//!
//! # Cart (keyed by `session-id` header)
//! GET    /api/cart                                  - Cart lines
//! POST   /api/cart                                  - Add a line
//! PATCH  /api/cart/{id}                             - Change quantity
//! DELETE /api/cart/{id}                             - Remove a line
//!
//! # Admin
//! POST   /api/admin/login                           - Issue a bearer token
//! POST   /api/admin/logout                          - Revoke the bearer token
//! GET    /api/admin/analytics                       - Dashboard data (bearer token)
//!
//! # Size recommendations
//! GET    /api/size-recommendation/{productId}/{userId}  - Stored or fallback recommendation
//! GET    /api/size-recommendation/{productId}/response  - Same, for userId "response"
//! POST   /api/size-recommendation/{id}/response         - Record accept/reject
//!
//! # Notifications
//! POST   /api/notification-signup                   - Back-in-stock signup
//! ```
//!
//! Path ids are coerced from their leading digits, so `/api/products/12abc`
//! is product 12 and `/api/products/abc` matches nothing.

pub mod admin;
pub mod cart;
pub mod health;
pub mod notifications;
pub mod products;
pub mod recommendations;

use axum::{
    Router,
    body::Bytes,
    extract::{FromRequest, Request},
    routing::{get, patch, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{self, BodyError, RequestBody};

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// A JSON request body deserialized into `T`.
///
/// An empty body reads as `{}`. Malformed JSON is a 400 `BadRequest`; JSON
/// of the wrong shape is a 400 `Validation` carrying `T::INVALID_MESSAGE`
/// and the offending field.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestBody,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        validation::parse_body(&bytes)
            .map(Self)
            .map_err(|err| match err {
                BodyError::Malformed(message) => AppError::BadRequest(message),
                BodyError::Invalid(violation) => AppError::Validation {
                    message: T::INVALID_MESSAGE.to_string(),
                    errors: vec![violation],
                },
            })
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/category/{category}", get(products::by_category))
        .route("/{id}", get(products::show))
        .route("/{id}/insights", get(products::insights))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::list).post(cart::add))
        .route("/{id}", patch(cart::update).delete(cart::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/analytics", get(admin::analytics))
}

/// Create the size recommendation routes router.
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/{user_id}", get(recommendations::show))
        .route(
            "/{id}/response",
            get(recommendations::show_for_response_user).post(recommendations::respond),
        )
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/admin", admin_routes())
        .nest("/size-recommendation", recommendation_routes())
        .route("/notification-signup", post(notifications::signup))
}

/// Create the complete router (API plus health checks).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}
