//! Storage layer for the storefront.
//!
//! Every entity is persisted through the [`Storage`] trait, which has two
//! implementations with identical external behaviour:
//!
//! - [`MemoryStorage`] - map-backed tables, used for tests and local demos
//! - [`PgStorage`] - `PostgreSQL` tables via per-entity repositories
//!
//! The variant is chosen once at startup (`STOREFRONT_STORAGE`) and never
//! mixed at runtime.
//!
//! # Tables
//!
//! - `users` - Shopper accounts
//! - `products` - Catalog (list/map attributes in `JSONB` columns)
//! - `cart_items` - Cart lines keyed by session marker
//! - `admin_users` - Dashboard accounts
//! - `size_recommendations` - Stored recommendations and responses
//! - `purchase_history` - Seeded purchase rows
//! - `notification_signups` - Back-in-stock interest
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p atelier-cli -- migrate
//! ```

pub mod admin_users;
pub mod cart;
pub mod memory;
pub mod notifications;
pub mod postgres;
pub mod products;
pub mod purchases;
pub mod recommendations;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use atelier_core::models::{
    AdminUser, AnalyticsSnapshot, CartItem, NewAdminUser, NewCartItem, NewNotificationSignup,
    NewProduct, NewPurchaseHistory, NewSizeRecommendation, NewUser, NotificationSignup, Product,
    PurchaseHistory, SizeRecommendation, User,
};
use atelier_core::{CartItemId, ProductId, SizeRecommendationId, UserId};

pub use admin_users::AdminUserRepository;
pub use cart::CartRepository;
pub use memory::MemoryStorage;
pub use notifications::NotificationSignupRepository;
pub use postgres::PgStorage;
pub use products::ProductRepository;
pub use purchases::PurchaseHistoryRepository;
pub use recommendations::SizeRecommendationRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// An in-memory table has handed out every id.
    #[error("id sequence exhausted")]
    IdsExhausted,
}

/// Map a unique-constraint violation to [`RepositoryError::Conflict`].
pub(crate) fn conflict_on_unique(err: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("{what} already exists"));
    }
    RepositoryError::Database(err)
}

/// CRUD contract over every storefront entity.
///
/// Absence is `Ok(None)`, `Ok(false)` or an empty list; errors are reserved
/// for backend failures and constraint violations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a shopper account. Duplicate usernames are a conflict.
    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// All products, ordered by id.
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Products whose category equals `category` exactly (case-sensitive), ordered by id.
    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// Cart lines for one session marker, ordered by id.
    async fn get_cart_items(&self, session_id: &str) -> Result<Vec<CartItem>, RepositoryError>;

    /// Insert a cart line. The quantity defaults to 1; the product is not checked.
    async fn add_to_cart(&self, item: NewCartItem) -> Result<CartItem, RepositoryError>;

    /// Overwrite a cart line's quantity. Returns `None` if the line does not exist.
    async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;

    /// Delete a cart line. Returns `false` if the line did not exist.
    async fn remove_from_cart(&self, id: CartItemId) -> Result<bool, RepositoryError>;

    async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError>;

    /// Insert an admin account. Duplicate usernames are a conflict.
    async fn create_admin(&self, admin: NewAdminUser) -> Result<AdminUser, RepositoryError>;

    /// Exact match on both product and user.
    async fn get_size_recommendation(
        &self,
        product_id: ProductId,
        user_id: &str,
    ) -> Result<Option<SizeRecommendation>, RepositoryError>;

    async fn create_size_recommendation(
        &self,
        recommendation: NewSizeRecommendation,
    ) -> Result<SizeRecommendation, RepositoryError>;

    /// Record a shopper's response. A missing id is silently ignored.
    async fn update_size_recommendation_acceptance(
        &self,
        id: SizeRecommendationId,
        accepted: bool,
        actual_size: Option<String>,
    ) -> Result<(), RepositoryError>;

    async fn get_purchase_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<PurchaseHistory>, RepositoryError>;

    async fn create_purchase_history(
        &self,
        history: NewPurchaseHistory,
    ) -> Result<PurchaseHistory, RepositoryError>;

    async fn create_notification_signup(
        &self,
        signup: NewNotificationSignup,
    ) -> Result<NotificationSignup, RepositoryError>;

    /// Dashboard analytics. Static data; purchase history is not consulted.
    async fn get_analytics_data(&self) -> Result<AnalyticsSnapshot, RepositoryError> {
        Ok(AnalyticsSnapshot::sample())
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
