//! `PostgreSQL`-backed [`Storage`].

use async_trait::async_trait;
use sqlx::PgPool;

use atelier_core::models::{
    AdminUser, CartItem, NewAdminUser, NewCartItem, NewNotificationSignup, NewProduct,
    NewPurchaseHistory, NewSizeRecommendation, NewUser, NotificationSignup, Product,
    PurchaseHistory, SizeRecommendation, User,
};
use atelier_core::{CartItemId, ProductId, SizeRecommendationId, UserId};

use super::{
    AdminUserRepository, CartRepository, NotificationSignupRepository, ProductRepository,
    PurchaseHistoryRepository, RepositoryError, SizeRecommendationRepository, Storage,
    UserRepository,
};

/// [`Storage`] over a connection pool. Each call delegates to a repository.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        UserRepository::new(&self.pool).get_by_id(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        UserRepository::new(&self.pool)
            .get_by_username(username)
            .await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        UserRepository::new(&self.pool).create(&user).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        ProductRepository::new(&self.pool).get_by_id(id).await
    }

    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        ProductRepository::new(&self.pool).list().await
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        ProductRepository::new(&self.pool)
            .list_by_category(category)
            .await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        ProductRepository::new(&self.pool).create(product).await
    }

    async fn get_cart_items(&self, session_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        CartRepository::new(&self.pool)
            .list_for_session(session_id)
            .await
    }

    async fn add_to_cart(&self, item: NewCartItem) -> Result<CartItem, RepositoryError> {
        CartRepository::new(&self.pool).add(&item).await
    }

    async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        CartRepository::new(&self.pool)
            .update_quantity(id, quantity)
            .await
    }

    async fn remove_from_cart(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        CartRepository::new(&self.pool).remove(id).await
    }

    async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        AdminUserRepository::new(&self.pool)
            .get_by_username(username)
            .await
    }

    async fn create_admin(&self, admin: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        AdminUserRepository::new(&self.pool).create(&admin).await
    }

    async fn get_size_recommendation(
        &self,
        product_id: ProductId,
        user_id: &str,
    ) -> Result<Option<SizeRecommendation>, RepositoryError> {
        SizeRecommendationRepository::new(&self.pool)
            .get(product_id, user_id)
            .await
    }

    async fn create_size_recommendation(
        &self,
        recommendation: NewSizeRecommendation,
    ) -> Result<SizeRecommendation, RepositoryError> {
        SizeRecommendationRepository::new(&self.pool)
            .create(&recommendation)
            .await
    }

    async fn update_size_recommendation_acceptance(
        &self,
        id: SizeRecommendationId,
        accepted: bool,
        actual_size: Option<String>,
    ) -> Result<(), RepositoryError> {
        SizeRecommendationRepository::new(&self.pool)
            .record_response(id, accepted, actual_size.as_deref())
            .await
    }

    async fn get_purchase_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<PurchaseHistory>, RepositoryError> {
        PurchaseHistoryRepository::new(&self.pool)
            .list_for_user(user_id)
            .await
    }

    async fn create_purchase_history(
        &self,
        history: NewPurchaseHistory,
    ) -> Result<PurchaseHistory, RepositoryError> {
        PurchaseHistoryRepository::new(&self.pool)
            .create(&history)
            .await
    }

    async fn create_notification_signup(
        &self,
        signup: NewNotificationSignup,
    ) -> Result<NotificationSignup, RepositoryError> {
        NotificationSignupRepository::new(&self.pool)
            .create(&signup)
            .await
    }
}
