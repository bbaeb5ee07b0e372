//! Map-backed storage.
//!
//! Each table is a `BTreeMap` keyed by id with its own auto-increment
//! counter, so iteration order is insertion order. All tables sit behind a
//! single lock; there are no multi-step transactions.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use atelier_core::models::{
    AdminUser, CartItem, NewAdminUser, NewCartItem, NewNotificationSignup, NewProduct,
    NewPurchaseHistory, NewSizeRecommendation, NewUser, NotificationSignup, Product,
    PurchaseHistory, SizeRecommendation, User,
};
use atelier_core::{
    AdminUserId, CartItemId, NotificationSignupId, ProductId, PurchaseHistoryId,
    SizeRecommendationId, UserId,
};

use super::{RepositoryError, Storage};

/// One table: rows by id plus the last id handed out.
#[derive(Debug)]
struct Table<K, V> {
    rows: BTreeMap<K, V>,
    last_id: i32,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Ord + Copy + From<i32>,
    V: Clone,
{
    fn insert_with(&mut self, build: impl FnOnce(K) -> V) -> Result<V, RepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        self.last_id = next;
        let id = K::from(next);
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn get(&self, id: K) -> Option<V> {
        self.rows.get(&id).cloned()
    }

    fn filter(&self, mut predicate: impl FnMut(&V) -> bool) -> Vec<V> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    fn find(&self, mut predicate: impl FnMut(&V) -> bool) -> Option<V> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table<UserId, User>,
    products: Table<ProductId, Product>,
    cart_items: Table<CartItemId, CartItem>,
    admin_users: Table<AdminUserId, AdminUser>,
    size_recommendations: Table<SizeRecommendationId, SizeRecommendation>,
    purchase_history: Table<PurchaseHistoryId, PurchaseHistory>,
    notification_signups: Table<NotificationSignupId, NotificationSignup>,
}

/// In-memory [`Storage`]. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.tables.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .find(|user| user.username == username))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .find(|existing| existing.username == user.username)
            .is_some()
        {
            return Err(RepositoryError::Conflict(
                "username already exists".to_owned(),
            ));
        }
        tables.users.insert_with(|id| user.into_user(id))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.tables.read().await.products.get(id))
    }

    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.tables.read().await.products.filter(|_| true))
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .products
            .filter(|product| product.category == category))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        self.tables
            .write()
            .await
            .products
            .insert_with(|id| product.into_product(id))
    }

    async fn get_cart_items(&self, session_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .cart_items
            .filter(|item| item.session_id == session_id))
    }

    async fn add_to_cart(&self, item: NewCartItem) -> Result<CartItem, RepositoryError> {
        self.tables
            .write()
            .await
            .cart_items
            .insert_with(|id| item.into_cart_item(id))
    }

    async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut tables = self.tables.write().await;
        Ok(tables.cart_items.rows.get_mut(&id).map(|item| {
            item.quantity = quantity;
            item.clone()
        }))
    }

    async fn remove_from_cart(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        Ok(self
            .tables
            .write()
            .await
            .cart_items
            .rows
            .remove(&id)
            .is_some())
    }

    async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .admin_users
            .find(|admin| admin.username == username))
    }

    async fn create_admin(&self, admin: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables
            .admin_users
            .find(|existing| existing.username == admin.username)
            .is_some()
        {
            return Err(RepositoryError::Conflict(
                "admin username already exists".to_owned(),
            ));
        }
        tables.admin_users.insert_with(|id| admin.into_admin(id))
    }

    async fn get_size_recommendation(
        &self,
        product_id: ProductId,
        user_id: &str,
    ) -> Result<Option<SizeRecommendation>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .size_recommendations
            .find(|rec| rec.product_id == product_id && rec.user_id == user_id))
    }

    async fn create_size_recommendation(
        &self,
        recommendation: NewSizeRecommendation,
    ) -> Result<SizeRecommendation, RepositoryError> {
        self.tables
            .write()
            .await
            .size_recommendations
            .insert_with(|id| recommendation.into_recommendation(id))
    }

    async fn update_size_recommendation_acceptance(
        &self,
        id: SizeRecommendationId,
        accepted: bool,
        actual_size: Option<String>,
    ) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(rec) = tables.size_recommendations.rows.get_mut(&id) {
            rec.record_response(accepted, actual_size);
        }
        Ok(())
    }

    async fn get_purchase_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<PurchaseHistory>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .purchase_history
            .filter(|row| row.user_id == user_id))
    }

    async fn create_purchase_history(
        &self,
        history: NewPurchaseHistory,
    ) -> Result<PurchaseHistory, RepositoryError> {
        self.tables
            .write()
            .await
            .purchase_history
            .insert_with(|id| history.into_purchase(id))
    }

    async fn create_notification_signup(
        &self,
        signup: NewNotificationSignup,
    ) -> Result<NotificationSignup, RepositoryError> {
        self.tables
            .write()
            .await
            .notification_signups
            .insert_with(|id| signup.into_signup(id))
    }
}
