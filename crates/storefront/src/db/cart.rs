//! Cart repository.

use sqlx::PgPool;

use atelier_core::{CartItemId, ProductId};
use atelier_core::models::{CartItem, NewCartItem};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: CartItemId,
    product_id: ProductId,
    size: String,
    quantity: i32,
    session_id: String,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            size: row.size,
            quantity: row.quantity,
            session_id: row.session_id,
        }
    }
}

/// Repository for cart lines.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Cart lines for a session, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_session(&self, session_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r"
            SELECT id, product_id, size, quantity, session_id
            FROM storefront.cart_items
            WHERE session_id = $1
            ORDER BY id
            ",
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartItem::from).collect())
    }

    /// Insert a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            r"
            INSERT INTO storefront.cart_items (product_id, size, quantity, session_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, size, quantity, session_id
            ",
        )
        .bind(item.product_id)
        .bind(&item.size)
        .bind(item.quantity_or_default())
        .bind(&item.session_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Set a line's quantity. Returns `None` if no line has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_quantity(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            r"
            UPDATE storefront.cart_items
            SET quantity = $2
            WHERE id = $1
            RETURNING id, product_id, size, quantity, session_id
            ",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(CartItem::from))
    }

    /// Delete a line. Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM storefront.cart_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
