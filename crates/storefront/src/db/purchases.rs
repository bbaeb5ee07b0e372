//! Purchase history repository.

use sqlx::PgPool;

use atelier_core::models::{NewPurchaseHistory, PurchaseHistory};
use atelier_core::{ProductId, PurchaseHistoryId};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct PurchaseHistoryRow {
    id: PurchaseHistoryId,
    user_id: String,
    product_id: ProductId,
    size: String,
    returned: bool,
    exchanged: bool,
    return_reason: Option<String>,
}

impl From<PurchaseHistoryRow> for PurchaseHistory {
    fn from(row: PurchaseHistoryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            size: row.size,
            returned: row.returned,
            exchanged: row.exchanged,
            return_reason: row.return_reason,
        }
    }
}

/// Repository for purchase history rows.
pub struct PurchaseHistoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PurchaseHistoryRepository<'a> {
    /// Create a new purchase history repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Purchases for a user, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<PurchaseHistory>, RepositoryError> {
        let rows = sqlx::query_as::<_, PurchaseHistoryRow>(
            r"
            SELECT id, user_id, product_id, size, returned, exchanged, return_reason
            FROM storefront.purchase_history
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PurchaseHistory::from).collect())
    }

    /// Insert a purchase row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        history: &NewPurchaseHistory,
    ) -> Result<PurchaseHistory, RepositoryError> {
        let row = sqlx::query_as::<_, PurchaseHistoryRow>(
            r"
            INSERT INTO storefront.purchase_history
                (user_id, product_id, size, returned, exchanged, return_reason)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, product_id, size, returned, exchanged, return_reason
            ",
        )
        .bind(&history.user_id)
        .bind(history.product_id)
        .bind(&history.size)
        .bind(history.returned.unwrap_or(false))
        .bind(history.exchanged.unwrap_or(false))
        .bind(&history.return_reason)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
