//! Size recommendation repository.

use sqlx::PgPool;

use atelier_core::models::{NewSizeRecommendation, SizeRecommendation};
use atelier_core::{ProductId, SizeRecommendationId};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct SizeRecommendationRow {
    id: SizeRecommendationId,
    product_id: ProductId,
    user_id: String,
    recommended_size: String,
    actual_size: Option<String>,
    accepted: Option<bool>,
    reason: Option<String>,
}

impl From<SizeRecommendationRow> for SizeRecommendation {
    fn from(row: SizeRecommendationRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            user_id: row.user_id,
            recommended_size: row.recommended_size,
            actual_size: row.actual_size,
            accepted: row.accepted,
            reason: row.reason,
        }
    }
}

/// Repository for stored size recommendations.
pub struct SizeRecommendationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SizeRecommendationRepository<'a> {
    /// Create a new size recommendation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the recommendation for a product and user.
    ///
    /// Several rows may match; the lowest ID wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        product_id: ProductId,
        user_id: &str,
    ) -> Result<Option<SizeRecommendation>, RepositoryError> {
        let row = sqlx::query_as::<_, SizeRecommendationRow>(
            r"
            SELECT id, product_id, user_id, recommended_size, actual_size, accepted, reason
            FROM storefront.size_recommendations
            WHERE product_id = $1 AND user_id = $2
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(SizeRecommendation::from))
    }

    /// Insert a recommendation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        recommendation: &NewSizeRecommendation,
    ) -> Result<SizeRecommendation, RepositoryError> {
        let row = sqlx::query_as::<_, SizeRecommendationRow>(
            r"
            INSERT INTO storefront.size_recommendations
                (product_id, user_id, recommended_size, actual_size, accepted, reason)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_id, user_id, recommended_size, actual_size, accepted, reason
            ",
        )
        .bind(recommendation.product_id)
        .bind(&recommendation.user_id)
        .bind(&recommendation.recommended_size)
        .bind(&recommendation.actual_size)
        .bind(recommendation.accepted)
        .bind(&recommendation.reason)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Record a shopper's response. Unknown IDs update nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn record_response(
        &self,
        id: SizeRecommendationId,
        accepted: bool,
        actual_size: Option<&str>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE storefront.size_recommendations
            SET accepted = $2, actual_size = $3
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(accepted)
        .bind(actual_size)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
