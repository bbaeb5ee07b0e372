//! Back-in-stock notification signups.

use sqlx::PgPool;

use atelier_core::models::{NewNotificationSignup, NotificationSignup};
use atelier_core::{NotificationSignupId, ProductId};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct NotificationSignupRow {
    id: NotificationSignupId,
    product_id: ProductId,
    size: String,
    email: String,
}

/// Repository for notification signups. Signups are append-only.
pub struct NotificationSignupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationSignupRepository<'a> {
    /// Create a new notification signup repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a signup. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        signup: &NewNotificationSignup,
    ) -> Result<NotificationSignup, RepositoryError> {
        let row = sqlx::query_as::<_, NotificationSignupRow>(
            r"
            INSERT INTO storefront.notification_signups (product_id, size, email)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, size, email
            ",
        )
        .bind(signup.product_id)
        .bind(&signup.size)
        .bind(&signup.email)
        .fetch_one(self.pool)
        .await?;

        Ok(NotificationSignup {
            id: row.id,
            product_id: row.product_id,
            size: row.size,
            email: row.email,
        })
    }
}
