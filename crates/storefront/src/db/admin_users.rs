//! Admin user repository.
//!
//! Roles are stored as text and parsed on read; an unknown role in the
//! table is reported as data corruption rather than silently defaulted.

use sqlx::PgPool;

use atelier_core::models::{AdminUser, NewAdminUser};
use atelier_core::{AdminRole, AdminUserId};

use super::{RepositoryError, conflict_on_unique};

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    username: String,
    password: String,
    role: String,
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<AdminRole>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid admin role in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            username: row.username,
            password: row.password,
            role,
        })
    }
}

/// Repository for admin dashboard accounts.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an admin by username (exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is unknown.
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            "SELECT id, username, password, role FROM storefront.admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        row.map(AdminUser::try_from).transpose()
    }

    /// Create a new admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, admin: &NewAdminUser) -> Result<AdminUser, RepositoryError> {
        let role = admin.role.unwrap_or_default();

        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            INSERT INTO storefront.admin_users (username, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, role
            ",
        )
        .bind(&admin.username)
        .bind(&admin.password)
        .bind(role.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "admin username"))?;

        row.try_into()
    }
}
