//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! atelier-cli admin create -u ops -p secret -r super_admin
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for the storefront

use atelier_core::AdminRole;
use atelier_core::models::NewAdminUser;
use atelier_storefront::db::{self, AdminUserRepository, RepositoryError};
use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: super_admin, admin, viewer")]
    InvalidRole(String),

    /// Empty username or password.
    #[error("Username and password must not be empty")]
    EmptyCredentials,

    /// User already exists.
    #[error("Admin user already exists with username: {0}")]
    UserExists(String),

    /// Repository error other than a duplicate.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Create a new admin user.
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `AdminError` on an unknown role, empty credentials, a taken
/// username or a database failure.
pub async fn create_user(username: &str, password: &str, role: &str) -> Result<i32, AdminError> {
    let role = parse_role(role)?;

    if username.trim().is_empty() || password.is_empty() {
        return Err(AdminError::EmptyCredentials);
    }

    let database_url = super::database_url()
        .map_err(|_| AdminError::MissingEnvVar("STOREFRONT_DATABASE_URL"))?;

    tracing::info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating admin user: {} ({})", username, role);

    let admin = AdminUserRepository::new(&pool)
        .create(&NewAdminUser {
            username: username.to_owned(),
            password: password.to_owned(),
            role: Some(role),
        })
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::UserExists(username.to_owned()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Username: {}, Role: {}",
        admin.id,
        admin.username,
        admin.role
    );

    Ok(admin.id.as_i32())
}

fn parse_role(role: &str) -> Result<AdminRole, AdminError> {
    role.parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert!(matches!(parse_role("super_admin"), Ok(AdminRole::SuperAdmin)));
        assert!(matches!(parse_role("viewer"), Ok(AdminRole::Viewer)));
        assert!(matches!(parse_role("owner"), Err(AdminError::InvalidRole(r)) if r == "owner"));
    }
}
