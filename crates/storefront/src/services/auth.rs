//! Admin authentication service.

use thiserror::Error;

use atelier_core::models::AdminUser;

use crate::db::{RepositoryError, Storage};
use crate::services::admin_sessions::{AdminSessions, IssuedToken};

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Checks admin credentials and issues bearer tokens.
pub struct AdminAuthService<'a> {
    storage: &'a dyn Storage,
    sessions: &'a AdminSessions,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, sessions: &'a AdminSessions) -> Self {
        Self { storage, sessions }
    }

    /// Verify a username and password and issue a token.
    ///
    /// Passwords are compared exactly; an unknown username and a wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the credentials don't match.
    /// Returns `AuthError::Repository` if the lookup fails.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(AdminUser, IssuedToken), AuthError> {
        let admin = self
            .storage
            .get_admin_by_username(username)
            .await?
            .filter(|admin| admin.password_matches(password))
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.sessions.issue(&admin).await;
        Ok((admin, token))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use atelier_core::models::NewAdminUser;

    use super::*;
    use crate::db::MemoryStorage;

    async fn setup() -> (MemoryStorage, AdminSessions) {
        let storage = MemoryStorage::new();
        storage
            .create_admin(NewAdminUser {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                role: None,
            })
            .await
            .unwrap();
        (storage, AdminSessions::new(Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_login_issues_live_token() {
        let (storage, sessions) = setup().await;
        let service = AdminAuthService::new(&storage, &sessions);

        let (admin, issued) = service.login("admin", "admin123").await.unwrap();
        assert_eq!(admin.username, "admin");
        assert!(sessions.validate(&issued.token).await.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user() {
        let (storage, sessions) = setup().await;
        let service = AdminAuthService::new(&storage, &sessions);

        assert!(matches!(
            service.login("admin", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("ghost", "admin123").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
