//! Admin bearer tokens.
//!
//! A successful login issues an opaque random token (32 bytes, URL-safe
//! base64). Tokens live in a `moka` cache whose time-to-live is the token
//! lifetime, so expiry needs no sweeper.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use moka::future::Cache;
use rand::RngCore;

use atelier_core::AdminUserId;
use atelier_core::models::AdminUser;

const TOKEN_BYTES: usize = 32;
const MAX_SESSIONS: u64 = 10_000;

/// The admin a token was issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub admin_id: AdminUserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Server-side store of live admin tokens.
#[derive(Clone)]
pub struct AdminSessions {
    cache: Cache<String, AdminSession>,
    ttl: Duration,
}

impl AdminSessions {
    /// Create a store whose tokens expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_SESSIONS)
            .time_to_live(ttl)
            .build();

        Self { cache, ttl }
    }

    /// Issue a new token for an admin.
    pub async fn issue(&self, admin: &AdminUser) -> IssuedToken {
        let token = generate_token();
        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.ttl).unwrap_or_else(|_| chrono::Duration::hours(8));

        self.cache
            .insert(
                token.clone(),
                AdminSession {
                    admin_id: admin.id,
                    username: admin.username.clone(),
                    expires_at,
                },
            )
            .await;

        tracing::info!(admin = %admin.username, "Admin token issued");
        IssuedToken { token, expires_at }
    }

    /// Look up a live token.
    pub async fn validate(&self, token: &str) -> Option<AdminSession> {
        self.cache
            .get(token)
            .await
            .filter(|session| session.expires_at > Utc::now())
    }

    /// Revoke a token. Returns `false` if it was not live.
    pub async fn revoke(&self, token: &str) -> bool {
        self.cache.remove(token).await.is_some()
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atelier_core::AdminRole;

    use super::*;

    fn admin() -> AdminUser {
        AdminUser {
            id: AdminUserId::new(1),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: AdminRole::Admin,
        }
    }

    #[test]
    fn test_tokens_are_url_safe_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(
            a.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[tokio::test]
    async fn test_issue_then_validate() {
        let sessions = AdminSessions::new(Duration::from_secs(60));
        let issued = sessions.issue(&admin()).await;

        let session = sessions.validate(&issued.token).await.unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.expires_at, issued.expires_at);
        assert!(sessions.validate("not-a-token").await.is_none());
    }

    #[tokio::test]
    async fn test_revoke() {
        let sessions = AdminSessions::new(Duration::from_secs(60));
        let issued = sessions.issue(&admin()).await;

        assert!(sessions.revoke(&issued.token).await);
        assert!(sessions.validate(&issued.token).await.is_none());
        assert!(!sessions.revoke(&issued.token).await);
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let sessions = AdminSessions::new(Duration::from_millis(50));
        let issued = sessions.issue(&admin()).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(sessions.validate(&issued.token).await.is_none());
    }
}
