//! Admin dashboard accounts.

use serde::{Deserialize, Serialize};

use crate::{AdminRole, AdminUserId};

/// An admin dashboard account.
///
/// Serializes as `{id, username, role}`; the password never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: AdminUserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: AdminRole,
}

impl AdminUser {
    /// Exact comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Insert shape for [`AdminUser`]. The role defaults to [`AdminRole::Admin`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<AdminRole>,
}

impl NewAdminUser {
    /// Attach a storage-assigned id, filling the default role.
    #[must_use]
    pub fn into_admin(self, id: AdminUserId) -> AdminUser {
        AdminUser {
            id,
            username: self.username,
            password: self.password,
            role: self.role.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        NewAdminUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: None,
        }
        .into_admin(AdminUserId::new(1))
    }

    #[test]
    fn test_role_defaults_to_admin() {
        assert_eq!(admin().role, AdminRole::Admin);
    }

    #[test]
    fn test_password_is_exact_match() {
        let admin = admin();
        assert!(admin.password_matches("admin123"));
        assert!(!admin.password_matches("Admin123"));
        assert!(!admin.password_matches("admin123 "));
    }

    #[test]
    fn test_password_not_serialized() {
        let json = serde_json::to_value(admin()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "admin", "role": "admin"})
        );
    }
}
