//! Application state shared across handlers.

use std::sync::Arc;

use atelier_core::insights::FabricRules;

use crate::config::StorefrontConfig;
use crate::db::Storage;
use crate::services::AdminSessions;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the storage backend and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: Arc<dyn Storage>,
    admin_sessions: AdminSessions,
    fabric_rules: FabricRules,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `storage` - Storage backend chosen at startup
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let admin_sessions = AdminSessions::new(config.admin_token_ttl);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                admin_sessions,
                fabric_rules: FabricRules::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.inner.storage.as_ref()
    }

    /// Get a reference to the live admin tokens.
    #[must_use]
    pub fn admin_sessions(&self) -> &AdminSessions {
        &self.inner.admin_sessions
    }

    /// Get a reference to the fabric rules used for product insights.
    #[must_use]
    pub fn fabric_rules(&self) -> &FabricRules {
        &self.inner.fabric_rules
    }
}
