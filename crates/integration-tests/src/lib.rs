//! Integration tests for the Atelier storefront API.
//!
//! Each test spawns the full router, middleware included, on an ephemeral
//! port over in-memory storage and talks to it with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```

use std::sync::Arc;

use reqwest::Client;
use secrecy::SecretString;
use tokio::task::JoinHandle;

use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::db::MemoryStorage;
use atelier_storefront::seed::seed_sample_data;
use atelier_storefront::state::AppState;

/// Password of the seeded `admin` account.
pub const ADMIN_PASSWORD: &str = "admin123";

/// A storefront served on a local ephemeral port.
pub struct TestServer {
    pub client: Client,
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server over the sample catalog.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails or the listener cannot bind.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            default_admin_password: SecretString::from(ADMIN_PASSWORD),
            ..StorefrontConfig::default()
        };
        let storage = MemoryStorage::new();
        seed_sample_data(&storage, &config.default_admin_password)
            .await
            .expect("Failed to seed sample data");

        Self::serve(config, storage).await
    }

    /// Spawn a server over empty storage.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind.
    pub async fn spawn_empty() -> Self {
        Self::serve(StorefrontConfig::default(), MemoryStorage::new()).await
    }

    async fn serve(config: StorefrontConfig, storage: MemoryStorage) -> Self {
        let state = AppState::new(config, Arc::new(storage));
        let app = atelier_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Log in as the seeded admin and return the bearer token.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails.
    pub async fn admin_token(&self) -> String {
        let body: serde_json::Value = self
            .client
            .post(self.url("/api/admin/login"))
            .json(&serde_json::json!({"username": "admin", "password": ADMIN_PASSWORD}))
            .send()
            .await
            .expect("Failed to log in")
            .json()
            .await
            .expect("Failed to read login response");

        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
