//! Sample data for an empty store.
//!
//! The bundled catalog (`catalog.json`) holds eight products. Seeding only
//! runs against a store with no products, so restarting against a populated
//! database changes nothing.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::info;

use atelier_core::models::{
    NewAdminUser, NewProduct, NewPurchaseHistory, NewSizeRecommendation,
};
use atelier_core::{AdminRole, ProductId};

use crate::db::{RepositoryError, Storage};

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Username of the seeded admin account.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Shopper id used for the sample recommendation and purchase.
pub const SAMPLE_USER_ID: &str = "user123";

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The bundled catalog could not be parsed.
    #[error("invalid sample catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products: usize,
    pub admin_created: bool,
    pub samples_created: bool,
}

impl SeedReport {
    /// True when the store already had data and nothing was inserted.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.products == 0 && !self.admin_created && !self.samples_created
    }
}

/// Parse the bundled sample catalog.
///
/// # Errors
///
/// Returns `SeedError::Catalog` if the fixture is malformed.
pub fn sample_catalog() -> Result<Vec<NewProduct>, SeedError> {
    Ok(serde_json::from_str(CATALOG_JSON)?)
}

/// Seed an empty store with the sample catalog, a default admin, one size
/// recommendation and one purchase-history row.
///
/// # Errors
///
/// Returns `SeedError` if the catalog is malformed or a write fails.
pub async fn seed_sample_data(
    storage: &dyn Storage,
    admin_password: &SecretString,
) -> Result<SeedReport, SeedError> {
    if !storage.get_products().await?.is_empty() {
        info!("Store already has products, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    for product in sample_catalog()? {
        storage.create_product(product).await?;
        report.products += 1;
    }

    if storage
        .get_admin_by_username(DEFAULT_ADMIN_USERNAME)
        .await?
        .is_none()
    {
        storage
            .create_admin(NewAdminUser {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password: admin_password.expose_secret().to_string(),
                role: Some(AdminRole::Admin),
            })
            .await?;
        report.admin_created = true;
        info!(username = DEFAULT_ADMIN_USERNAME, "Default admin user created");
    }

    storage
        .create_size_recommendation(NewSizeRecommendation {
            product_id: ProductId::new(1),
            user_id: SAMPLE_USER_ID.to_string(),
            recommended_size: "M".to_string(),
            actual_size: None,
            accepted: None,
            reason: Some("Based on fabric stretchability and past purchases".to_string()),
        })
        .await?;
    storage
        .create_purchase_history(NewPurchaseHistory {
            user_id: SAMPLE_USER_ID.to_string(),
            product_id: ProductId::new(1),
            size: "S".to_string(),
            returned: Some(true),
            exchanged: None,
            return_reason: Some("Size too small".to_string()),
        })
        .await?;
    report.samples_created = true;

    info!(products = report.products, "Sample data initialized");
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    #[test]
    fn test_catalog_parses() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "100% Viscose Relaxed Lace-Tie Pants");
        assert_eq!(catalog[0].sizes, ["26", "28", "30", "32", "34", "36"]);
        assert_eq!(catalog[0].images.len(), 7);
        assert_eq!(catalog[2].original_price, Some(2590));
        assert_eq!(catalog[2].discount_percentage, Some(15));
        assert_eq!(catalog[7].category, "Co-ord Set");
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let storage = MemoryStorage::new();
        let report = seed_sample_data(&storage, &SecretString::from("admin123"))
            .await
            .unwrap();

        assert_eq!(report.products, 8);
        assert!(report.admin_created);
        assert!(report.samples_created);

        let product = storage.get_product(ProductId::new(1)).await.unwrap().unwrap();
        assert_eq!(product.price, 2590);
        assert_eq!(product.inventory.get("30"), Some(&12));

        let admin = storage.get_admin_by_username("admin").await.unwrap().unwrap();
        assert!(admin.password_matches("admin123"));

        let rec = storage
            .get_size_recommendation(ProductId::new(1), SAMPLE_USER_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rec.recommended_size, "M");

        let history = storage.get_purchase_history(SAMPLE_USER_ID).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].returned);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let storage = MemoryStorage::new();
        let password = SecretString::from("admin123");
        seed_sample_data(&storage, &password).await.unwrap();

        let second = seed_sample_data(&storage, &password).await.unwrap();
        assert!(second.is_noop());
        assert_eq!(storage.get_products().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_seed_uses_configured_password() {
        let storage = MemoryStorage::new();
        seed_sample_data(&storage, &SecretString::from("s3cret"))
            .await
            .unwrap();

        let admin = storage.get_admin_by_username("admin").await.unwrap().unwrap();
        assert!(admin.password_matches("s3cret"));
        assert!(!admin.password_matches("admin123"));
    }
}
