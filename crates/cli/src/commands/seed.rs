//! Seed the storefront database with sample data.
//!
//! Inserts the bundled eight-product catalog, the default `admin` account,
//! one size recommendation and one purchase-history row. Does nothing when
//! the database already holds products.

use secrecy::SecretString;
use tracing::info;

use atelier_storefront::db::{self, PgStorage};
use atelier_storefront::seed::seed_sample_data;

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Seed sample data into the configured database.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or any insert fails.
pub async fn sample_data() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;
    let admin_password = std::env::var("STOREFRONT_DEFAULT_ADMIN_PASSWORD")
        .map_or_else(|_| SecretString::from(DEFAULT_ADMIN_PASSWORD), SecretString::from);

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let storage = PgStorage::new(pool);
    let report = seed_sample_data(&storage, &admin_password).await?;

    if report.is_noop() {
        info!("Database already seeded, nothing to do");
        return Ok(());
    }

    info!("Seeding complete!");
    info!("  Products inserted: {}", report.products);
    info!("  Admin created: {}", report.admin_created);
    Ok(())
}
