//! Product repository.
//!
//! `sizes`, `images`, `thumbnails` and `inventory` live in `JSONB` columns.

use std::collections::BTreeMap;

use sqlx::PgPool;
use sqlx::types::Json;

use atelier_core::ProductId;
use atelier_core::models::{NewProduct, Product};

use super::RepositoryError;

const PRODUCT_COLUMNS: &str = r"
    id, name, description, price, original_price, discount_percentage,
    category, collection, fabric, color, print, fit, features, length,
    sizes, images, thumbnails, in_stock, inventory, care_instructions,
    material_composition, sustainability, model_info, cost_per_wear
";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    price: i32,
    original_price: Option<i32>,
    discount_percentage: Option<i32>,
    category: String,
    collection: Option<String>,
    fabric: Option<String>,
    color: Option<String>,
    print: Option<String>,
    fit: Option<String>,
    features: Option<String>,
    length: Option<String>,
    sizes: Json<Vec<String>>,
    images: Json<Vec<String>>,
    thumbnails: Json<Vec<String>>,
    in_stock: bool,
    inventory: Json<BTreeMap<String, i32>>,
    care_instructions: Option<String>,
    material_composition: Option<String>,
    sustainability: Option<String>,
    model_info: Option<String>,
    cost_per_wear: Option<i32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            original_price: row.original_price,
            discount_percentage: row.discount_percentage,
            category: row.category,
            collection: row.collection,
            fabric: row.fabric,
            color: row.color,
            print: row.print,
            fit: row.fit,
            features: row.features,
            length: row.length,
            sizes: row.sizes.0,
            images: row.images.0,
            thumbnails: row.thumbnails.0,
            in_stock: row.in_stock,
            inventory: row.inventory.0,
            care_instructions: row.care_instructions,
            material_composition: row.material_composition,
            sustainability: row.sustainability,
            model_info: row.model_info,
            cost_per_wear: row.cost_per_wear,
        }
    }
}

/// Repository for the product catalog.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM storefront.products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// List every product, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM storefront.products ORDER BY id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// List products in a category (case-sensitive), ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM storefront.products WHERE category = $1 ORDER BY id"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Insert a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            r"
            INSERT INTO storefront.products (
                name, description, price, original_price, discount_percentage,
                category, collection, fabric, color, print, fit, features, length,
                sizes, images, thumbnails, in_stock, inventory, care_instructions,
                material_composition, sustainability, model_info, cost_per_wear
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
            RETURNING {PRODUCT_COLUMNS}
            "
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.original_price)
            .bind(product.discount_percentage)
            .bind(product.category)
            .bind(product.collection)
            .bind(product.fabric)
            .bind(product.color)
            .bind(product.print)
            .bind(product.fit)
            .bind(product.features)
            .bind(product.length)
            .bind(Json(product.sizes))
            .bind(Json(product.images))
            .bind(Json(product.thumbnails))
            .bind(product.in_stock.unwrap_or(true))
            .bind(Json(product.inventory))
            .bind(product.care_instructions)
            .bind(product.material_composition)
            .bind(product.sustainability)
            .bind(product.model_info)
            .bind(product.cost_per_wear)
            .fetch_one(self.pool)
            .await?;

        Ok(row.into())
    }
}
