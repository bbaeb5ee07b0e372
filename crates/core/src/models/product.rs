//! Catalog products.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A catalog product.
///
/// `price`, `original_price` and `cost_per_wear` are integer minor units.
/// `inventory` maps a size label to units on hand; it is display metadata
/// and is never decremented by cart operations. Its keys are expected to be
/// a subset of `sizes` but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub original_price: Option<i32>,
    pub discount_percentage: Option<i32>,
    pub category: String,
    pub collection: Option<String>,
    pub fabric: Option<String>,
    pub color: Option<String>,
    pub print: Option<String>,
    pub fit: Option<String>,
    pub features: Option<String>,
    pub length: Option<String>,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub thumbnails: Vec<String>,
    pub in_stock: bool,
    pub inventory: BTreeMap<String, i32>,
    pub care_instructions: Option<String>,
    pub material_composition: Option<String>,
    pub sustainability: Option<String>,
    pub model_info: Option<String>,
    pub cost_per_wear: Option<i32>,
}

impl Product {
    /// The list price as a decimal amount.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(i64::from(self.price))
    }
}

/// Insert shape for [`Product`].
///
/// Optional attributes left out of the input are stored as `None`;
/// `in_stock` defaults to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i32,
    #[serde(default)]
    pub original_price: Option<i32>,
    #[serde(default)]
    pub discount_percentage: Option<i32>,
    pub category: String,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub print: Option<String>,
    #[serde(default)]
    pub fit: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub thumbnails: Vec<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    pub inventory: BTreeMap<String, i32>,
    #[serde(default)]
    pub care_instructions: Option<String>,
    #[serde(default)]
    pub material_composition: Option<String>,
    #[serde(default)]
    pub sustainability: Option<String>,
    #[serde(default)]
    pub model_info: Option<String>,
    #[serde(default)]
    pub cost_per_wear: Option<i32>,
}

impl NewProduct {
    /// Attach a storage-assigned id, filling defaults.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            discount_percentage: self.discount_percentage,
            category: self.category,
            collection: self.collection,
            fabric: self.fabric,
            color: self.color,
            print: self.print,
            fit: self.fit,
            features: self.features,
            length: self.length,
            sizes: self.sizes,
            images: self.images,
            thumbnails: self.thumbnails,
            in_stock: self.in_stock.unwrap_or(true),
            inventory: self.inventory,
            care_instructions: self.care_instructions,
            material_composition: self.material_composition,
            sustainability: self.sustainability,
            model_info: self.model_info,
            cost_per_wear: self.cost_per_wear,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_input_fills_defaults() {
        let input: NewProduct = serde_json::from_value(serde_json::json!({
            "name": "Linen Shirt",
            "description": "Breezy.",
            "price": 1990,
            "category": "Shirt",
            "sizes": ["S", "M"],
            "images": [],
            "thumbnails": [],
            "inventory": {"S": 2}
        }))
        .unwrap();

        let product = input.into_product(ProductId::new(3));
        assert_eq!(product.id, ProductId::new(3));
        assert!(product.in_stock);
        assert_eq!(product.fabric, None);
        assert_eq!(product.cost_per_wear, None);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["originalPrice"], serde_json::Value::Null);
        assert_eq!(json["inStock"], serde_json::Value::Bool(true));
        assert_eq!(json["inventory"]["S"], 2);
    }

    #[test]
    fn test_price_in_dollars() {
        let input: NewProduct = serde_json::from_value(serde_json::json!({
            "name": "Pants",
            "description": "",
            "price": 2590,
            "category": "Bottoms",
            "sizes": [],
            "images": [],
            "thumbnails": [],
            "inventory": {}
        }))
        .unwrap();
        assert_eq!(input.into_product(ProductId::new(1)).price().display(), "$25.90");
    }
}
