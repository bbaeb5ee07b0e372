//! Cart rows keyed by an opaque session marker.

use serde::{Deserialize, Serialize};

use crate::{CartItemId, ProductId};

/// Quantity used when an insert does not specify one.
pub const DEFAULT_QUANTITY: i32 = 1;

/// A single cart line.
///
/// `product_id` is not checked against the catalog and the requested size is
/// not checked against inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub size: String,
    pub quantity: i32,
    pub session_id: String,
}

/// Insert shape for [`CartItem`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub size: String,
    #[serde(default)]
    pub quantity: Option<i32>,
    pub session_id: String,
}

impl NewCartItem {
    /// Quantity to store, falling back to [`DEFAULT_QUANTITY`].
    #[must_use]
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.unwrap_or(DEFAULT_QUANTITY)
    }

    /// Attach a storage-assigned id, filling the default quantity.
    #[must_use]
    pub fn into_cart_item(self, id: CartItemId) -> CartItem {
        let quantity = self.quantity_or_default();
        CartItem {
            id,
            product_id: self.product_id,
            size: self.size,
            quantity,
            session_id: self.session_id,
        }
    }
}
