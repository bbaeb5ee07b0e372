//! Purchase history rows. Only written by seeding; analytics does not read them.

use serde::{Deserialize, Serialize};

use crate::{ProductId, PurchaseHistoryId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseHistory {
    pub id: PurchaseHistoryId,
    pub user_id: String,
    pub product_id: ProductId,
    pub size: String,
    pub returned: bool,
    pub exchanged: bool,
    pub return_reason: Option<String>,
}

/// Insert shape for [`PurchaseHistory`]. Flags default to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchaseHistory {
    pub user_id: String,
    pub product_id: ProductId,
    pub size: String,
    #[serde(default)]
    pub returned: Option<bool>,
    #[serde(default)]
    pub exchanged: Option<bool>,
    #[serde(default)]
    pub return_reason: Option<String>,
}

impl NewPurchaseHistory {
    #[must_use]
    pub fn into_purchase(self, id: PurchaseHistoryId) -> PurchaseHistory {
        PurchaseHistory {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            size: self.size,
            returned: self.returned.unwrap_or(false),
            exchanged: self.exchanged.unwrap_or(false),
            return_reason: self.return_reason,
        }
    }
}
