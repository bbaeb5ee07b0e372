//! Stored size recommendations and the shopper's response to them.

use serde::{Deserialize, Serialize};

use crate::{ProductId, SizeRecommendationId};

/// A size recommendation for one shopper and product.
///
/// `accepted` and `actual_size` stay `None` until the shopper responds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendation {
    pub id: SizeRecommendationId,
    pub product_id: ProductId,
    pub user_id: String,
    pub recommended_size: String,
    pub actual_size: Option<String>,
    pub accepted: Option<bool>,
    pub reason: Option<String>,
}

impl SizeRecommendation {
    /// Record the shopper's response.
    pub fn record_response(&mut self, accepted: bool, actual_size: Option<String>) {
        self.accepted = Some(accepted);
        self.actual_size = actual_size;
    }
}

/// Insert shape for [`SizeRecommendation`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSizeRecommendation {
    pub product_id: ProductId,
    pub user_id: String,
    pub recommended_size: String,
    #[serde(default)]
    pub actual_size: Option<String>,
    #[serde(default)]
    pub accepted: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl NewSizeRecommendation {
    #[must_use]
    pub fn into_recommendation(self, id: SizeRecommendationId) -> SizeRecommendation {
        SizeRecommendation {
            id,
            product_id: self.product_id,
            user_id: self.user_id,
            recommended_size: self.recommended_size,
            actual_size: self.actual_size,
            accepted: self.accepted,
            reason: self.reason,
        }
    }
}
