//! Back-in-stock notification signups.

use serde::{Deserialize, Serialize};

use crate::{NotificationSignupId, ProductId};

/// Interest in a product size. No deduplication, no delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSignup {
    pub id: NotificationSignupId,
    pub product_id: ProductId,
    pub size: String,
    pub email: String,
}

/// Insert shape for [`NotificationSignup`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationSignup {
    pub product_id: ProductId,
    pub size: String,
    pub email: String,
}

impl NewNotificationSignup {
    /// Attach a storage-assigned id.
    #[must_use]
    pub fn into_signup(self, id: NotificationSignupId) -> NotificationSignup {
        NotificationSignup {
            id,
            product_id: self.product_id,
            size: self.size,
            email: self.email,
        }
    }
}
