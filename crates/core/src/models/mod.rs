//! Entity schema for the storefront.
//!
//! Each entity has a stored record type (carrying its id) and an insert
//! shape (`New*`) without the id. Storage backends assign ids; nothing else
//! constructs stored records directly.
//!
//! All types serialize with camelCase field names, matching the JSON
//! contract consumed by the storefront pages.

pub mod admin;
pub mod analytics;
pub mod cart;
pub mod notification;
pub mod product;
pub mod purchase;
pub mod recommendation;
pub mod user;

pub use admin::{AdminUser, NewAdminUser};
pub use analytics::{AnalyticsSnapshot, SizingData};
pub use cart::{CartItem, NewCartItem};
pub use notification::{NewNotificationSignup, NotificationSignup};
pub use product::{NewProduct, Product};
pub use purchase::{NewPurchaseHistory, PurchaseHistory};
pub use recommendation::{NewSizeRecommendation, SizeRecommendation};
pub use user::{NewUser, User};
