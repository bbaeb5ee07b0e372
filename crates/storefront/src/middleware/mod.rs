//! HTTP middleware and extractors for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//!
//! # Extractors
//!
//! - [`RequireAdmin`] - bearer token for `/api/admin/*`
//! - [`CartSession`] - `session-id` header for `/api/cart`

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::RequireAdmin;
pub use request_id::request_id_middleware;
pub use session::CartSession;
