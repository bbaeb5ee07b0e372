//! Business logic services for storefront.
//!
//! # Services
//!
//! - `admin_sessions` - Bearer tokens for the admin dashboard
//! - `auth` - Admin credential checks

pub mod admin_sessions;
pub mod auth;

pub use admin_sessions::{AdminSession, AdminSessions, IssuedToken};
pub use auth::{AdminAuthService, AuthError};
