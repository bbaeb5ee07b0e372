//! Atelier Core - Entity schema and shared types.
//!
//! This crate provides the types used across all Atelier components:
//! - `storefront` - JSON API server (products, cart, recommendations, admin)
//! - `cli` - Command-line tools for migrations, seeding and admin accounts
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and roles
//! - [`models`] - Stored records and their insert shapes
//! - [`insights`] - Fabric rules table behind the product page widgets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod insights;
pub mod models;
pub mod types;

pub use types::*;
