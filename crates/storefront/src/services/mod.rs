//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - The auth adapter boundary and its in-memory implementation
//! - `orders` - In-memory order book filled at checkout

pub mod auth;
pub mod orders;
