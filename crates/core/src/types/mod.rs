//! Core types for the PayeTonKawa storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{NegativePriceError, Price, PriceBracket, PriceBracketError};
pub use product::{Product, User};
pub use status::{OrderStatus, RoastLevel, RoastLevelError};
