//! PayeTonKawa Core - domain library for the coffee storefront.
//!
//! This crate holds everything the storefront knows about coffee and carts,
//! independent of HTTP:
//! - [`types`] - Newtype wrappers for ids, prices, emails, roast levels and products
//! - [`catalog`] - The ordered product catalog and its sample data
//! - [`filter`] - Search, origin, roast and price filtering
//! - [`cart`] - Cart lines, clamped quantity updates and derived totals
//! - [`order`] - Orders snapshotted from a cart at checkout
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. The storefront crate owns persistence of carts in sessions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod order;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogError};
pub use filter::ProductFilter;
pub use order::Order;
pub use types::*;
