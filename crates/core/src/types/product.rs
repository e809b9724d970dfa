//! Catalog product and storefront user records.

use serde::{Deserialize, Serialize};

use super::{Email, Price, ProductId, RoastLevel, UserId};

/// A coffee sold by the storefront.
///
/// Products are immutable once the catalog is loaded; carts and orders hold
/// snapshots (clones) of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Free-text origin label, e.g. "Éthiopie".
    pub origin: String,
    pub roast_level: RoastLevel,
    /// Tasting notes in display order.
    pub tasting_notes: Vec<String>,
    pub stock: u32,
    pub featured: bool,
}

impl Product {
    /// Whether at least one unit can be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A signed-up customer, as supplied by the auth adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    /// Display name given at sign-up.
    pub name: String,
}

impl User {
    /// Name shown in the header: the display name, or the email when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.email.as_str()
        } else {
            &self.name
        }
    }
}
