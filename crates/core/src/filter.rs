//! Catalog filtering.
//!
//! A [`ProductFilter`] combines four independent criteria; a product is kept
//! only when it satisfies all of them. Filtering is stable: the result is a
//! subsequence of the input in the same order.
//!
//! # Text matching
//!
//! The search term is matched as a substring of the name, the description or
//! any tasting note after lowercasing both sides with Unicode case mapping
//! (`str::to_lowercase`). Accents are significant: `"éthiopie"` finds
//! "Éthiopie Sidamo" but `"ethiopie"` does not.
//!
//! The term is trimmed first, so a whitespace-only term (a search box holding
//! only spaces) clears the criterion and keeps every product.

use crate::types::{PriceBracket, Product, RoastLevel};

/// Criteria for narrowing the catalog. `None` means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search: Option<String>,
    origin: Option<String>,
    roast: Option<RoastLevel>,
    price: Option<PriceBracket>,
}

impl ProductFilter {
    /// A filter that keeps every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to products whose text contains `term`. A blank term clears
    /// the criterion.
    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    /// Restrict to one origin (exact match). An empty label clears the criterion.
    #[must_use]
    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = (!origin.is_empty()).then(|| origin.to_owned());
        self
    }

    /// Restrict to one roast level.
    #[must_use]
    pub fn roast(mut self, roast: Option<RoastLevel>) -> Self {
        self.roast = roast;
        self
    }

    /// Restrict to a price bracket.
    #[must_use]
    pub fn price(mut self, bracket: Option<PriceBracket>) -> Self {
        self.price = bracket;
        self
    }

    /// The lowercased search term, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The selected origin, if any.
    #[must_use]
    pub fn selected_origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The selected roast level, if any.
    #[must_use]
    pub const fn selected_roast(&self) -> Option<RoastLevel> {
        self.roast
    }

    /// The selected price bracket, if any.
    #[must_use]
    pub const fn selected_price(&self) -> Option<PriceBracket> {
        self.price
    }

    /// Whether no criterion is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none() && self.origin.is_none() && self.roast.is_none() && self.price.is_none()
    }

    /// Whether `product` satisfies every selected criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.origin.as_deref().is_none_or(|o| product.origin == o)
            && self.roast.is_none_or(|r| product.roast_level == r)
            && self.price.is_none_or(|b| b.contains(product.price))
    }

    /// Products from `products` that match, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_text(&self, product: &Product) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let contains = |text: &str| text.to_lowercase().contains(term);

        contains(&product.name)
            || contains(&product.description)
            || product.tasting_notes.iter().any(|note| contains(note))
    }
}
