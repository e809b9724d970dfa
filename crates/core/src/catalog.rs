//! The product catalog.
//!
//! A catalog is a fixed, ordered sequence of [`Product`]s. Order matters: it is
//! the display order of every listing and filtering never re-sorts it.

use std::collections::{BTreeSet, HashSet};

use crate::filter::ProductFilter;
use crate::types::{Price, Product, ProductId, RoastLevel};

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON for a list of products.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// An immutable, ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the document is malformed or ids repeat.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Featured products, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Distinct origin labels, sorted.
    #[must_use]
    pub fn origins(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.origin.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Products matching `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }

    /// The six coffees sold by the shop.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            products: vec![
                sample_product(
                    "1",
                    "Éthiopie Sidamo",
                    "Un café aux arômes floraux et fruités, avec des notes de bergamote et de jasmin.",
                    2490,
                    IMAGE_BEANS,
                    "Éthiopie",
                    RoastLevel::Light,
                    &["Floral", "Bergamote", "Jasmin", "Fruité"],
                    15,
                    true,
                ),
                sample_product(
                    "2",
                    "Guatemala Antigua",
                    "Café corsé aux notes chocolatées et épicées, cultivé sur les pentes volcaniques.",
                    2650,
                    IMAGE_CUP,
                    "Guatemala",
                    RoastLevel::Medium,
                    &["Chocolat", "Épices", "Noisette", "Caramel"],
                    12,
                    true,
                ),
                sample_product(
                    "3",
                    "Colombie Huila",
                    "Café équilibré aux notes de fruits rouges et de caramel, récolté à haute altitude.",
                    2380,
                    IMAGE_CUP,
                    "Colombie",
                    RoastLevel::Medium,
                    &["Fruits rouges", "Caramel", "Vanille", "Équilibré"],
                    18,
                    true,
                ),
                sample_product(
                    "4",
                    "Brésil Santos",
                    "Café doux et rond aux notes de noisette et de chocolat au lait.",
                    2190,
                    IMAGE_CUP,
                    "Brésil",
                    RoastLevel::Medium,
                    &["Noisette", "Chocolat au lait", "Doux", "Rond"],
                    25,
                    false,
                ),
                sample_product(
                    "5",
                    "Kenya AA",
                    "Café intense aux notes de cassis et d'agrumes, avec une acidité vive.",
                    2890,
                    IMAGE_BEANS,
                    "Kenya",
                    RoastLevel::Light,
                    &["Cassis", "Agrumes", "Intense", "Acidité vive"],
                    8,
                    false,
                ),
                sample_product(
                    "6",
                    "Costa Rica Tarrazú",
                    "Café équilibré aux notes de miel et de fruits tropicaux.",
                    2550,
                    IMAGE_CUP,
                    "Costa Rica",
                    RoastLevel::Medium,
                    &["Miel", "Fruits tropicaux", "Équilibré", "Sucré"],
                    14,
                    false,
                ),
            ],
        }
    }
}

const IMAGE_BEANS: &str =
    "https://images.pexels.com/photos/894695/pexels-photo-894695.jpeg?auto=compress&cs=tinysrgb&w=500";
const IMAGE_CUP: &str =
    "https://images.pexels.com/photos/1695052/pexels-photo-1695052.jpeg?auto=compress&cs=tinysrgb&w=500";

#[allow(clippy::too_many_arguments)]
fn sample_product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: u32,
    image: &str,
    origin: &str,
    roast_level: RoastLevel,
    tasting_notes: &[&str],
    stock: u32,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(price_cents),
        image: image.to_owned(),
        origin: origin.to_owned(),
        roast_level,
        tasting_notes: tasting_notes.iter().map(|&n| n.to_owned()).collect(),
        stock,
        featured,
    }
}
