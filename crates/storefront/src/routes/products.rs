//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use payetonkawa_core::{PriceBracket, Product, ProductFilter, RoastLevel};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::{OptionalAuth, SessionCart};
use crate::routes::Layout;
use crate::state::AppState;

/// Tasting notes shown on a card; the detail page lists them all.
const CARD_NOTES: usize = 3;

/// Product card data for templates.
#[derive(Clone, Debug)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub origin: String,
    /// Roast level slug, used as a CSS modifier.
    pub roast: &'static str,
    pub roast_label: &'static str,
    pub price: String,
    pub image: String,
    pub tasting_notes: Vec<String>,
    pub stock: u32,
    pub featured: bool,
}

impl ProductCardView {
    /// First tasting notes, for compact cards.
    #[must_use]
    pub fn card_notes(&self) -> &[String] {
        self.tasting_notes
            .get(..CARD_NOTES)
            .unwrap_or(&self.tasting_notes)
    }

    /// Whether at least one unit can be added to the cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            origin: product.origin.clone(),
            roast: product.roast_level.as_str(),
            roast_label: product.roast_level.label(),
            price: product.price.to_string(),
            image: product.image.clone(),
            tasting_notes: product.tasting_notes.clone(),
            stock: product.stock,
            featured: product.featured,
        }
    }
}

/// One entry of a filter `<select>`.
#[derive(Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Catalog query parameters. Empty values mean "not selected".
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub origin: Option<String>,
    pub roast: Option<String>,
    pub price: Option<String>,
}

impl ProductQuery {
    /// Build the catalog filter. Unparseable roast or price values are
    /// treated as not selected.
    #[must_use]
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter::new()
            .search(self.q.as_deref().unwrap_or_default())
            .origin(self.origin.as_deref().unwrap_or_default().trim())
            .roast(self.roast_level())
            .price(self.price_bracket())
    }

    fn roast_level(&self) -> Option<RoastLevel> {
        let raw = non_blank(self.roast.as_deref())?;
        raw.parse()
            .inspect_err(|e| tracing::debug!("Ignoring roast filter: {e}"))
            .ok()
    }

    fn price_bracket(&self) -> Option<PriceBracket> {
        let raw = non_blank(self.price.as_deref())?;
        raw.parse()
            .inspect_err(|e| tracing::debug!("Ignoring price filter `{raw}`: {e}"))
            .ok()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: Layout,
    pub products: Vec<ProductCardView>,
    pub search: String,
    pub origins: Vec<SelectOption>,
    pub roasts: Vec<SelectOption>,
    pub prices: Vec<SelectOption>,
    pub has_filters: bool,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: Layout,
    pub product: ProductCardView,
    /// Units already in the cart.
    pub in_cart: u32,
    /// Largest quantity that can still be added.
    pub max_addable: u32,
}

/// Unknown product page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub layout: Layout,
    pub id: String,
}

/// Display product listing page.
#[instrument(skip(state, user, cart))]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    cart: SessionCart,
    Query(query): Query<ProductQuery>,
) -> impl IntoResponse {
    let filter = query.to_filter();
    let catalog = state.catalog();

    let products = catalog
        .filter(&filter)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    let origins = catalog
        .origins()
        .into_iter()
        .map(|origin| SelectOption {
            value: origin.to_owned(),
            label: origin.to_owned(),
            selected: filter.selected_origin() == Some(origin),
        })
        .collect();

    let roasts = RoastLevel::ALL
        .into_iter()
        .map(|roast| SelectOption {
            value: roast.as_str().to_owned(),
            label: roast.label().to_owned(),
            selected: filter.selected_roast() == Some(roast),
        })
        .collect();

    let selected_price = filter.selected_price();
    let prices = PriceBracket::PRESETS
        .into_iter()
        .map(|(value, label)| SelectOption {
            value: value.to_owned(),
            label: label.to_owned(),
            selected: selected_price
                .is_some_and(|selected| value.parse::<PriceBracket>().ok() == Some(selected)),
        })
        .collect();

    ProductsIndexTemplate {
        layout: Layout::new(user.as_ref(), cart.cart()),
        products,
        search: query.q.unwrap_or_default(),
        origins,
        roasts,
        prices,
        has_filters: !filter.is_empty(),
    }
}

/// Display product detail page, or the not-found page with a 404.
#[instrument(skip(state, user, cart))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    cart: SessionCart,
    Path(id): Path<String>,
) -> Response {
    let layout = Layout::new(user.as_ref(), cart.cart());

    let Some(product) = state.catalog().find(&id) else {
        tracing::debug!(product_id = %id, "Unknown product");
        return (StatusCode::NOT_FOUND, ProductNotFoundTemplate { layout, id }).into_response();
    };

    show_template(layout, product, cart.cart().quantity_of(&id)).into_response()
}

fn show_template(layout: Layout, product: &Product, in_cart: u32) -> ProductShowTemplate {
    ProductShowTemplate {
        layout,
        product: ProductCardView::from(product),
        in_cart,
        max_addable: product.stock.saturating_sub(in_cart),
    }
}

/// Featured products for the home page.
pub(crate) fn featured_cards(state: &AppState) -> Vec<ProductCardView> {
    state.catalog().featured().map(ProductCardView::from).collect()
}
