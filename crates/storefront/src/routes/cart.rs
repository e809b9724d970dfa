//! Cart route handlers.
//!
//! The cart lives in the visitor's session and is reached through
//! [`SessionCart`]. Forms post back here and are answered with a redirect,
//! except `POST /cart/add` from HTMX, which returns the refreshed header badge.

use askama::Template;
use askama_web::WebTemplate;
use std::num::IntErrorKind;

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use payetonkawa_core::{Cart, CartLine, Order};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{OptionalAuth, RequireAuth, SessionCart};
use crate::routes::Layout;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone, Debug)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    /// Quantity posted by the "-" button.
    pub decrement: i64,
    /// Quantity posted by the "+" button.
    pub increment: i64,
    pub can_increment: bool,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        let quantity = i64::from(line.quantity());

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            origin: product.origin.clone(),
            image: product.image.clone(),
            quantity: line.quantity(),
            unit_price: product.price.to_string(),
            line_total: line.line_total().to_string(),
            decrement: quantity - 1,
            increment: quantity + 1,
            can_increment: line.can_increment(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone, Debug)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_items: u32,
    pub total_price: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price().to_string(),
        }
    }
}

/// Add to cart form data.
///
/// `quantity` is kept as text and read leniently, so a cleared
/// or out-of-range number input is clamped instead of rejected.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<String>,
    /// Local path to go back to after a plain form post.
    pub return_to: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
    pub signed_in: bool,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip_all)]
pub async fn show(OptionalAuth(user): OptionalAuth, cart: SessionCart) -> impl IntoResponse {
    CartShowTemplate {
        layout: Layout::new(user.as_ref(), cart.cart()),
        cart: CartView::from(cart.cart()),
        signed_in: user.is_some(),
    }
}

/// Add a product to the cart.
///
/// The quantity defaults to 1 and is clamped to the product's stock.
#[instrument(skip(state, headers, cart))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut cart: SessionCart,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .find(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let quantity = parse_quantity(form.quantity.as_deref())
        .map_or(1, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX));
    cart.add_item(product, quantity).await?;
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", form.product_id.as_str())]));

    let count = cart.cart().total_items();
    if is_htmx(&headers) {
        return Ok((
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartCountTemplate { count },
        )
            .into_response());
    }

    let target = form
        .return_to
        .as_deref()
        .filter(|path| is_local_path(path))
        .unwrap_or("/cart");
    Ok(Redirect::to(target).into_response())
}

/// Update a line's quantity; zero or less removes it. A blank or
/// unreadable quantity leaves the cart unchanged.
#[instrument(skip(cart))]
pub async fn update(mut cart: SessionCart, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    match parse_quantity(form.quantity.as_deref()) {
        Some(quantity) => cart.update_quantity(&form.product_id, quantity).await?,
        None => tracing::debug!(product_id = %form.product_id, "Ignoring unreadable quantity"),
    }
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(cart))]
pub async fn remove(
    mut cart: SessionCart,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    cart.remove_item(&form.product_id).await?;
    Ok(Redirect::to("/cart"))
}

/// Get cart count badge (HTMX).
#[instrument(skip_all)]
pub async fn count(cart: SessionCart) -> impl IntoResponse {
    CartCountTemplate {
        count: cart.cart().total_items(),
    }
}

/// Turn the cart into a pending order for the signed-in user.
#[instrument(skip_all)]
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut cart: SessionCart,
) -> Result<Redirect> {
    let Some(order) = Order::from_cart(user.id.clone(), cart.cart(), Utc::now()) else {
        return Ok(Redirect::to("/cart"));
    };

    state.orders().place(order);
    cart.clear().await?;

    Ok(Redirect::to("/orders"))
}

/// Read a posted quantity. Blank or non-numeric input yields `None`; integers
/// too large for `i64` saturate to its bounds.
fn parse_quantity(raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some_and(|v| v == "true")
}

/// Same-origin path: starts with one `/` and is not protocol-relative.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
