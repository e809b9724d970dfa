//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero, featured coffees)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Catalog with filters (?q=&origin=&roast=&price=)
//! GET  /product/{id}           - Product detail (404 page for unknown ids)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Update quantity
//! POST /cart/remove            - Remove line
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/checkout          - Place an order (requires auth)
//!
//! # Auth
//! GET  /auth                   - Sign-in / sign-up page (?mode=signin|signup)
//! POST /auth/sign-in           - Sign-in action
//! POST /auth/sign-up           - Sign-up action
//! POST /auth/sign-out          - Sign-out action
//!
//! # Orders (requires auth)
//! GET  /orders                 - Order history
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use payetonkawa_core::{Cart, User};

use crate::state::AppState;

/// Header data shared by every full page.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    /// Units in the visitor's cart, shown in the badge.
    pub cart_count: u32,
    /// Display name of the signed-in user.
    pub user_name: Option<String>,
}

impl Layout {
    /// Build the header from the current user and cart.
    #[must_use]
    pub fn new(user: Option<&User>, cart: &Cart) -> Self {
        Self {
            cart_count: cart.total_items(),
            user_name: user.map(|u| u.display_name().to_owned()),
        }
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::page))
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-up", post(auth::sign_up))
        .route("/sign-out", post(auth::sign_out))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/product/{id}", get(products::show))
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
        .route("/orders", get(orders::index))
}
