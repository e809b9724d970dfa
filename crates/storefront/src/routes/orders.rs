//! Order history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use payetonkawa_core::Order;
use tracing::instrument;

use crate::filters;
use crate::middleware::{RequireAuth, SessionCart};
use crate::routes::Layout;
use crate::routes::cart::CartLineView;
use crate::state::AppState;

/// Order display data for templates.
#[derive(Clone, Debug)]
pub struct OrderView {
    /// Short reference shown to customers.
    pub reference: String,
    pub placed_on: String,
    pub status: &'static str,
    pub total: String,
    pub total_items: u32,
    pub lines: Vec<CartLineView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let id = order.id.as_str();
        Self {
            reference: id.get(..8).unwrap_or(id).to_uppercase(),
            placed_on: order.created_at.format("%d/%m/%Y à %H:%M").to_string(),
            status: order.status.label(),
            total: order.total.to_string(),
            total_items: order.total_items(),
            lines: order.items.iter().map(CartLineView::from).collect(),
        }
    }
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub layout: Layout,
    pub orders: Vec<OrderView>,
}

/// Display the signed-in user's orders, most recent first.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    cart: SessionCart,
) -> impl IntoResponse {
    let orders = state
        .orders()
        .for_user(&user.id)
        .iter()
        .map(OrderView::from)
        .collect();

    OrdersTemplate {
        layout: Layout::new(Some(&user), cart.cart()),
        orders,
    }
}
