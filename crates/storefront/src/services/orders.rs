//! In-memory order book.
//!
//! Orders are recorded at checkout and listed on `/orders`. Nothing is
//! persisted across restarts.

use std::collections::HashMap;
use std::sync::RwLock;

use payetonkawa_core::{Order, UserId};

/// Orders keyed by the user who placed them.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: RwLock<HashMap<UserId, Vec<Order>>>,
}

impl OrderBook {
    /// Create an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placed order.
    pub fn place(&self, order: Order) {
        let Ok(mut orders) = self.orders.write() else {
            tracing::error!(order_id = %order.id, "order book lock poisoned, order dropped");
            return;
        };

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = %order.total,
            "order placed"
        );
        orders.entry(order.user_id.clone()).or_default().push(order);
    }

    /// Orders of `user_id`, most recent first.
    #[must_use]
    pub fn for_user(&self, user_id: &UserId) -> Vec<Order> {
        let Ok(orders) = self.orders.read() else {
            return Vec::new();
        };

        orders
            .get(user_id)
            .map(|list| list.iter().rev().cloned().collect())
            .unwrap_or_default()
    }
}
