//! Orders placed from a cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::types::{OrderId, OrderStatus, Price, UserId};

/// A checked-out cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot `cart` into a pending order, or `None` if it is empty.
    #[must_use]
    pub fn from_cart(user_id: UserId, cart: &Cart, created_at: DateTime<Utc>) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        Some(Self {
            id: OrderId::generate(),
            user_id,
            items: cart.lines().to_vec(),
            total: cart.total_price(),
            status: OrderStatus::Pending,
            created_at,
        })
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(CartLine::quantity).sum()
    }
}
