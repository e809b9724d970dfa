//! The shopping cart.
//!
//! Cart mutations never fail. Quantities are clamped into `[0, stock]` using
//! the stock of the product snapshot held by the line, and a line whose
//! quantity reaches zero is removed, so every line always has a quantity in
//! `[1, stock]`.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// Snapshot of the product taken when it was added.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units, always in `[1, product.stock]`.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    /// Whether another unit can be added without exceeding stock.
    #[must_use]
    pub const fn can_increment(&self) -> bool {
        self.quantity < self.product.stock
    }
}

/// An ordered set of cart lines keyed by product id.
///
/// ```
/// use payetonkawa_core::{Cart, Catalog};
///
/// let catalog = Catalog::sample();
/// let ethiopie = catalog.find("1").unwrap();
///
/// let mut cart = Cart::new();
/// cart.add_item(ethiopie, 20);
///
/// assert_eq!(cart.total_items(), 15);
/// assert_eq!(cart.total_price().to_string(), "373.50€");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity held for `product_id`, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.line(product_id).map_or(0, CartLine::quantity)
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line grows by `quantity`, capped at the product's stock.
    /// A new line is created with `min(quantity, stock)` units, or not at all
    /// when that is zero. The stored snapshot is refreshed with `product`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self.line_mut(product.id.as_str()) {
            line.product = product.clone();
            line.quantity = line.quantity.saturating_add(quantity).min(product.stock);
            self.prune();
            return;
        }

        let quantity = quantity.min(product.stock);
        if quantity > 0 {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }
    }

    /// Set the quantity of a line, clamped into `[0, stock]`; zero removes it.
    ///
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let Some(line) = self.line_mut(product_id) else {
            return;
        };
        let clamped = quantity.clamp(0, i64::from(line.product.stock));
        line.quantity = u32::try_from(clamped).unwrap_or(0);
        self.prune();
    }

    /// Delete the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product.id.as_str() != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Product ids in insertion order.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.lines.iter().map(|line| &line.product.id)
    }

    fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.product.id.as_str() == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id.as_str() == product_id)
    }

    fn prune(&mut self) {
        self.lines.retain(|line| line.quantity > 0);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::Catalog;

    fn product(id: &str, cents: u32, stock: u32) -> Product {
        let mut product = Catalog::sample().products()[0].clone();
        product.id = ProductId::new(id);
        product.price = Price::from_cents(cents);
        product.stock = stock;
        product
    }

    #[test]
    fn test_add_to_empty_cart_clamps_to_stock() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 2490, 15), 20);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("1"), 15);
        assert_eq!(cart.total_price().amount(), Decimal::new(37350, 2));
    }

    #[test]
    fn test_add_existing_accumulates_up_to_stock() {
        let p = product("1", 1000, 5);
        let mut cart = Cart::new();
        cart.add_item(&p, 2);
        cart.add_item(&p, 2);
        assert_eq!(cart.quantity_of("1"), 4);
        cart.add_item(&p, 10);
        assert_eq!(cart.quantity_of("1"), 5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_out_of_stock_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 0), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_creates_nothing() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 3), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_refreshes_snapshot_and_reclamps() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 10), 8);
        cart.add_item(&product("1", 1200, 3), 1);

        assert_eq!(cart.quantity_of("1"), 3);
        assert_eq!(cart.lines()[0].product().price, Price::from_cents(1200));
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 5), 1);

        cart.update_quantity("1", 99);
        assert_eq!(cart.quantity_of("1"), 5);

        cart.update_quantity("1", 2);
        assert_eq!(cart.quantity_of("1"), 2);

        cart.update_quantity("1", -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 5), 3);
        cart.update_quantity("1", 0);
        assert_eq!(cart.quantity_of("1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 5), 3);
        cart.update_quantity("2", 4);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 5), 3);
        cart.add_item(&product("2", 500, 5), 1);
        cart.remove_item("1");
        cart.remove_item("missing");

        let ids: Vec<_> = cart.product_ids().map(ProductId::as_str).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();
        for id in ["4", "1", "6"] {
            cart.add_item(catalog.find(id).unwrap(), 1);
        }
        cart.add_item(catalog.find("1").unwrap(), 1);

        let ids: Vec<_> = cart.product_ids().map(ProductId::as_str).collect();
        assert_eq!(ids, ["4", "1", "6"]);
    }

    #[test]
    fn test_totals_track_every_operation() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();

        cart.add_item(catalog.find("2").unwrap(), 3);
        cart.add_item(catalog.find("5").unwrap(), 20);
        cart.update_quantity("2", 1);
        cart.add_item(catalog.find("3").unwrap(), 2);
        cart.remove_item("3");
        cart.add_item(catalog.find("6").unwrap(), 1);

        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.product().price.amount() * Decimal::from(l.quantity()))
            .sum();

        assert_eq!(cart.total_items(), 1 + 8 + 1);
        assert_eq!(cart.total_price().amount(), expected);
        assert_eq!(cart.total_price().to_string(), "283.20€");
        assert!(cart.lines().iter().all(|l| l.quantity() >= 1 && l.quantity() <= l.product().stock));
    }

    #[test]
    fn test_can_increment() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 2), 1);
        assert!(cart.lines()[0].can_increment());
        cart.add_item(&product("1", 1000, 2), 1);
        assert!(!cart.lines()[0].can_increment());
    }

    #[test]
    fn test_session_round_trip_keeps_exact_totals() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 2490, 15), 3);
        let json = serde_json::to_value(&cart).unwrap();
        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total_price(), Price::from_cents(7470));
    }
}
