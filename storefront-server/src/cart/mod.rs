//! Cart and checkout computation
//!
//! A [`Cart`] keeps lines in insertion order. Adding a product already in
//! the cart merges quantities; setting a quantity to zero or below removes
//! the line instead of storing a non-positive quantity.

pub mod money;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{OrderItem, Product};

pub use money::{CartTotals, TAX_RATE, round_money};

/// Maximum quantity per line
pub const MAX_QUANTITY: u32 = 9999;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    /// Snapshot as an order line, price frozen at order time
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product.id.clone(),
            product_name: self.product.name.clone(),
            unit: self.product.unit.clone(),
            pack_size: self.product.pack_size.clone(),
            unit_price: self.product.price,
            quantity: self.quantity,
            line_total: round_money(self.line_total()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` units, merging into an existing line for the same product
    ///
    /// A zero quantity is a no-op. Quantities saturate at [`MAX_QUANTITY`].
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            }
            None => self.lines.push(CartLine {
                product,
                quantity: quantity.min(MAX_QUANTITY),
            }),
        }
    }

    /// Set a line's quantity; zero or below removes the line
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.product.id == product_id) else {
            return false;
        };
        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = u32::try_from(quantity).unwrap_or(MAX_QUANTITY).min(MAX_QUANTITY);
        }
        true
    }

    /// Exact totals at [`TAX_RATE`]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(
            self.lines.iter().map(|line| (line.product.price, line.quantity)),
            TAX_RATE,
        )
    }

    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines.iter().map(CartLine::to_order_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductCategory;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, id, ProductCategory::Produce, Decimal::new(cents, 2), "case", "1 ct")
    }

    #[test]
    fn test_add_merges_and_keeps_order() {
        let mut cart = Cart::new();
        cart.add(product("B", 500), 1);
        cart.add(product("A", 1000), 2);
        cart.add(product("B", 500), 2);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_non_positive_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(product("A", 1000), 2);
        cart.add(product("B", 500), 3);

        assert!(cart.set_quantity("A", 0));
        assert_eq!(cart.len(), 1);
        assert!(cart.set_quantity("B", -4));
        assert!(cart.is_empty());
        assert!(!cart.set_quantity("missing", 3));
    }

    #[test]
    fn test_zero_add_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("A", 1000), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_match_reference_example() {
        let mut cart = Cart::new();
        cart.add(product("A", 1000), 2);
        cart.add(product("B", 500), 3);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, Decimal::new(3500, 2));
        assert_eq!(totals.tax, Decimal::new(28875, 4));
        assert_eq!(totals.total, Decimal::new(378875, 4));
    }

    #[test]
    fn test_order_items_snapshot_prices() {
        let mut cart = Cart::new();
        cart.add(product("A", 1999), 3);
        let items = cart.to_order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, Decimal::new(1999, 2));
        assert_eq!(items[0].line_total, Decimal::new(5997, 2));
    }

    #[test]
    fn test_quantity_is_capped() {
        let mut cart = Cart::new();
        cart.add(product("A", 100), MAX_QUANTITY);
        cart.add(product("A", 100), 5);
        assert_eq!(cart.lines()[0].quantity, MAX_QUANTITY);
        cart.set_quantity("A", i64::MAX);
        assert_eq!(cart.lines()[0].quantity, MAX_QUANTITY);
    }
}
