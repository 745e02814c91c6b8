//! Quote building shared by the cart, checkout and shopping list endpoints

use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use shared::models::{OrderItem, Product, ShoppingListEntry};
use validator::Validate;

use crate::cart::{Cart, CartTotals, MAX_QUANTITY};
use crate::utils::{AppError, AppResult};

/// One requested line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    #[validate(length(min = 1, max = 32))]
    pub product_id: String,
    pub quantity: i64,
}

impl From<&ShoppingListEntry> for QuoteLine {
    fn from(entry: &ShoppingListEntry) -> Self {
        Self {
            product_id: entry.product_id.clone(),
            quantity: i64::from(entry.quantity),
        }
    }
}

/// How non-positive quantities are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Drop the line, as a cart does when a quantity is set to zero
    DropNonPositive,
    /// Reject the request with `CartInvalidQuantity`
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub items: Vec<OrderItem>,
    pub item_count: u32,
    /// Cent-rounded amounts, as an order would store them
    pub totals: CartTotals,
    /// Unrounded amounts
    pub exact: CartTotals,
}

impl From<&Cart> for QuoteResponse {
    fn from(cart: &Cart) -> Self {
        let exact = cart.totals();
        Self {
            items: cart.to_order_items(),
            item_count: cart.item_count(),
            totals: exact.rounded(),
            exact,
        }
    }
}

/// Resolve requested lines against the catalog
///
/// Unknown product ids are rejected with `ProductNotFound`. Repeated ids
/// merge into one line; a line whose merged quantity exceeds
/// [`MAX_QUANTITY`] is rejected under either policy.
pub fn build_cart(catalog: &[Product], lines: &[QuoteLine], policy: QuantityPolicy) -> AppResult<Cart> {
    let mut cart = Cart::new();
    for line in lines {
        let product = catalog
            .iter()
            .find(|p| p.id == line.product_id)
            .ok_or_else(|| AppError::product_not_found(&line.product_id))?;

        if line.quantity <= 0 {
            match policy {
                QuantityPolicy::DropNonPositive => continue,
                QuantityPolicy::Reject => {
                    return Err(AppError::with_message(
                        ErrorCode::CartInvalidQuantity,
                        format!("Quantity for {} must be positive", line.product_id),
                    )
                    .with_detail("productId", line.product_id.clone()));
                }
            }
        }

        let already = cart
            .lines()
            .iter()
            .find(|l| l.product.id == product.id)
            .map_or(0, |l| i64::from(l.quantity));
        let quantity = match u32::try_from(line.quantity) {
            Ok(q) if already.saturating_add(line.quantity) <= i64::from(MAX_QUANTITY) => q,
            _ => {
                return Err(AppError::with_message(
                    ErrorCode::CartInvalidQuantity,
                    format!("Quantity for {} cannot exceed {MAX_QUANTITY}", line.product_id),
                )
                .with_detail("productId", line.product_id.clone()));
            }
        };
        cart.add(product.clone(), quantity);
    }
    Ok(cart)
}
