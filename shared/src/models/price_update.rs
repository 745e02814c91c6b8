//! Price history audit record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Actor label recorded for edits made through the admin panel
pub const ADMIN_ACTOR: &str = "admin";

/// One price change, appended before the product itself is rewritten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    pub product_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub old_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_price: Decimal,
    pub changed_at: DateTime<Utc>,
    pub changed_by: String,
}

impl PriceUpdate {
    pub fn by_admin(product_id: impl Into<String>, old_price: Decimal, new_price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            old_price,
            new_price,
            changed_at: Utc::now(),
            changed_by: ADMIN_ACTOR.to_string(),
        }
    }
}
