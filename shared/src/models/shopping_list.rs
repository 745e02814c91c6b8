//! Shopping list (standing order) Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product reference plus the quantity to reorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntry {
    pub product_id: String,
    pub quantity: u32,
}

/// Named, reusable set of entries for recurring reorders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub customer_id: Option<String>,
    pub items: Vec<ShoppingListEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Update shopping list payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShoppingListPatch {
    pub name: Option<String>,
    pub items: Option<Vec<ShoppingListEntry>>,
}
