//! JSON backup export/import
//!
//! The envelope carries every container under its camelCase name plus an
//! `exportDate`. Import is partial: each key present in the payload replaces
//! its container wholesale, absent keys are left alone, and the whole import
//! commits in one transaction or not at all.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Customer, Order, PriceUpdate, Product, ShoppingList, StoreSettings};

use super::{LocalStore, StorageResult, keys};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEnvelope {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub price_history: Vec<PriceUpdate>,
    pub settings: StoreSettings,
    pub shopping_lists: Vec<ShoppingList>,
    pub export_date: DateTime<Utc>,
}

/// Import payload; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupImport {
    products: Option<Vec<Product>>,
    orders: Option<Vec<Order>>,
    customers: Option<Vec<Customer>>,
    price_history: Option<Vec<PriceUpdate>>,
    settings: Option<StoreSettings>,
    shopping_lists: Option<Vec<ShoppingList>>,
}

pub fn export(store: &LocalStore) -> StorageResult<BackupEnvelope> {
    Ok(BackupEnvelope {
        products: store.read(keys::PRODUCTS)?,
        orders: store.read(keys::ORDERS)?,
        customers: store.read(keys::CUSTOMERS)?,
        price_history: store.read(keys::PRICE_HISTORY)?,
        settings: store.read(keys::SETTINGS)?,
        shopping_lists: store.read(keys::SHOPPING_LISTS)?,
        export_date: Utc::now(),
    })
}

pub fn export_json(store: &LocalStore) -> StorageResult<String> {
    Ok(serde_json::to_string_pretty(&export(store)?)?)
}

/// Apply a backup; `false` when the payload is malformed or cannot be stored
pub fn import_json(store: &LocalStore, json: &str) -> bool {
    let payload: BackupImport = match serde_json::from_str(json) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed backup");
            return false;
        }
    };

    if let Some(products) = &payload.products
        && let Err(reason) = check_products(products)
    {
        tracing::warn!(reason = %reason, "Rejected backup with invalid products");
        return false;
    }

    match apply(store, payload) {
        Ok(replaced) => {
            tracing::info!(containers = replaced, "Backup imported");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Backup import failed");
            false
        }
    }
}

/// Imported products must keep the invariants edits maintain
fn check_products(products: &[Product]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(format!("duplicate product id {}", product.id));
        }
        if product.price < Decimal::ZERO {
            return Err(format!("negative price for {}", product.id));
        }
        if !product.stock_consistent() {
            return Err(format!("stock status disagrees with quantity for {}", product.id));
        }
    }
    Ok(())
}

fn apply(store: &LocalStore, payload: BackupImport) -> StorageResult<usize> {
    let txn = store.begin_write()?;
    let mut replaced = 0;

    if let Some(products) = payload.products {
        store.write_in(&txn, keys::PRODUCTS, &products)?;
        replaced += 1;
    }
    if let Some(orders) = payload.orders {
        store.write_in(&txn, keys::ORDERS, &orders)?;
        replaced += 1;
    }
    if let Some(customers) = payload.customers {
        store.write_in(&txn, keys::CUSTOMERS, &customers)?;
        replaced += 1;
    }
    if let Some(history) = payload.price_history {
        store.write_in(&txn, keys::PRICE_HISTORY, &history)?;
        replaced += 1;
    }
    if let Some(settings) = payload.settings {
        store.write_in(&txn, keys::SETTINGS, &settings)?;
        replaced += 1;
    }
    if let Some(lists) = payload.shopping_lists {
        store.write_in(&txn, keys::SHOPPING_LISTS, &lists)?;
        replaced += 1;
    }

    store.finish(txn, replaced > 0)?;
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::db::repository::{PriceHistoryRepository, ProductRepository};
    use shared::models::ProductPatch;

    fn seeded_store() -> LocalStore {
        let store = LocalStore::open_in_memory().unwrap();
        let products = ProductRepository::new(store.clone());
        products.seed_if_empty(build_catalog()).unwrap();
        products.update("TOM004", &ProductPatch::price(Decimal::new(3100, 2))).unwrap();
        store
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = seeded_store();
        let json = export_json(&source).unwrap();

        let target = LocalStore::open_in_memory().unwrap();
        assert!(import_json(&target, &json));

        let before = export(&source).unwrap();
        let after = export(&target).unwrap();
        assert_eq!(after.products, before.products);
        assert_eq!(after.orders, before.orders);
        assert_eq!(after.customers, before.customers);
        assert_eq!(after.price_history, before.price_history);
        assert_eq!(PriceHistoryRepository::new(target).get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_partial_import_leaves_other_keys() {
        let store = seeded_store();
        let product_count = export(&store).unwrap().products.len();

        assert!(import_json(&store, r#"{"orders": [], "priceHistory": []}"#));
        let after = export(&store).unwrap();
        assert_eq!(after.products.len(), product_count);
        assert!(after.price_history.is_empty());
    }

    #[test]
    fn test_malformed_import_changes_nothing() {
        let store = seeded_store();
        let before = export(&store).unwrap();

        assert!(!import_json(&store, "{ not json"));
        assert!(!import_json(&store, r#"{"products": "nope"}"#));

        let after = export(&store).unwrap();
        assert_eq!(after.products, before.products);
        assert_eq!(after.price_history, before.price_history);
    }

    #[test]
    fn test_import_rejects_broken_product_invariants() {
        let store = seeded_store();
        let before = export(&store).unwrap();
        let first = serde_json::to_value(&before.products[0]).unwrap();

        let mut stale_status = first.clone();
        stale_status["stockQuantity"] = serde_json::json!(0);
        stale_status["stockStatus"] = serde_json::json!("in-stock");
        let payload = serde_json::json!({"products": [stale_status]});
        assert!(!import_json(&store, &payload.to_string()));

        let payload = serde_json::json!({"products": [first.clone(), first], "orders": []});
        assert!(!import_json(&store, &payload.to_string()));

        let after = export(&store).unwrap();
        assert_eq!(after.products, before.products);
        assert_eq!(after.orders, before.orders);
    }

    #[test]
    fn test_envelope_keys() {
        let store = seeded_store();
        let value: serde_json::Value = serde_json::from_str(&export_json(&store).unwrap()).unwrap();
        for key in ["products", "orders", "customers", "priceHistory", "exportDate"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
