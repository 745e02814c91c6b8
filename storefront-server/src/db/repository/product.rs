//! Product Repository

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{PriceUpdate, Product, ProductPatch};

use super::{RepoError, RepoResult};
use crate::db::{LocalStore, keys};

#[derive(Clone)]
pub struct ProductRepository {
    store: LocalStore,
}

impl ProductRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// All products in catalog order
    pub fn get_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.store.read(keys::PRODUCTS)?)
    }

    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        Ok(self.get_all()?.into_iter().find(|p| p.id == id))
    }

    /// Write `catalog` when the products container is empty
    ///
    /// Returns the number of products written.
    pub fn seed_if_empty(&self, catalog: Vec<Product>) -> RepoResult<usize> {
        let count = catalog.len();
        let seeded = self.store.update(keys::PRODUCTS, |products: &mut Vec<Product>| {
            if !products.is_empty() || catalog.is_empty() {
                return (0, false);
            }
            *products = catalog;
            (count, true)
        })?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded product catalog");
        }
        Ok(seeded)
    }

    /// Merge a partial update into one product
    ///
    /// When the price changes, a [`PriceUpdate`] is appended to the history
    /// and `price_effective_date` moves to today, in the same transaction as
    /// the product rewrite. Returns the records appended by this call, or
    /// `Ok(None)` for an unknown id.
    pub fn update(&self, id: &str, patch: &ProductPatch) -> RepoResult<Option<Vec<PriceUpdate>>> {
        if let Some(price) = patch.price {
            ensure_price(id, price)?;
        }

        let txn = self.store.begin_write()?;
        let mut products: Vec<Product> = self.store.read_in(&txn, keys::PRODUCTS)?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            self.store.finish(txn, false)?;
            return Ok(None);
        };

        let mut appended = Vec::new();
        if let Some(new_price) = patch.price
            && new_price != product.price
        {
            let record = PriceUpdate::by_admin(id, product.price, new_price);
            let mut history: Vec<PriceUpdate> = self.store.read_in(&txn, keys::PRICE_HISTORY)?;
            history.push(record.clone());
            self.store.write_in(&txn, keys::PRICE_HISTORY, &history)?;
            appended.push(record);

            product.price = new_price;
            product.price_effective_date = Some(Utc::now().date_naive());
            tracing::info!(product_id = %id, price = %new_price, "Product price changed");
        }
        if let Some(quantity) = patch.stock_quantity {
            product.set_stock_quantity(quantity);
        }
        if let Some(pack_size) = &patch.pack_size {
            product.pack_size = pack_size.clone();
        }
        if let Some(unit) = &patch.unit {
            product.unit = unit.clone();
        }
        if let Some(image) = &patch.image {
            product.image = Some(image.clone());
        }

        self.store.write_in(&txn, keys::PRODUCTS, &products)?;
        self.store.finish(txn, true)?;
        Ok(Some(appended))
    }

    /// Apply many price edits in one read-modify-write
    ///
    /// Unknown ids and unchanged prices are skipped, so applying the same
    /// batch twice changes nothing the second time. Returns the audit
    /// records appended by this call, in catalog order.
    pub fn update_multiple_prices(&self, prices: &BTreeMap<String, Decimal>) -> RepoResult<Vec<PriceUpdate>> {
        for (id, price) in prices {
            ensure_price(id, *price)?;
        }

        let txn = self.store.begin_write()?;
        let mut products: Vec<Product> = self.store.read_in(&txn, keys::PRODUCTS)?;
        let today = Utc::now().date_naive();
        let mut updates = Vec::new();

        for product in products.iter_mut() {
            if let Some(&new_price) = prices.get(&product.id)
                && new_price != product.price
            {
                updates.push(PriceUpdate::by_admin(&product.id, product.price, new_price));
                product.price = new_price;
                product.price_effective_date = Some(today);
            }
        }

        let changed = updates.len();
        if changed > 0 {
            let mut history: Vec<PriceUpdate> = self.store.read_in(&txn, keys::PRICE_HISTORY)?;
            history.extend(updates.iter().cloned());
            self.store.write_in(&txn, keys::PRICE_HISTORY, &history)?;
            self.store.write_in(&txn, keys::PRODUCTS, &products)?;
        }
        self.store.finish(txn, changed > 0)?;

        tracing::info!(requested = prices.len(), changed, "Bulk price update");
        Ok(updates)
    }
}

fn ensure_price(id: &str, price: Decimal) -> RepoResult<()> {
    if price < Decimal::ZERO {
        return Err(RepoError::InvalidPrice(format!(
            "Price for {id} cannot be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::PriceHistoryRepository;
    use shared::models::{ProductCategory, StockStatus};

    fn product(id: &str, cents: i64) -> Product {
        let mut p = Product::new(id, id, ProductCategory::Produce, Decimal::new(cents, 2), "case", "1 ct");
        p.set_stock_quantity(50);
        p
    }

    fn seeded() -> (ProductRepository, PriceHistoryRepository) {
        let store = LocalStore::open_in_memory().unwrap();
        let repo = ProductRepository::new(store.clone());
        repo.seed_if_empty(vec![product("TOM004", 2499), product("AVG001", 4850)])
            .unwrap();
        (repo, PriceHistoryRepository::new(store))
    }

    #[test]
    fn test_seed_only_once() {
        let (repo, _) = seeded();
        assert_eq!(repo.seed_if_empty(vec![product("NEW001", 100)]).unwrap(), 0);
        assert_eq!(repo.get_all().unwrap().len(), 2);
        assert!(repo.get_by_id("NEW001").unwrap().is_none());
    }

    #[test]
    fn test_price_update_appends_history() {
        let (repo, history) = seeded();
        let updated = repo.update("TOM004", &ProductPatch::price(Decimal::new(2699, 2))).unwrap();
        assert!(updated.is_some());

        let product = repo.get_by_id("TOM004").unwrap().unwrap();
        assert_eq!(product.price, Decimal::new(2699, 2));
        assert_eq!(product.price_effective_date, Some(Utc::now().date_naive()));

        let records = history.get_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_id, "TOM004");
        assert_eq!(records[0].old_price, Decimal::new(2499, 2));
        assert_eq!(records[0].new_price, Decimal::new(2699, 2));
        assert_eq!(records[0].changed_by, "admin");
    }

    #[test]
    fn test_same_price_writes_no_history() {
        let (repo, history) = seeded();
        let appended = repo.update("TOM004", &ProductPatch::price(Decimal::new(2499, 2))).unwrap();
        assert_eq!(appended, Some(Vec::new()));
        assert!(history.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_returns_false() {
        let (repo, history) = seeded();
        let updated = repo.update("NOPE01", &ProductPatch::price(Decimal::ONE)).unwrap();
        assert!(updated.is_none());
        assert!(history.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let (repo, history) = seeded();
        let result = repo.update("TOM004", &ProductPatch::price(Decimal::new(-1, 0)));
        assert!(matches!(result, Err(RepoError::InvalidPrice(_))));
        assert_eq!(repo.get_by_id("TOM004").unwrap().unwrap().price, Decimal::new(2499, 2));
        assert!(history.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_stock_patch_rederives_status() {
        let (repo, _) = seeded();
        repo.update("AVG001", &ProductPatch::stock(0)).unwrap();
        let product = repo.get_by_id("AVG001").unwrap().unwrap();
        assert_eq!(product.stock_quantity, Some(0));
        assert_eq!(product.stock_status, Some(StockStatus::OutOfStock));
    }

    #[test]
    fn test_bulk_prices_are_idempotent() {
        let (repo, history) = seeded();
        let batch = BTreeMap::from([
            ("TOM004".to_string(), Decimal::new(2599, 2)),
            ("AVG001".to_string(), Decimal::new(4850, 2)),
            ("MISSING".to_string(), Decimal::new(100, 2)),
        ]);

        assert_eq!(repo.update_multiple_prices(&batch).unwrap().len(), 1);
        assert!(repo.update_multiple_prices(&batch).unwrap().is_empty());
        assert_eq!(history.get_all().unwrap().len(), 1);
        assert_eq!(repo.get_by_id("TOM004").unwrap().unwrap().price, Decimal::new(2599, 2));
    }

    #[test]
    fn test_update_returns_only_its_own_records() {
        let (repo, history) = seeded();
        repo.update("AVG001", &ProductPatch::price(Decimal::new(4999, 2))).unwrap();

        let appended = repo
            .update("TOM004", &ProductPatch::price(Decimal::new(2699, 2)))
            .unwrap()
            .unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].product_id, "TOM004");
        assert_eq!(history.get_all().unwrap().len(), 2);

        let stock_only = repo.update("TOM004", &ProductPatch::stock(3)).unwrap();
        assert_eq!(stock_only, Some(Vec::new()));
        assert_eq!(repo.update("NOPE01", &ProductPatch::stock(3)).unwrap(), None);
    }

    #[test]
    fn test_bulk_prices_return_appended_records() {
        let (repo, history) = seeded();
        repo.update("TOM004", &ProductPatch::price(Decimal::new(2599, 2))).unwrap();

        let batch = BTreeMap::from([
            ("TOM004".to_string(), Decimal::new(2599, 2)),
            ("AVG001".to_string(), Decimal::new(4700, 2)),
        ]);
        let appended = repo.update_multiple_prices(&batch).unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].product_id, "AVG001");
        assert_eq!(appended[0].old_price, Decimal::new(4850, 2));
        assert_eq!(history.get_all().unwrap().len(), 2);
        assert!(repo.update_multiple_prices(&batch).unwrap().is_empty());
    }

    #[test]
    fn test_bulk_prices_reject_negative_batch() {
        let (repo, _) = seeded();
        let batch = BTreeMap::from([
            ("TOM004".to_string(), Decimal::new(2599, 2)),
            ("AVG001".to_string(), Decimal::new(-5, 0)),
        ]);
        assert!(repo.update_multiple_prices(&batch).is_err());
        assert_eq!(repo.get_by_id("TOM004").unwrap().unwrap().price, Decimal::new(2499, 2));
    }
}
