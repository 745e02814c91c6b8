//! Price history Repository
//!
//! Append-only. Product price edits append through the product repository
//! inside their own transaction; `append` covers records arriving from
//! elsewhere (imports, tests).

use shared::models::PriceUpdate;

use super::RepoResult;
use crate::db::{LocalStore, keys};

#[derive(Clone)]
pub struct PriceHistoryRepository {
    store: LocalStore,
}

impl PriceHistoryRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Every record in append order
    pub fn get_all(&self) -> RepoResult<Vec<PriceUpdate>> {
        Ok(self.store.read(keys::PRICE_HISTORY)?)
    }

    pub fn get_for_product(&self, product_id: &str) -> RepoResult<Vec<PriceUpdate>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|u| u.product_id == product_id)
            .collect())
    }

    pub fn append(&self, update: PriceUpdate) -> RepoResult<()> {
        self.store.update(keys::PRICE_HISTORY, |history: &mut Vec<PriceUpdate>| {
            history.push(update);
            ((), true)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_append_keeps_order_and_filters() {
        let repo = PriceHistoryRepository::new(LocalStore::open_in_memory().unwrap());
        repo.append(PriceUpdate::by_admin("TOM004", Decimal::new(10, 0), Decimal::new(12, 0)))
            .unwrap();
        repo.append(PriceUpdate::by_admin("AVG001", Decimal::new(40, 0), Decimal::new(42, 0)))
            .unwrap();
        repo.append(PriceUpdate::by_admin("TOM004", Decimal::new(12, 0), Decimal::new(11, 0)))
            .unwrap();

        assert_eq!(repo.get_all().unwrap().len(), 3);
        let tomatoes = repo.get_for_product("TOM004").unwrap();
        assert_eq!(tomatoes.len(), 2);
        assert_eq!(tomatoes[1].new_price, Decimal::new(11, 0));
    }
}
