//! Settings Repository

use shared::models::{SettingUpdate, StoreSettings};

use super::RepoResult;
use crate::db::{LocalStore, keys};

#[derive(Clone)]
pub struct SettingsRepository {
    store: LocalStore,
}

impl SettingsRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Current settings, defaults when never written
    pub fn get(&self) -> RepoResult<StoreSettings> {
        Ok(self.store.read(keys::SETTINGS)?)
    }

    pub fn apply(&self, update: SettingUpdate) -> RepoResult<StoreSettings> {
        Ok(self.store.update(keys::SETTINGS, |settings: &mut StoreSettings| {
            settings.apply(update);
            (settings.clone(), true)
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_defaults_then_apply() {
        let repo = SettingsRepository::new(LocalStore::open_in_memory().unwrap());
        assert_eq!(repo.get().unwrap(), StoreSettings::default());

        repo.apply(SettingUpdate::MinimumOrder(Some(Decimal::new(150, 0)))).unwrap();
        repo.apply(SettingUpdate::BusinessName("Super Empire".to_string())).unwrap();

        let settings = repo.get().unwrap();
        assert_eq!(settings.minimum_order, Some(Decimal::new(150, 0)));
        assert_eq!(settings.business_name, "Super Empire");
        assert_eq!(settings.quote_follow_up_hours, 24);
    }
}
