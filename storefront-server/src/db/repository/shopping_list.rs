//! Shopping list Repository

use chrono::Utc;
use shared::models::{ShoppingList, ShoppingListPatch};

use super::{RepoError, RepoResult};
use crate::db::{LocalStore, keys};

#[derive(Clone)]
pub struct ShoppingListRepository {
    store: LocalStore,
}

impl ShoppingListRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// All lists, optionally narrowed to one customer
    pub fn get_all(&self, customer_id: Option<&str>) -> RepoResult<Vec<ShoppingList>> {
        let lists: Vec<ShoppingList> = self.store.read(keys::SHOPPING_LISTS)?;
        Ok(match customer_id {
            Some(customer_id) => lists
                .into_iter()
                .filter(|l| l.customer_id.as_deref() == Some(customer_id))
                .collect(),
            None => lists,
        })
    }

    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<ShoppingList>> {
        Ok(self.get_all(None)?.into_iter().find(|l| l.id == id))
    }

    pub fn add(&self, list: ShoppingList) -> RepoResult<ShoppingList> {
        let txn = self.store.begin_write()?;
        let mut lists: Vec<ShoppingList> = self.store.read_in(&txn, keys::SHOPPING_LISTS)?;
        if lists.iter().any(|l| l.id == list.id) {
            self.store.finish(txn, false)?;
            return Err(RepoError::Duplicate(format!("Shopping list {} already exists", list.id)));
        }
        lists.push(list.clone());
        self.store.write_in(&txn, keys::SHOPPING_LISTS, &lists)?;
        self.store.finish(txn, true)?;
        Ok(list)
    }

    /// Names are stored trimmed. Returns `Ok(false)` for an unknown id
    pub fn update(&self, id: &str, patch: ShoppingListPatch) -> RepoResult<bool> {
        Ok(self.store.update(keys::SHOPPING_LISTS, |lists: &mut Vec<ShoppingList>| {
            let Some(list) = lists.iter_mut().find(|l| l.id == id) else {
                return (false, false);
            };
            if let Some(name) = patch.name {
                list.name = name.trim().to_string();
            }
            if let Some(items) = patch.items {
                list.items = items;
            }
            list.updated_at = Utc::now();
            (true, true)
        })?)
    }

    /// Returns `Ok(false)` for an unknown id
    pub fn delete(&self, id: &str) -> RepoResult<bool> {
        Ok(self.store.update(keys::SHOPPING_LISTS, |lists: &mut Vec<ShoppingList>| {
            let before = lists.len();
            lists.retain(|l| l.id != id);
            let removed = lists.len() != before;
            (removed, removed)
        })?)
    }

    /// Stamp `last_used_at` after the list was turned into a quote
    pub fn touch_used(&self, id: &str) -> RepoResult<bool> {
        Ok(self.store.update(keys::SHOPPING_LISTS, |lists: &mut Vec<ShoppingList>| {
            match lists.iter_mut().find(|l| l.id == id) {
                Some(list) => {
                    list.last_used_at = Some(Utc::now());
                    (true, true)
                }
                None => (false, false),
            }
        })?)
    }
}
