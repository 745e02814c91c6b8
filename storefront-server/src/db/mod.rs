//! Local persistence layer
//!
//! One redb table holds one JSON document ("container") per entity type:
//!
//! | Key | Document |
//! |-----|----------|
//! | `superempire_products` | `Vec<Product>` |
//! | `superempire_orders` | `Vec<Order>` |
//! | `superempire_customers` | `Vec<Customer>` |
//! | `superempire_price_history` | `Vec<PriceUpdate>` |
//! | `superempire_settings` | `StoreSettings` |
//! | `superempire_shopping_lists` | `Vec<ShoppingList>` |
//!
//! Reads deserialize a whole container; writes serialize a whole container.
//! A read-modify-write cycle runs inside a single write transaction, and
//! redb admits one writer at a time, so concurrent cycles cannot lose each
//! other's updates. A missing container reads as its `Default`.

pub mod backup;
pub mod csv;
pub mod repository;

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::utils::AppError;

/// Container table: key = namespace key, value = JSON document
const CONTAINERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("containers");

/// Fixed namespace keys
pub mod keys {
    pub const PRODUCTS: &str = "superempire_products";
    pub const ORDERS: &str = "superempire_orders";
    pub const CUSTOMERS: &str = "superempire_customers";
    pub const PRICE_HISTORY: &str = "superempire_price_history";
    pub const SETTINGS: &str = "superempire_settings";
    pub const SHOPPING_LISTS: &str = "superempire_shopping_lists";

    pub const ALL: &[&str] = &[PRODUCTS, ORDERS, CUSTOMERS, PRICE_HISTORY, SETTINGS, SHOPPING_LISTS];
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Storage failure");
        AppError::database(err.to_string())
    }
}

/// Container store backed by redb
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}

impl LocalStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// In-memory database for tests
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CONTAINERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Commit when `changed`, otherwise abort
    pub fn finish(&self, txn: WriteTransaction, changed: bool) -> StorageResult<()> {
        if changed {
            txn.commit()?;
        } else {
            txn.abort()?;
        }
        Ok(())
    }

    // ========== Reads ==========

    /// Deserialize a whole container, `Default` when absent
    pub fn read<T: DeserializeOwned + Default>(&self, key: &str) -> StorageResult<T> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTAINERS_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(T::default()),
        }
    }

    /// Whether a container has ever been written
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTAINERS_TABLE)?;
        Ok(table.get(key)?.is_some())
    }

    /// Read a container inside a write transaction
    pub fn read_in<T: DeserializeOwned + Default>(
        &self,
        txn: &WriteTransaction,
        key: &str,
    ) -> StorageResult<T> {
        let table = txn.open_table(CONTAINERS_TABLE)?;
        let value = match table.get(key)? {
            Some(guard) => serde_json::from_slice(guard.value())?,
            None => T::default(),
        };
        Ok(value)
    }

    // ========== Writes ==========

    /// Serialize a whole container inside a write transaction
    pub fn write_in<T: Serialize>(
        &self,
        txn: &WriteTransaction,
        key: &str,
        value: &T,
    ) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let mut table = txn.open_table(CONTAINERS_TABLE)?;
        table.insert(key, bytes.as_slice())?;
        Ok(())
    }

    /// Replace a whole container in its own transaction
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let txn = self.begin_write()?;
        self.write_in(&txn, key, value)?;
        txn.commit()?;
        Ok(())
    }

    /// Read-modify-write one container atomically
    ///
    /// `f` returns the caller's result and whether the container changed;
    /// unchanged containers are not rewritten.
    pub fn update<T, R>(&self, key: &str, f: impl FnOnce(&mut T) -> (R, bool)) -> StorageResult<R>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let txn = self.begin_write()?;
        let mut container: T = self.read_in(&txn, key)?;
        let (result, changed) = f(&mut container);
        if changed {
            self.write_in(&txn, key, &container)?;
        }
        self.finish(txn, changed)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_reads_default() {
        let store = LocalStore::open_in_memory().unwrap();
        let values: Vec<String> = store.read(keys::ORDERS).unwrap();
        assert!(values.is_empty());
        assert!(!store.contains(keys::ORDERS).unwrap());
    }

    #[test]
    fn test_write_then_read_whole_container() {
        let store = LocalStore::open_in_memory().unwrap();
        store.write(keys::CUSTOMERS, &vec!["a".to_string(), "b".to_string()]).unwrap();
        let values: Vec<String> = store.read(keys::CUSTOMERS).unwrap();
        assert_eq!(values, vec!["a", "b"]);
        assert!(store.contains(keys::CUSTOMERS).unwrap());
    }

    #[test]
    fn test_update_skips_write_when_unchanged() {
        let store = LocalStore::open_in_memory().unwrap();
        let pushed = store
            .update(keys::ORDERS, |values: &mut Vec<u32>| {
                values.push(7);
                (values.len(), true)
            })
            .unwrap();
        assert_eq!(pushed, 1);

        let untouched = store
            .update(keys::ORDERS, |values: &mut Vec<u32>| {
                values.push(8);
                (values.len(), false)
            })
            .unwrap();
        assert_eq!(untouched, 2);

        let values: Vec<u32> = store.read(keys::ORDERS).unwrap();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_corrupt_container_is_an_error() {
        let store = LocalStore::open_in_memory().unwrap();
        store.write(keys::ORDERS, &"not a list").unwrap();
        let result: StorageResult<Vec<u32>> = store.read(keys::ORDERS);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");
        {
            let store = LocalStore::open(&path).unwrap();
            store.write(keys::PRODUCTS, &vec![1u32, 2, 3]).unwrap();
        }
        let reopened = LocalStore::open(&path).unwrap();
        let values: Vec<u32> = reopened.read(keys::PRODUCTS).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
