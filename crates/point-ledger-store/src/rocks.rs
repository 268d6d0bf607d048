//! `RocksDB` storage implementation.

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};

use point_ledger_core::{AccountBalance, RecordId, TransactionKind, TransactionRecord, UserId};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::{AccountStore, HistoryStore};

/// RocksDB-backed storage for balances and transaction records.
///
/// Record ids are assigned from an in-process counter seeded with the highest
/// id already on disk, so they stay monotonic across restarts.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    next_record_id: AtomicI64,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let store = Self {
            db: Arc::new(db),
            next_record_id: AtomicI64::new(1),
        };

        let last = store.last_record_id()?;
        store.next_record_id.store(last + 1, Ordering::SeqCst);
        tracing::debug!(last_record_id = last, "opened rocksdb store");

        Ok(store)
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Highest record id on disk, or 0 for a fresh database.
    fn last_record_id(&self) -> Result<i64> {
        let cf = self.cf(cf::HISTORY)?;
        let mut iter = self.db.iterator_cf(&cf, IteratorMode::End);

        match iter.next() {
            Some(item) => {
                let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&key[..8]);
                Ok(i64::from_be_bytes(bytes))
            }
            None => Ok(0),
        }
    }

    /// Fetch a single record by id.
    fn get_record(&self, record_id: RecordId) -> Result<Option<TransactionRecord>> {
        let cf = self.cf(cf::HISTORY)?;

        self.db
            .get_cf(&cf, keys::record_key(record_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl AccountStore for RocksStore {
    fn get(&self, user_id: UserId) -> Result<Option<AccountBalance>> {
        let cf = self.cf(cf::BALANCES)?;

        self.db
            .get_cf(&cf, keys::balance_key(user_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn upsert(&self, user_id: UserId, balance: i64, updated_at_ms: i64) -> Result<AccountBalance> {
        let snapshot = AccountBalance::new(user_id, balance, updated_at_ms);

        let cf = self.cf(cf::BALANCES)?;
        let value = Self::serialize(&snapshot)?;

        self.db
            .put_cf(&cf, keys::balance_key(user_id), value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(snapshot)
    }
}

impl HistoryStore for RocksStore {
    fn append(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionKind,
        created_at_ms: i64,
    ) -> Result<TransactionRecord> {
        let id = RecordId::new(self.next_record_id.fetch_add(1, Ordering::SeqCst));
        let record = TransactionRecord {
            id,
            user_id,
            amount,
            kind,
            created_at_ms,
        };

        let cf_history = self.cf(cf::HISTORY)?;
        let cf_by_user = self.cf(cf::HISTORY_BY_USER)?;
        let value = Self::serialize(&record)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_history, keys::record_key(id), &value);
        batch.put_cf(&cf_by_user, keys::user_record_key(user_id, id), []); // Index entry (empty value)

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(record)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>> {
        let cf_by_user = self.cf(cf::HISTORY_BY_USER)?;
        let prefix = keys::user_records_prefix(user_id);

        let iter = self.db.iterator_cf(
            &cf_by_user,
            IteratorMode::From(&prefix, Direction::Forward),
        );

        let mut records = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            if !key.starts_with(&prefix) {
                break;
            }

            let record_id = keys::extract_record_id_from_user_key(&key);
            if let Some(record) = self.get_record(record_id)? {
                records.push(record);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn balance_get_and_upsert() {
        let (store, _dir) = create_test_store();
        let user_id = UserId::new(1);

        assert!(store.get(user_id).unwrap().is_none());

        let stored = store.upsert(user_id, 5000, 1_700_000_000_000).unwrap();
        assert_eq!(stored.balance, 5000);

        let retrieved = store.get(user_id).unwrap().unwrap();
        assert_eq!(retrieved, stored);

        // Upsert replaces the snapshot.
        store.upsert(user_id, 4900, 1_700_000_000_500).unwrap();
        let updated = store.get(user_id).unwrap().unwrap();
        assert_eq!(updated.balance, 4900);
        assert_eq!(updated.updated_at_ms, 1_700_000_000_500);
    }

    #[test]
    fn append_assigns_monotonic_ids() {
        let (store, _dir) = create_test_store();
        let user_id = UserId::new(2);

        let first = store
            .append(user_id, 500, TransactionKind::Charge, 1)
            .unwrap();
        let second = store.append(user_id, 200, TransactionKind::Use, 2).unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.amount, 500);
        assert_eq!(second.kind, TransactionKind::Use);
    }

    #[test]
    fn list_by_user_returns_only_that_users_records() {
        let (store, _dir) = create_test_store();
        let user_a = UserId::new(10);
        let user_b = UserId::new(11);

        store.append(user_a, 100, TransactionKind::Charge, 1).unwrap();
        store.append(user_b, 300, TransactionKind::Charge, 2).unwrap();
        store.append(user_a, 50, TransactionKind::Use, 3).unwrap();

        let records = store.list_by_user(user_a).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.user_id == user_a));

        assert_eq!(store.list_by_user(user_b).unwrap().len(), 1);
        assert!(store.list_by_user(UserId::new(12)).unwrap().is_empty());
    }

    #[test]
    fn record_ids_stay_monotonic_across_reopen() {
        let dir = TempDir::new().unwrap();

        let last_before = {
            let store = RocksStore::open(dir.path()).unwrap();
            let user_id = UserId::new(3);
            store.append(user_id, 1, TransactionKind::Charge, 1).unwrap();
            store
                .append(user_id, 2, TransactionKind::Charge, 2)
                .unwrap()
                .id
        };

        let store = RocksStore::open(dir.path()).unwrap();
        let next = store
            .append(UserId::new(3), 3, TransactionKind::Charge, 3)
            .unwrap();

        assert!(next.id > last_before);
        assert_eq!(store.list_by_user(UserId::new(3)).unwrap().len(), 3);
    }
}
