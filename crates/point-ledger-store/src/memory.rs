//! In-memory storage implementation.
//!
//! The table pair the engine tests run against: a balance map and a growing
//! record list behind `RwLock`s, with an atomic cursor for record ids.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use point_ledger_core::{AccountBalance, RecordId, TransactionKind, TransactionRecord, UserId};

use crate::error::Result;
use crate::{AccountStore, HistoryStore};

/// In-memory balance and history tables.
pub struct MemoryStore {
    balances: RwLock<HashMap<UserId, AccountBalance>>,
    history: RwLock<Vec<TransactionRecord>>,
    cursor: AtomicI64,
}

impl MemoryStore {
    /// Create empty tables. Record ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            history: RwLock::new(Vec::new()),
            cursor: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, user_id: UserId) -> Result<Option<AccountBalance>> {
        let balances = self
            .balances
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(balances.get(&user_id).copied())
    }

    fn upsert(&self, user_id: UserId, balance: i64, updated_at_ms: i64) -> Result<AccountBalance> {
        let snapshot = AccountBalance::new(user_id, balance, updated_at_ms);
        let mut balances = self
            .balances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        balances.insert(user_id, snapshot);
        Ok(snapshot)
    }
}

impl HistoryStore for MemoryStore {
    fn append(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionKind,
        created_at_ms: i64,
    ) -> Result<TransactionRecord> {
        let record = TransactionRecord {
            id: RecordId::new(self.cursor.fetch_add(1, Ordering::SeqCst)),
            user_id,
            amount,
            kind,
            created_at_ms,
        };

        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        history.push(record);
        Ok(record)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>> {
        let history = self.history.read().unwrap_or_else(PoisonError::into_inner);
        Ok(history
            .iter()
            .filter(|record| record.user_id == user_id)
            .copied()
            .collect())
    }
}
