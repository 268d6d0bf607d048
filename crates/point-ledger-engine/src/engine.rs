//! The ledger mutation and query paths.

use std::sync::Arc;

use point_ledger_core::{
    now_ms, policy, AccountBalance, LedgerError, Result, TransactionKind, TransactionRecord,
    UserId,
};
use point_ledger_store::{AccountStore, HistoryStore, StoreError};

use crate::locks::AccountLocks;

/// Orchestrates charge and use operations over a balance table and an
/// append-only history store.
///
/// Each mutation runs read → validate → append-history → write-balance as an
/// indivisible unit per account: the per-account lock is held for the whole
/// sequence and released on every exit path, including policy rejections.
/// Mutations on different accounts never block one another.
pub struct LedgerEngine<S> {
    store: Arc<S>,
    locks: AccountLocks,
}

impl<S> LedgerEngine<S>
where
    S: AccountStore + HistoryStore,
{
    /// Create an engine over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            locks: AccountLocks::default(),
        }
    }

    /// Current balance snapshot for a user id.
    ///
    /// Never-seen user ids get a zero-balance snapshot. Pure read: no side
    /// effect, no exclusivity.
    ///
    /// # Errors
    ///
    /// Only [`LedgerError::Storage`] — there is no policy to violate on a
    /// read.
    pub fn get_balance(&self, user_id: UserId) -> Result<AccountBalance> {
        self.current_balance(user_id)
    }

    /// Charge points onto an account.
    ///
    /// Blocks until the account's exclusivity is granted, then validates and
    /// applies. On success the history record is appended and the new balance
    /// written before the lock is released; on rejection nothing is written.
    ///
    /// # Errors
    ///
    /// Policy rejections ([`LedgerError::InvalidAmount`],
    /// [`LedgerError::ChargeLimitExceeded`],
    /// [`LedgerError::BalanceCeilingExceeded`]) leave state untouched;
    /// [`LedgerError::Storage`] surfaces a failed store read or write.
    pub async fn charge(&self, user_id: UserId, amount: i64) -> Result<AccountBalance> {
        let lock = self.locks.handle(user_id).await;
        let _guard = lock.lock().await;

        let current = self.current_balance(user_id)?;
        policy::validate_charge(current.balance, amount)?;

        self.store
            .append(user_id, amount, TransactionKind::Charge, now_ms())
            .map_err(store_failure)?;
        let updated = self
            .store
            .upsert(user_id, current.balance + amount, now_ms())
            .map_err(store_failure)?;

        tracing::debug!(
            user_id = %user_id,
            amount,
            balance = updated.balance,
            "charged points"
        );
        Ok(updated)
    }

    /// Use points from an account.
    ///
    /// Symmetric to [`charge`](Self::charge); a use of 0 is accepted and
    /// recorded without changing the balance.
    ///
    /// # Errors
    ///
    /// Policy rejections ([`LedgerError::InvalidAmount`],
    /// [`LedgerError::InsufficientBalance`]) leave state untouched;
    /// [`LedgerError::Storage`] surfaces a failed store read or write.
    pub async fn use_points(&self, user_id: UserId, amount: i64) -> Result<AccountBalance> {
        let lock = self.locks.handle(user_id).await;
        let _guard = lock.lock().await;

        let current = self.current_balance(user_id)?;
        policy::validate_use(current.balance, amount)?;

        self.store
            .append(user_id, amount, TransactionKind::Use, now_ms())
            .map_err(store_failure)?;
        let updated = self
            .store
            .upsert(user_id, current.balance - amount, now_ms())
            .map_err(store_failure)?;

        tracing::debug!(
            user_id = %user_id,
            amount,
            balance = updated.balance,
            "used points"
        );
        Ok(updated)
    }

    /// All transaction records for a user id, most recent first.
    ///
    /// The store returns records in unspecified order; this sorts by record
    /// id descending. Empty for users with no records. Pure read, safe
    /// alongside any number of concurrent reads and in-flight mutations.
    ///
    /// # Errors
    ///
    /// Only [`LedgerError::Storage`].
    pub fn list_history(&self, user_id: UserId) -> Result<Vec<TransactionRecord>> {
        let mut records = self.store.list_by_user(user_id).map_err(store_failure)?;
        records.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(records)
    }

    fn current_balance(&self, user_id: UserId) -> Result<AccountBalance> {
        Ok(self
            .store
            .get(user_id)
            .map_err(store_failure)?
            .unwrap_or_else(|| AccountBalance::empty(user_id)))
    }
}

fn store_failure(err: StoreError) -> LedgerError {
    LedgerError::Storage(err.to_string())
}
