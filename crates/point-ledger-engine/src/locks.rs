//! Per-account mutation locks.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use point_ledger_core::UserId;

/// Registry of per-account mutation locks.
///
/// Handles are created lazily on first access and retained for the life of
/// the engine; accounts are never deleted, so the registry grows only with
/// the number of distinct user ids seen. The registry mutex is held just long
/// enough to fetch or insert a handle — never across a mutation — so lookups
/// for unrelated accounts don't contend with in-flight mutations.
#[derive(Default)]
pub(crate) struct AccountLocks {
    registry: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    /// Fetch the lock handle for an account, creating it on first access.
    ///
    /// Concurrent first access for the same new user id is race-free: the
    /// registry mutex serializes insertion, so exactly one handle ends up
    /// governing the id.
    pub(crate) async fn handle(&self, user_id: UserId) -> Arc<Mutex<()>> {
        let mut registry = self.registry.lock().await;
        registry.entry(user_id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_account_gets_the_same_handle() {
        let locks = AccountLocks::default();
        let first = locks.handle(UserId::new(1)).await;
        let second = locks.handle(UserId::new(1)).await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn different_accounts_get_different_handles() {
        let locks = AccountLocks::default();
        let first = locks.handle(UserId::new(1)).await;
        let second = locks.handle(UserId::new(2)).await;
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn holding_one_account_lock_does_not_block_another() {
        let locks = AccountLocks::default();
        let first = locks.handle(UserId::new(1)).await;
        let _held = first.lock().await;

        let second = locks.handle(UserId::new(2)).await;
        let acquired = second.try_lock();
        assert!(acquired.is_ok());
    }
}
