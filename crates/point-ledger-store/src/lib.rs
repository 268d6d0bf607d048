//! Storage layer for the point ledger.
//!
//! This crate defines the two capabilities the ledger engine consumes —
//! a balance table keyed by user id and an append-only record store — and
//! provides two implementations:
//!
//! - [`RocksStore`]: persistent storage on `RocksDB` with column families
//!   for efficient per-user indexing.
//! - [`MemoryStore`]: in-memory tables for tests.
//!
//! Neither implementation provides cross-store transactions; a single key's
//! read-then-write and a single append are individually consistent, and the
//! engine's per-account lock upgrades that into read-validate-write
//! atomicity.
//!
//! # Example
//!
//! ```no_run
//! use point_ledger_core::{TransactionKind, UserId};
//! use point_ledger_store::{AccountStore, HistoryStore, RocksStore};
//!
//! let store = RocksStore::open("/tmp/point-ledger-db").unwrap();
//!
//! let user_id = UserId::new(1);
//! store.append(user_id, 500, TransactionKind::Charge, 0).unwrap();
//! store.upsert(user_id, 500, 0).unwrap();
//!
//! let balance = store.get(user_id).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod memory;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rocks::RocksStore;

use point_ledger_core::{AccountBalance, TransactionKind, TransactionRecord, UserId};

/// The balance table: one mutable snapshot per user id.
pub trait AccountStore: Send + Sync {
    /// Get the stored balance snapshot for a user id, if any.
    ///
    /// Absence is not an error; it is a zero-balance account the caller
    /// defaults in.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get(&self, user_id: UserId) -> Result<Option<AccountBalance>>;

    /// Insert or replace the balance snapshot for a user id.
    ///
    /// Returns the snapshot as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn upsert(&self, user_id: UserId, balance: i64, updated_at_ms: i64) -> Result<AccountBalance>;
}

/// The append-only transaction record store.
pub trait HistoryStore: Send + Sync {
    /// Append a record, assigning it the next record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn append(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionKind,
        created_at_ms: i64,
    ) -> Result<TransactionRecord>;

    /// List all records for a user id, in unspecified order.
    ///
    /// Callers that need recency ordering sort by record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>>;
}
