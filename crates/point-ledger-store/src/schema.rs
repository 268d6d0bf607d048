//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Balance snapshots, keyed by `user_id` (big-endian `i64`).
    pub const BALANCES: &str = "balances";

    /// Transaction records, keyed by `record_id` (big-endian `i64`).
    pub const HISTORY: &str = "history";

    /// Index: records by user, keyed by `user_id || record_id`.
    /// Value is empty (index only).
    pub const HISTORY_BY_USER: &str = "history_by_user";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::BALANCES, cf::HISTORY, cf::HISTORY_BY_USER]
}
