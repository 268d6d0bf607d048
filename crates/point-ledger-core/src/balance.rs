//! Account balance snapshots.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// An account's point balance at a moment in time.
///
/// Snapshots are immutable values: a mutation produces a new snapshot that
/// replaces the stored one, never an in-place field update. Absence of a
/// stored snapshot for a user id is equivalent to [`AccountBalance::empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account's user id.
    pub user_id: UserId,

    /// Current point balance. Always within `[0, MAX_BALANCE]`.
    pub balance: i64,

    /// Wall-clock milliseconds of the last update.
    pub updated_at_ms: i64,
}

impl AccountBalance {
    /// Create a snapshot from its parts.
    #[must_use]
    pub const fn new(user_id: UserId, balance: i64, updated_at_ms: i64) -> Self {
        Self {
            user_id,
            balance,
            updated_at_ms,
        }
    }

    /// The zero-balance snapshot an account holds before its first charge.
    #[must_use]
    pub fn empty(user_id: UserId) -> Self {
        Self::new(user_id, 0, now_ms())
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_balance_is_zero() {
        let snapshot = AccountBalance::empty(UserId::new(1));
        assert_eq!(snapshot.user_id, UserId::new(1));
        assert_eq!(snapshot.balance, 0);
        assert!(snapshot.updated_at_ms > 0);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let snapshot = AccountBalance::new(UserId::new(3), 1500, 1_700_000_000_000);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: AccountBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
