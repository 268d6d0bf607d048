//! Transaction history records.
//!
//! Every accepted charge or use appends exactly one record. Records are
//! append-only: once written they are never modified or deleted.

use serde::{Deserialize, Serialize};

use crate::{RecordId, UserId};

/// An immutable record of a single balance-changing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record id, assigned by the history store.
    pub id: RecordId,

    /// The account whose balance changed.
    pub user_id: UserId,

    /// The requested amount. Non-negative; the kind carries the direction.
    pub amount: i64,

    /// Whether the transaction charged or used points.
    pub kind: TransactionKind,

    /// Wall-clock milliseconds of the transaction.
    pub created_at_ms: i64,
}

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Points added to the balance.
    Charge,

    /// Points removed from the balance. A use of 0 is legal and recorded.
    Use,
}

impl TransactionKind {
    /// Check if this kind increases the balance.
    #[must_use]
    pub const fn is_credit(self) -> bool {
        matches!(self, Self::Charge)
    }

    /// Check if this kind decreases the balance.
    #[must_use]
    pub const fn is_debit(self) -> bool {
        matches!(self, Self::Use)
    }

    /// The kind's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Use => "use",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_direction() {
        assert!(TransactionKind::Charge.is_credit());
        assert!(!TransactionKind::Charge.is_debit());
        assert!(TransactionKind::Use.is_debit());
        assert!(!TransactionKind::Use.is_credit());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Charge).unwrap(),
            "\"charge\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Use).unwrap(),
            "\"use\""
        );
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = TransactionRecord {
            id: RecordId::new(12),
            user_id: UserId::new(4),
            amount: 500,
            kind: TransactionKind::Charge,
            created_at_ms: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
