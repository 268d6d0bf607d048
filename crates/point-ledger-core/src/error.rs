//! Error types for ledger operations.

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while charging, using, or querying points.
///
/// The policy variants are deterministic functions of current state and
/// input; retrying them cannot change the outcome, so callers get them
/// immediately and the engine never retries. `Storage` wraps a failed store
/// read or write; the engine fails closed and leaves any retry to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Amount is below the operation's floor.
    #[error("amount must be at least {minimum}, got {amount}")]
    InvalidAmount {
        /// The operation's inclusive floor.
        minimum: i64,
        /// The requested amount.
        amount: i64,
    },

    /// A single charge exceeds the per-request ceiling.
    #[error("charge of {amount} exceeds the per-request limit of {limit}")]
    ChargeLimitExceeded {
        /// The inclusive per-request limit.
        limit: i64,
        /// The requested amount.
        amount: i64,
    },

    /// The resulting balance would exceed the account ceiling.
    #[error("charging {amount} onto balance {balance} would exceed the maximum balance of {ceiling}")]
    BalanceCeilingExceeded {
        /// The balance ceiling.
        ceiling: i64,
        /// The balance at validation time.
        balance: i64,
        /// The requested amount.
        amount: i64,
    },

    /// A use amount exceeds the current balance.
    #[error("insufficient balance: balance={balance}, requested={requested}")]
    InsufficientBalance {
        /// The balance at validation time.
        balance: i64,
        /// The requested amount.
        requested: i64,
    },

    /// The account or history store failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Whether this error is a deterministic policy rejection rather than a
    /// storage failure.
    #[must_use]
    pub const fn is_policy_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
