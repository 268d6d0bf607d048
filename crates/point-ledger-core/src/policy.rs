//! Point domain policy.
//!
//! Pure predicates over a balance and a requested amount; no I/O, no shared
//! state. Callers must evaluate these against the balance read under the
//! account's exclusivity guarantee, never a cached value.

use crate::error::{LedgerError, Result};

/// Smallest chargeable amount per request, inclusive.
pub const MIN_CHARGE: i64 = 1;

/// Largest chargeable amount per request, inclusive.
pub const MAX_CHARGE: i64 = 1_000_000;

/// Ceiling an account's balance may ever reach.
pub const MAX_BALANCE: i64 = 1_000_000;

/// Smallest usable amount, inclusive. Using 0 is a recorded no-op.
pub const MIN_USE: i64 = 0;

/// Validate a charge of `amount` against the current balance.
///
/// Checks run in a fixed order: amount floor, per-request limit, balance
/// ceiling. The ceiling sum cannot overflow because both operands have
/// already been bounded by `MAX_BALANCE` and `MAX_CHARGE`.
///
/// # Errors
///
/// - [`LedgerError::InvalidAmount`] if `amount < MIN_CHARGE`.
/// - [`LedgerError::ChargeLimitExceeded`] if `amount > MAX_CHARGE`.
/// - [`LedgerError::BalanceCeilingExceeded`] if the resulting balance would
///   exceed `MAX_BALANCE`.
pub fn validate_charge(current_balance: i64, amount: i64) -> Result<()> {
    if amount < MIN_CHARGE {
        return Err(LedgerError::InvalidAmount {
            minimum: MIN_CHARGE,
            amount,
        });
    }
    if amount > MAX_CHARGE {
        return Err(LedgerError::ChargeLimitExceeded {
            limit: MAX_CHARGE,
            amount,
        });
    }
    if current_balance + amount > MAX_BALANCE {
        return Err(LedgerError::BalanceCeilingExceeded {
            ceiling: MAX_BALANCE,
            balance: current_balance,
            amount,
        });
    }
    Ok(())
}

/// Validate a use of `amount` against the current balance.
///
/// # Errors
///
/// - [`LedgerError::InvalidAmount`] if `amount < MIN_USE`.
/// - [`LedgerError::InsufficientBalance`] if `amount` exceeds the current
///   balance.
pub fn validate_use(current_balance: i64, amount: i64) -> Result<()> {
    if amount < MIN_USE {
        return Err(LedgerError::InvalidAmount {
            minimum: MIN_USE,
            amount,
        });
    }
    if amount > current_balance {
        return Err(LedgerError::InsufficientBalance {
            balance: current_balance,
            requested: amount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_below_floor_is_invalid() {
        assert!(matches!(
            validate_charge(0, 0),
            Err(LedgerError::InvalidAmount { .. })
        ));
        assert!(matches!(
            validate_charge(0, -50),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn charge_above_limit_is_rejected() {
        assert!(matches!(
            validate_charge(0, MAX_CHARGE + 1),
            Err(LedgerError::ChargeLimitExceeded { .. })
        ));
        // The limit check runs before the ceiling check.
        assert!(matches!(
            validate_charge(MAX_BALANCE, MAX_CHARGE + 1),
            Err(LedgerError::ChargeLimitExceeded { .. })
        ));
    }

    #[test]
    fn charge_past_ceiling_is_rejected() {
        assert!(matches!(
            validate_charge(100_001, 999_900),
            Err(LedgerError::BalanceCeilingExceeded { .. })
        ));
        assert!(matches!(
            validate_charge(MAX_BALANCE, 1),
            Err(LedgerError::BalanceCeilingExceeded { .. })
        ));
    }

    #[test]
    fn charge_to_exactly_the_ceiling_is_legal() {
        assert!(validate_charge(100_001, 899_999).is_ok());
        assert!(validate_charge(0, MAX_CHARGE).is_ok());
    }

    #[test]
    fn minimum_charge_is_one_point() {
        assert!(validate_charge(0, MIN_CHARGE).is_ok());
    }

    #[test]
    fn use_of_zero_is_legal() {
        assert!(validate_use(0, 0).is_ok());
        assert!(validate_use(1_000, 0).is_ok());
    }

    #[test]
    fn negative_use_is_invalid() {
        assert!(matches!(
            validate_use(1_000, -1),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn use_beyond_balance_is_rejected() {
        assert!(matches!(
            validate_use(999, 1_000),
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn use_of_entire_balance_is_legal() {
        assert!(validate_use(1_000, 1_000).is_ok());
    }
}
