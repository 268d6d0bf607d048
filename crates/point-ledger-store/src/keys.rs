//! Key encoding utilities for `RocksDB`.
//!
//! All keys are big-endian integers, so records for one user sort
//! contiguously and, within a user, in assignment order.

use point_ledger_core::{RecordId, UserId};

/// Create a balance key from a user id.
#[must_use]
pub fn balance_key(user_id: UserId) -> [u8; 8] {
    user_id.to_be_bytes()
}

/// Create a record key from a record id.
#[must_use]
pub fn record_key(record_id: RecordId) -> [u8; 8] {
    record_id.to_be_bytes()
}

/// Create a user-record index key.
///
/// Format: `user_id (8 bytes) || record_id (8 bytes)`
///
/// Record ids are monotonic, so a user's index keys iterate oldest-first.
#[must_use]
pub fn user_record_key(user_id: UserId, record_id: RecordId) -> Vec<u8> {
    let mut key = Vec::with_capacity(16);
    key.extend_from_slice(&user_id.to_be_bytes());
    key.extend_from_slice(&record_id.to_be_bytes());
    key
}

/// Create a prefix for iterating all records for a user.
#[must_use]
pub fn user_records_prefix(user_id: UserId) -> [u8; 8] {
    user_id.to_be_bytes()
}

/// Extract the record id from a user-record index key.
///
/// # Panics
///
/// Panics if the key is not at least 16 bytes.
#[must_use]
pub fn extract_record_id_from_user_key(key: &[u8]) -> RecordId {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&key[8..16]);
    RecordId::from_be_bytes(bytes)
}
