//! Identifier types for the point ledger.
//!
//! User ids are assigned externally and never generated here; record ids are
//! assigned by the history store, monotonically and unique across all users.
//! Both are plain `i64` newtypes with a big-endian byte form for store keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user identifier.
///
/// Externally assigned; an id with no stored balance is a zero-balance
/// account, so there is no notion of a "missing" user.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw user id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Big-endian byte form, used as a store key prefix.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transaction record identifier.
///
/// Assigned monotonically by the history store. Ordering follows assignment
/// order, so sorting by record id is sorting by recency; the sequence need
/// not be gap-free.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw record id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Big-endian byte form, used as a store key.
    ///
    /// Record ids are positive, so byte order matches numeric order and keys
    /// iterate oldest-first.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Decode a record id from its big-endian byte form.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(i64::from_be_bytes(bytes))
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
