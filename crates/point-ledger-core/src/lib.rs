//! Core types and policy for the point ledger.
//!
//! This crate provides the foundational types used throughout the point
//! ledger:
//!
//! - **Identifiers**: [`UserId`], [`RecordId`]
//! - **Balances**: [`AccountBalance`]
//! - **History**: [`TransactionRecord`], [`TransactionKind`]
//! - **Policy**: the numeric rules bounding legal charge/use amounts
//!
//! # Point Unit
//!
//! Amounts are integers denominated in the smallest point unit and stored as
//! `i64`. A balance is always within `[0, MAX_BALANCE]`; every accepted
//! charge or use produces both a new balance snapshot and an append-only
//! transaction record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod balance;
pub mod error;
pub mod history;
pub mod ids;
pub mod policy;

pub use balance::{now_ms, AccountBalance};
pub use error::{LedgerError, Result};
pub use history::{TransactionKind, TransactionRecord};
pub use ids::{RecordId, UserId};
pub use policy::{MAX_BALANCE, MAX_CHARGE, MIN_CHARGE, MIN_USE};
