//! Point Ledger HTTP API Service.
//!
//! This crate provides the HTTP dispatch layer over the ledger engine:
//!
//! - Balance lookup and history listing
//! - Charge and use mutations
//!
//! Route paths and body shapes follow the point API convention: amounts are
//! bare JSON integers in the smallest point unit, and charge/use are `PATCH`
//! requests against the account resource.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Query handlers stay async for handler-signature consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
