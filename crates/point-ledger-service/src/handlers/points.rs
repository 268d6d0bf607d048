//! Point balance, history, charge, and use handlers.
//!
//! Charge and use take the amount as a bare JSON integer body; non-numeric
//! or missing bodies are rejected by the extractor before they reach the
//! engine.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use point_ledger_core::{AccountBalance, TransactionRecord, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Balance snapshot response.
#[derive(Debug, Serialize)]
pub struct PointResponse {
    /// The account's user id.
    pub user_id: i64,
    /// Current point balance.
    pub balance: i64,
    /// Milliseconds timestamp of the last update.
    pub updated_at_ms: i64,
}

impl From<AccountBalance> for PointResponse {
    fn from(snapshot: AccountBalance) -> Self {
        Self {
            user_id: snapshot.user_id.value(),
            balance: snapshot.balance,
            updated_at_ms: snapshot.updated_at_ms,
        }
    }
}

/// History entry response.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    /// Record id.
    pub id: i64,
    /// The account's user id.
    pub user_id: i64,
    /// The transaction amount.
    pub amount: i64,
    /// "charge" or "use".
    pub kind: String,
    /// Milliseconds timestamp of the transaction.
    pub created_at_ms: i64,
}

impl From<&TransactionRecord> for HistoryEntry {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id.value(),
            user_id: record.user_id.value(),
            amount: record.amount,
            kind: record.kind.as_str().to_string(),
            created_at_ms: record.created_at_ms,
        }
    }
}

/// Get a user's current balance. Unknown users read as balance 0.
pub async fn get_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PointResponse>, ApiError> {
    let snapshot = state.engine.get_balance(UserId::new(id))?;
    Ok(Json(snapshot.into()))
}

/// List a user's charge/use history, most recent first.
pub async fn list_histories(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let records = state.engine.list_history(UserId::new(id))?;
    Ok(Json(records.iter().map(HistoryEntry::from).collect()))
}

/// Charge points onto a user's balance and return the new snapshot.
pub async fn charge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(amount): Json<i64>,
) -> Result<Json<PointResponse>, ApiError> {
    let snapshot = state.engine.charge(UserId::new(id), amount).await?;

    tracing::info!(user_id = id, amount, balance = snapshot.balance, "charge accepted");
    Ok(Json(snapshot.into()))
}

/// Use points from a user's balance and return the new snapshot.
pub async fn use_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(amount): Json<i64>,
) -> Result<Json<PointResponse>, ApiError> {
    let snapshot = state.engine.use_points(UserId::new(id), amount).await?;

    tracing::info!(user_id = id, amount, balance = snapshot.balance, "use accepted");
    Ok(Json(snapshot.into()))
}
