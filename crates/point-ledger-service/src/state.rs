//! Application state.

use std::sync::Arc;

use point_ledger_engine::LedgerEngine;
use point_ledger_store::RocksStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger engine.
    pub engine: Arc<LedgerEngine<RocksStore>>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(engine: Arc<LedgerEngine<RocksStore>>, config: ServiceConfig) -> Self {
        Self { engine, config }
    }
}
