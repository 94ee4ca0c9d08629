//! Prediction store client.
//!
//! The service only ever performs full scans; backends differ in where the
//! records come from. The client is built once at startup and shared
//! read-only across requests.

pub mod dynamo;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use monitoring_core::error::Result;
use monitoring_core::model::PredictionRecord;

use crate::config::{StoreBackend, StoreSection};

pub use dynamo::DynamoPredictionStore;
pub use memory::InMemoryPredictionStore;

/// Retrieve-all access to a prediction table.
#[async_trait]
pub trait PredictionStore: Send + Sync {
    /// Every item in `table`. Transport, auth, and missing-table failures
    /// surface as `MonitoringError::StoreUnavailable`.
    async fn scan(&self, table: &str) -> Result<Vec<PredictionRecord>>;
}

/// Build the configured backend.
pub async fn connect(cfg: &StoreSection) -> Result<Arc<dyn PredictionStore>> {
    let store: Arc<dyn PredictionStore> = match cfg.backend {
        StoreBackend::Dynamodb => Arc::new(DynamoPredictionStore::from_env().await),
        StoreBackend::Memory => {
            let store = InMemoryPredictionStore::new();
            store.create_table(&cfg.table);
            Arc::new(store)
        }
    };
    tracing::info!(backend = cfg.backend.as_str(), table = %cfg.table, "prediction store ready");
    Ok(store)
}
