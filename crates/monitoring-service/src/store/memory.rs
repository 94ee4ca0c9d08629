use async_trait::async_trait;
use dashmap::DashMap;

use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::model::PredictionRecord;

use super::PredictionStore;

/// Process-local tables, for development and tests.
#[derive(Default)]
pub struct InMemoryPredictionStore {
    tables: DashMap<String, Vec<PredictionRecord>>,
    fail_with: Option<String>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every scan fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: DashMap::new(),
            fail_with: Some(message.into()),
        }
    }

    pub fn with_records(table: impl Into<String>, records: Vec<PredictionRecord>) -> Self {
        let this = Self::new();
        this.tables.insert(table.into(), records);
        this
    }

    pub fn create_table(&self, table: &str) {
        self.tables.entry(table.to_string()).or_default();
    }

    pub fn insert(&self, table: &str, record: PredictionRecord) {
        self.tables.entry(table.to_string()).or_default().push(record);
    }
}

#[async_trait]
impl PredictionStore for InMemoryPredictionStore {
    async fn scan(&self, table: &str) -> Result<Vec<PredictionRecord>> {
        if let Some(msg) = &self.fail_with {
            return Err(MonitoringError::StoreUnavailable(msg.clone()));
        }
        self.tables
            .get(table)
            .map(|records| records.value().clone())
            .ok_or_else(|| {
                MonitoringError::StoreUnavailable(format!("table not found: {table}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scan_returns_all_records() {
        let store = InMemoryPredictionStore::new();
        store.insert("predictions", PredictionRecord::new("positive", "0.9"));
        store.insert("predictions", PredictionRecord::new("negative", "0.1"));

        let records = store.scan("predictions").await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn missing_table_is_store_unavailable() {
        let store = InMemoryPredictionStore::new();
        let err = store.scan("predictions").await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "STORE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn failing_store_reports_message() {
        let store = InMemoryPredictionStore::failing("connection refused");
        let err = store.scan("predictions").await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
