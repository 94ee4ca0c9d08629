//! Model metrics source.
//!
//! Only the placeholder source exists today; a registry-backed source plugs in
//! through [`ModelMetricsSource`] without touching the handlers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use monitoring_core::error::Result;
use monitoring_core::model::ModelMetrics;

#[async_trait]
pub trait ModelMetricsSource: Send + Sync {
    async fn model_metrics(&self, now: DateTime<Utc>) -> Result<ModelMetrics>;
}

/// Fixed values (version 1.0.0, 45 req/h, 2% errors, updated 2h ago).
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticModelMetrics;

#[async_trait]
impl ModelMetricsSource for StaticModelMetrics {
    async fn model_metrics(&self, now: DateTime<Utc>) -> Result<ModelMetrics> {
        Ok(ModelMetrics::placeholder(now))
    }
}
