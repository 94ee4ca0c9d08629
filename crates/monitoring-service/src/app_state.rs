//! Shared application state for the monitoring service.
//!
//! Everything here is built once at startup and only read afterwards; the
//! store client and capabilities are injected so tests can substitute fakes.

use std::sync::Arc;

use monitoring_core::error::Result;

use crate::alerts::{AlertSink, LogAlertSink};
use crate::config::MonitoringConfig;
use crate::model_metrics::{ModelMetricsSource, StaticModelMetrics};
use crate::obs::ServiceMetrics;
use crate::store::{self, PredictionStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: MonitoringConfig,
    store: Arc<dyn PredictionStore>,
    model_metrics: Arc<dyn ModelMetricsSource>,
    alerts: Arc<dyn AlertSink>,
    metrics: ServiceMetrics,
}

impl AppState {
    /// State with the placeholder model metrics and the logging alert sink.
    pub fn new(cfg: MonitoringConfig, store: Arc<dyn PredictionStore>) -> Self {
        Self::with_capabilities(
            cfg,
            store,
            Arc::new(StaticModelMetrics),
            Arc::new(LogAlertSink),
        )
    }

    pub fn with_capabilities(
        cfg: MonitoringConfig,
        store: Arc<dyn PredictionStore>,
        model_metrics: Arc<dyn ModelMetricsSource>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                model_metrics,
                alerts,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    /// Connect the configured store backend and build default state.
    pub async fn from_config(cfg: MonitoringConfig) -> Result<Self> {
        let store = store::connect(&cfg.store).await?;
        Ok(Self::new(cfg, store))
    }

    pub fn cfg(&self) -> &MonitoringConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn PredictionStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn model_metrics_source(&self) -> Arc<dyn ModelMetricsSource> {
        Arc::clone(&self.inner.model_metrics)
    }

    pub fn alert_sink(&self) -> Arc<dyn AlertSink> {
        Arc::clone(&self.inner.alerts)
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
