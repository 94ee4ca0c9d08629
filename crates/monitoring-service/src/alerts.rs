//! Alert sink capability.
//!
//! Created alerts are handed to an [`AlertSink`]. No durable sink ships yet;
//! [`LogAlertSink`] records the alert as a structured log event and nothing
//! else.

use async_trait::async_trait;

use monitoring_core::error::Result;
use monitoring_core::model::Alert;

#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Failures surface as `MonitoringError::Persistence`.
    async fn save(&self, alert: &Alert) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn save(&self, alert: &Alert) -> Result<()> {
        tracing::info!(
            id = %alert.id,
            alert_type = %alert.alert_type,
            severity = %alert.severity,
            message = %alert.message,
            "alert created"
        );
        Ok(())
    }
}
