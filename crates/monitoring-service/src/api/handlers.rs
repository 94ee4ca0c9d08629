use std::time::{Duration, Instant};

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::Utc;

use monitoring_core::aggregate::summarize;
use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::model::{
    Alert, AlertRequest, ModelMetrics, PredictionMetrics, PredictionRecord,
};

use crate::api::ApiError;
use crate::app_state::AppState;

/// Severities kept as metric labels; anything else is counted as `other`.
const KNOWN_SEVERITIES: [&str; 4] = ["low", "medium", "high", "critical"];

pub async fn prediction_metrics(
    State(state): State<AppState>,
) -> std::result::Result<Json<PredictionMetrics>, ApiError> {
    let records = scan_predictions(&state).await?;
    let metrics = summarize(&records, Utc::now());
    tracing::debug!(
        total = metrics.total_predictions,
        positive_ratio = metrics.positive_ratio,
        "prediction metrics computed"
    );
    Ok(Json(metrics))
}

pub async fn model_metrics(
    State(state): State<AppState>,
) -> std::result::Result<Json<ModelMetrics>, ApiError> {
    let metrics = state.model_metrics_source().model_metrics(Utc::now()).await?;
    Ok(Json(metrics))
}

/// The body is taken raw so malformed JSON maps to our own 400 shape instead
/// of the extractor's rejection.
pub async fn create_alert(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<(StatusCode, Json<Alert>), ApiError> {
    let req: AlertRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting alert payload");
        MonitoringError::from(e)
    })?;

    let alert = Alert::from_request(req, Utc::now());
    state.alert_sink().save(&alert).await?;

    let severity = if KNOWN_SEVERITIES.contains(&alert.severity.as_str()) {
        alert.severity.as_str()
    } else {
        "other"
    };
    state.metrics().alerts_created.inc(&[("severity", severity)]);

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Full scan of the configured table, bounded by `store.scan_timeout_ms`.
async fn scan_predictions(state: &AppState) -> Result<Vec<PredictionRecord>> {
    let cfg = &state.cfg().store;
    let store = state.store();
    let started = Instant::now();

    let result = match tokio::time::timeout(
        Duration::from_millis(cfg.scan_timeout_ms),
        store.scan(&cfg.table),
    )
    .await
    {
        Ok(r) => r,
        Err(_) => Err(MonitoringError::StoreUnavailable(format!(
            "scan of table {} timed out after {}ms",
            cfg.table, cfg.scan_timeout_ms
        ))),
    };

    let metrics = state.metrics();
    metrics.scan_duration.observe(&[], started.elapsed());
    match &result {
        Ok(_) => metrics.store_scans.inc(&[("outcome", "ok")]),
        Err(e) => {
            metrics.store_scans.inc(&[("outcome", "error")]);
            tracing::warn!(table = %cfg.table, error = %e, "prediction scan failed");
        }
    }

    result
}
