//! Data-transfer types served over the HTTP API.
//!
//! Field names are `snake_case` on the wire; timestamps serialize as RFC 3339.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Version reported until a real model registry is wired in.
pub const PLACEHOLDER_MODEL_VERSION: &str = "1.0.0";
pub const PLACEHOLDER_REQUESTS_PER_HOUR: u64 = 45;
pub const PLACEHOLDER_ERROR_RATE: f64 = 0.02;

/// `id` prefix for generated alerts; followed by `%Y%m%d%H%M%S`.
pub const ALERT_ID_PREFIX: &str = "alert-";

/// A stored prediction item, as read from the store.
///
/// Only presence is checked; `confidence` keeps its decimal text so a bad value
/// can be skipped during aggregation instead of failing the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionRecord {
    pub sentiment: Option<String>,
    pub confidence: Option<String>,
}

impl PredictionRecord {
    pub fn new(sentiment: impl Into<String>, confidence: impl Into<String>) -> Self {
        Self {
            sentiment: Some(sentiment.into()),
            confidence: Some(confidence.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMetrics {
    pub total_predictions: u64,
    pub positive_ratio: f64,
    pub avg_confidence: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub model_version: String,
    pub last_updated: DateTime<Utc>,
    pub requests_per_hour: u64,
    pub error_rate: f64,
    pub timestamp: DateTime<Utc>,
}

impl ModelMetrics {
    /// Fixed values: version 1.0.0, updated two hours before `now`.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            model_version: PLACEHOLDER_MODEL_VERSION.to_string(),
            last_updated: now - Duration::hours(2),
            requests_per_hour: PLACEHOLDER_REQUESTS_PER_HOUR,
            error_rate: PLACEHOLDER_ERROR_RATE,
            timestamp: now,
        }
    }
}

/// Client-supplied alert body.
///
/// Missing or `null` fields become empty strings and unknown fields (including
/// a client-sent `id` or `created_at`) are ignored; both are assigned
/// server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlertRequest {
    #[serde(rename = "type", default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub severity: String,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn from_request(req: AlertRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: alert_id(now),
            alert_type: req.alert_type.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
            severity: req.severity.unwrap_or_default(),
            created_at: now,
        }
    }
}

/// `alert-YYYYMMDDHHmmss`; second resolution, so ids within one second collide.
pub fn alert_id(now: DateTime<Utc>) -> String {
    format!("{ALERT_ID_PREFIX}{}", now.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn placeholder_model_metrics() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let m = ModelMetrics::placeholder(now);
        assert_eq!(m.model_version, "1.0.0");
        assert_eq!(m.requests_per_hour, 45);
        assert_eq!(m.error_rate, 0.02);
        assert_eq!(m.last_updated, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert_eq!(m.timestamp, now);
    }

    #[test]
    fn alert_from_request_assigns_id_and_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let req: AlertRequest =
            serde_json::from_str(r#"{"type":"drift","message":"m","severity":"high"}"#).unwrap();
        let alert = Alert::from_request(req, now);
        assert_eq!(alert.id, "alert-20240102030405");
        assert_eq!(alert.alert_type, "drift");
        assert_eq!(alert.created_at, now);

        let v = serde_json::to_value(&alert).unwrap();
        assert_eq!(v["type"], "drift");
        assert_eq!(v["severity"], "high");
    }

    #[test]
    fn alert_request_is_lenient_about_missing_null_and_extra_fields() {
        let req: AlertRequest =
            serde_json::from_str(r#"{"message":"m","id":"client-id","extra":1}"#).unwrap();
        let alert = Alert::from_request(req, Utc::now());
        assert_eq!(alert.alert_type, "");
        assert_eq!(alert.message, "m");

        let req: AlertRequest =
            serde_json::from_str(r#"{"type":null,"message":"m","severity":null}"#).unwrap();
        let alert = Alert::from_request(req, Utc::now());
        assert_eq!(alert.alert_type, "");
        assert_eq!(alert.message, "m");
        assert_eq!(alert.severity, "");

        assert!(serde_json::from_str::<AlertRequest>(r#"{"type":7}"#).is_err());
        assert!(serde_json::from_str::<AlertRequest>(r#""drift""#).is_err());
    }

    #[test]
    fn prediction_metrics_wire_names() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let m = PredictionMetrics {
            total_predictions: 3,
            positive_ratio: 0.5,
            avg_confidence: 0.25,
            timestamp: now,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["total_predictions"], 3);
        assert_eq!(v["positive_ratio"], 0.5);
        assert_eq!(v["avg_confidence"], 0.25);
        assert_eq!(v["timestamp"], "2024-01-01T00:00:00Z");
    }
}
