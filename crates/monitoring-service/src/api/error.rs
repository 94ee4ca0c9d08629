//! HTTP mapping for `MonitoringError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use monitoring_core::error::{ClientCode, MonitoringError};

/// Handler error; renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub MonitoringError);

impl From<MonitoringError> for ApiError {
    fn from(e: MonitoringError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::InvalidPayload => StatusCode::BAD_REQUEST,
            ClientCode::StoreUnavailable
            | ClientCode::PersistenceFailed
            | ClientCode::Config
            | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
