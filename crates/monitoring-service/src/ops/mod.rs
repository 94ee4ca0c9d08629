//! Operational HTTP endpoints.
//!
//! - `/health`      : liveness, independent of the store
//! - `/ops/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

/// Field order is part of the response contract.
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
}

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(Health {
            status: "healthy",
            service: "monitoring",
        }),
    )
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics().render(),
    )
        .into_response()
}
