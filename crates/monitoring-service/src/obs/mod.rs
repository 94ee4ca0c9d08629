//! Request accounting for operational metrics.

pub mod metrics;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub use metrics::ServiceMetrics;

/// Count every routed request by matched path and response status.
///
/// Installed with `route_layer`, so only matched routes reach it.
pub async fn track_requests(
    State(state): State<AppState>,
    route: MatchedPath,
    req: Request,
    next: Next,
) -> Response {
    let route = route.as_str().to_owned();
    let response = next.run(req).await;
    let status = response.status();

    state
        .metrics()
        .http_requests
        .inc(&[("route", route.as_str()), ("status", status.as_str())]);
    tracing::debug!(%route, status = status.as_u16(), "request handled");

    response
}
