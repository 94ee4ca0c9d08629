//! Axum router wiring.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api::handlers, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/metrics/predictions", get(handlers::prediction_metrics))
        .route("/metrics/model", get(handlers::model_metrics))
        .route("/metrics/alert", post(handlers::create_alert))
        .route("/ops/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .with_state(state)
}
