//! Prediction monitoring service library entry.
//!
//! Wires config, the prediction store client, the metrics API, and
//! operational endpoints into an axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod alerts;
pub mod api;
pub mod app_state;
pub mod config;
pub mod model_metrics;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
