//! JSON metrics API.
//!
//! - `GET  /metrics/predictions` : aggregate over a full scan of the prediction table
//! - `GET  /metrics/model`       : model metrics (placeholder values)
//! - `POST /metrics/alert`       : validate and record an alert

pub mod error;
pub mod handlers;

pub use error::ApiError;
