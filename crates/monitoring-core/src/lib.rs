//! Monitoring core: prediction/model metric DTOs, alert shape, error types, and
//! the aggregation pass over scanned prediction records.
//!
//! This crate carries no HTTP or storage dependencies so the aggregation rules
//! can be tested and reused without a running service.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MonitoringError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregate;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{MonitoringError, Result};
