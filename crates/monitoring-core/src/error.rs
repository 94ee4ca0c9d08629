//! Shared error type across monitoring crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Prediction store scan failed or timed out.
    StoreUnavailable,
    /// Request body could not be parsed.
    InvalidPayload,
    /// Alert could not be persisted.
    PersistenceFailed,
    /// Invalid configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::InvalidPayload => "INVALID_PAYLOAD",
            ClientCode::PersistenceFailed => "PERSISTENCE_FAILED",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MonitoringError>;

/// Unified error type used by core and service.
///
/// `StoreUnavailable` and `InvalidPayload` display as the raw underlying
/// message; HTTP clients see exactly that text in the `error` field.
#[derive(Debug, Error)]
pub enum MonitoringError {
    #[error("{0}")]
    StoreUnavailable(String),
    #[error("{0}")]
    InvalidPayload(String),
    #[error("persistence failed: {0}")]
    Persistence(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MonitoringError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MonitoringError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            MonitoringError::InvalidPayload(_) => ClientCode::InvalidPayload,
            MonitoringError::Persistence(_) => ClientCode::PersistenceFailed,
            MonitoringError::Config(_) => ClientCode::Config,
            MonitoringError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<serde_json::Error> for MonitoringError {
    fn from(e: serde_json::Error) -> Self {
        MonitoringError::InvalidPayload(e.to_string())
    }
}
