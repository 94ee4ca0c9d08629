//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use monitoring_core::error::{MonitoringError, Result};

pub use schema::{MonitoringConfig, ServerSection, StoreBackend, StoreSection};

pub fn load_from_file(path: &str) -> Result<MonitoringConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MonitoringError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<MonitoringConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            let cfg = MonitoringConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(MonitoringError::Config(format!("read config {path} failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<MonitoringConfig> {
    let cfg: MonitoringConfig = serde_yaml::from_str(s)
        .map_err(|e| MonitoringError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
