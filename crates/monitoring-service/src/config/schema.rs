use std::net::SocketAddr;

use monitoring_core::error::{MonitoringError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl MonitoringConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MonitoringError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MonitoringError::Config(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Dynamodb,
    Memory,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Dynamodb => "dynamodb",
            StoreBackend::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_scan_timeout_ms")]
    pub scan_timeout_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            table: default_table(),
            scan_timeout_ms: default_scan_timeout_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(MonitoringError::Config("store.table must not be empty".into()));
        }
        if !(100..=120000).contains(&self.scan_timeout_ms) {
            return Err(MonitoringError::Config(
                "store.scan_timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_table() -> String {
    "predictions".into()
}
fn default_scan_timeout_ms() -> u64 {
    10000
}
