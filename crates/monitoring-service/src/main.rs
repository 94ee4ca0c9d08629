//! Prediction monitoring service.
//!
//! - GET  /health, /metrics/predictions, /metrics/model, /ops/metrics
//! - POST /metrics/alert
//! - Config: `MONITORING_CONFIG` (default `monitoring.yaml`; defaults if absent)
//! - Graceful shutdown on Ctrl-C / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monitoring_core::error::{MonitoringError, Result};
use monitoring_service::{app_state::AppState, config, router};

const CONFIG_ENV: &str = "MONITORING_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "monitoring.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                error = %e,
                code = e.client_code().as_str(),
                "monitoring service failed"
            );
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::from_config(cfg).await?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MonitoringError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "monitoring service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MonitoringError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
