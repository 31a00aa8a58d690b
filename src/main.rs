mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod logging;
mod routes;
mod web;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::core::client::cluster_adapter::KubeClusterAdapter;
use crate::core::client::kube_client::build_kube_client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init_tracing(config.log_dir.as_deref())?;

    // Without credentials there is nothing to serve
    let connection = build_kube_client(&config.credentials)
        .await
        .context("could not configure Kubernetes client")?;

    let adapter = Arc::new(KubeClusterAdapter::new(connection.client));
    let state = build_app_state(adapter, connection.context);
    let app = routes::app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, cluster client released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
