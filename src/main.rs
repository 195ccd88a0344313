use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use libris::libris_config::ServerConfig;
use libris::logging::{init_tracing, shutdown_tracer};
use libris::metrics::{init_metrics, metrics_app};
use libris::router::init_router;
use libris::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await?;
    let mut app = init_router(state);

    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
        info!("Prometheus metrics available at /metrics");
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("🚀 Server running on http://{}", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
