use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use product_catalog::api;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::{CliArgs, ServerConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ServerConfig::from_args(CliArgs::parse())?;
    info!(?config, "Starting product catalog");

    let system = CatalogSystem::new(config.store_buffer);
    if config.seed_sample_data {
        system
            .seed_sample_products()
            .await
            .context("seeding sample products")?;
    }

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    info!(bind = %listener.local_addr()?, docs = api::OPENAPI_PATH, "listening");

    axum::serve(listener, api::router(system.service()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
