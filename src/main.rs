use anyhow::Context;
use clap::Parser;
use product_store::api;
use product_store::handler::ProductHandler;
use product_store::lifecycle::{setup_tracing, Config, ProductSystem};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::parse();
    info!(bind = %config.bind, mailbox_size = config.mailbox_size, "Starting product store");

    let system = ProductSystem::new(config.mailbox_size());
    if config.seed_demo_data {
        system.seed_demo_data().await?;
    }

    let app = api::router(ProductHandler::new(system.product_client.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
