use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use todo_server::config::{load_config, print_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load config")?;
    todo_server::logging::init(&config.log).context("failed to install logger")?;
    print_config(&config);

    let store = Arc::new(TodoStore::new());
    let router = todo_server::build_router(&config, store);

    let listener = TcpListener::bind(config.server.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.server.addr()))?;

    todo_server::run_with_shutdown(listener, router, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for shutdown signal: {e}");
        }
        tracing::info!("received shutdown signal");
    })
    .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}
