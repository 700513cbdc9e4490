//! Server binary: load the dataset, build the engine, serve the API

use anyhow::Result;
use salescope::config::ServiceConfig;
use salescope::engine::QueryEngine;
use salescope::server::build_router;
use salescope::storage::{InMemoryTransactionStore, load_transactions};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load()?;

    let transactions = load_transactions(&config.dataset)?;
    let store = InMemoryTransactionStore::new(transactions);
    let engine = Arc::new(QueryEngine::new(Arc::new(store)));

    let app = build_router(engine);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "salescope listening");
    axum::serve(listener, app).await?;

    Ok(())
}
