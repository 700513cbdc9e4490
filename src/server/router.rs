//! Router assembly for the query API

use crate::engine::QueryEngine;
use crate::server::handlers;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
}

/// Build the full API router
///
/// Exposes the three query endpoints, liveness routes, permissive CORS
/// (the UI is served from another origin) and request tracing.
pub fn build_router(engine: Arc<QueryEngine>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/api/transactions", get(handlers::list_transactions))
        .route("/api/transactions/filters", get(handlers::filter_options))
        .route("/api/transactions/summary", get(handlers::summary))
        .with_state(state)
        .merge(health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "salescope"
    }))
}
