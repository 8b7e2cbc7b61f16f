pub mod products;
pub mod suppliers;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(suppliers::routes())
}

/// Full application: resource routes under `/api` plus the root and health probes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "SCM API" }))
        .route("/health", get(health_check))
        .nest("/api", create_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
