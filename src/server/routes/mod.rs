//! HTTP exposure: storefront and back-office routes
//!
//! All routes share the [`ServerHost`] state. Authentication is performed
//! by the hosted backend fronting this API and is not implemented here.

pub mod contacts;
pub mod feed;
pub mod settings;
pub mod vehicles;

use super::host::ServerHost;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full application router
pub fn build_router(host: Arc<ServerHost>) -> Router {
    let api = Router::new()
        .merge(vehicles::routes())
        .merge(contacts::routes())
        .merge(settings::routes())
        .merge(feed::routes());

    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(host)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vitrine"
    }))
}
