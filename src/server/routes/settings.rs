//! Site settings routes
//!
//! The storefront reads the settings; the back office patches them. A
//! patch is normalized (WhatsApp prefix) and format-checked before it
//! reaches the store.

use crate::core::error::VitrineError;
use crate::server::host::ServerHost;
use crate::settings::{SettingsPatch, SiteSettings};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<ServerHost>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}

/// GET /api/settings
async fn get_settings(
    State(host): State<Arc<ServerHost>>,
) -> Result<Json<SiteSettings>, VitrineError> {
    let settings = host.settings.get().await?;
    Ok(Json(settings))
}

/// PUT /api/settings — merge a partial update
async fn update_settings(
    State(host): State<Arc<ServerHost>>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<SiteSettings>, VitrineError> {
    let patch = patch.normalized();
    patch.ensure_valid()?;

    let settings = host.settings.update(patch).await?;
    tracing::info!("site settings updated");
    Ok(Json(settings))
}
