//! Vehicle catalog routes
//!
//! The list endpoint funnels every request through the query pipeline, so
//! the storefront grid and the back-office table see exactly the same
//! ordering and filtering semantics.

use crate::catalog::{Vehicle, VehicleDraft, pipeline, vehicle_slug};
use crate::core::error::{VehicleError, VitrineError};
use crate::core::format::format_price;
use crate::core::query::{ListParams, PaginatedResponse, PaginationMeta};
use crate::server::host::ServerHost;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<ServerHost>> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/categories", get(list_categories))
        .route(
            "/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Detail payload for one vehicle: the record plus its display strings
#[derive(Debug, Serialize)]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    /// Formatted BRL price, `Sob consulta` when the price is on request
    pub price_label: String,
    /// Detail-page URL slug
    pub slug: String,
}

impl From<Vehicle> for VehicleDetail {
    fn from(vehicle: Vehicle) -> Self {
        let price_label = format_price(vehicle.price);
        let slug = vehicle_slug(&vehicle);
        Self {
            vehicle,
            price_label,
            slug,
        }
    }
}

/// GET /api/vehicles — pipeline output, paginated
async fn list_vehicles(
    State(host): State<Arc<ServerHost>>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<Vehicle>>, VitrineError> {
    let state = params.filter_state()?;
    let snapshot = host.vehicles.list().await?;
    let matched = pipeline::apply(&snapshot, &state);

    let page = params.page();
    let limit = params.limit();
    let pagination = PaginationMeta::new(page, limit, matched.len());
    let data: Vec<Vehicle> = matched
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    Ok(Json(PaginatedResponse { data, pagination }))
}

/// GET /api/vehicles/categories — selector options for the full snapshot
async fn list_categories(
    State(host): State<Arc<ServerHost>>,
) -> Result<Json<Vec<String>>, VitrineError> {
    let snapshot = host.vehicles.list().await?;
    Ok(Json(pipeline::category_options(&snapshot)))
}

/// GET /api/vehicles/{id}
async fn get_vehicle(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleDetail>, VitrineError> {
    let vehicle = host
        .vehicles
        .get(id)
        .await?
        .ok_or(VehicleError::NotFound { id })?;

    Ok(Json(vehicle.into()))
}

/// POST /api/vehicles
async fn create_vehicle(
    State(host): State<Arc<ServerHost>>,
    Json(draft): Json<VehicleDraft>,
) -> Result<(StatusCode, Json<Vehicle>), VitrineError> {
    draft.ensure_valid()?;
    let vehicle = host.vehicles.create(draft).await?;
    tracing::info!(id = vehicle.id, plate = %vehicle.plate, "vehicle created");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// PUT /api/vehicles/{id}
async fn update_vehicle(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<Vehicle>, VitrineError> {
    draft.ensure_valid()?;
    let vehicle = host
        .vehicles
        .update(id, draft)
        .await?
        .ok_or(VehicleError::NotFound { id })?;

    tracing::info!(id, "vehicle updated");
    Ok(Json(vehicle))
}

/// DELETE /api/vehicles/{id}
async fn delete_vehicle(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, VitrineError> {
    if !host.vehicles.delete(id).await? {
        return Err(VehicleError::NotFound { id }.into());
    }

    tracing::info!(id, "vehicle deleted");
    Ok(StatusCode::NO_CONTENT)
}
