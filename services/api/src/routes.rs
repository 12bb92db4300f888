use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use courier_insights::deliveries::{
    narrative, DashboardReport, DeliveryDashboard, Narrative, SelectionState,
};
use courier_insights::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardRequest {
    #[serde(default)]
    pub(crate) vehicle_types: Vec<String>,
    #[serde(default)]
    pub(crate) include_rows: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct VehicleTypesResponse {
    pub(crate) vehicle_types: Vec<String>,
    pub(crate) total_deliveries: usize,
}

pub(crate) fn dashboard_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/vehicle-types", get(vehicle_types_endpoint))
        .route("/api/v1/dashboard", post(dashboard_endpoint))
        .route("/api/v1/narrative", get(narrative_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "dataset_loaded": state.dataset.is_loaded() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn vehicle_types_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<VehicleTypesResponse>, AppError> {
    let table = state.dataset.load()?;
    Ok(Json(VehicleTypesResponse {
        vehicle_types: table.vehicle_types(),
        total_deliveries: table.len(),
    }))
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DashboardRequest>,
) -> Result<Json<DashboardReport>, AppError> {
    let DashboardRequest {
        vehicle_types,
        include_rows,
    } = payload;

    let table = state.dataset.load()?;
    let selection: SelectionState = vehicle_types.into_iter().collect();
    let report = DeliveryDashboard::new(selection)
        .with_rows(include_rows)
        .build(&table);

    Ok(Json(report))
}

pub(crate) async fn narrative_endpoint() -> Json<Narrative> {
    Json(narrative())
}
