use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    client::UpdateOutcome,
    error::{AppError, AppResult},
    models::{TechAsset, STATUS_DECOMMISSIONED, STATUS_IN_USE},
    ReportingState,
};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "reporting-service" })))
}

// ── Derived views ─────────────────────────────────────────────────────────────

pub async fn list_in_use(State(state): State<ReportingState>) -> AppResult<Json<Vec<TechAsset>>> {
    let assets = state.registry.list_by_status(STATUS_IN_USE).await?;
    info!(count = assets.len(), "Listed in-use assets");
    Ok(Json(assets))
}

pub async fn list_decommissioned(
    State(state): State<ReportingState>,
) -> AppResult<Json<Vec<TechAsset>>> {
    let assets = state.registry.list_by_status(STATUS_DECOMMISSIONED).await?;
    info!(count = assets.len(), "Listed decommissioned assets");
    Ok(Json(assets))
}

// ── Decommission ──────────────────────────────────────────────────────────────

pub async fn send_to_dump(
    State(state): State<ReportingState>,
    Path(invnumber): Path<i64>,
) -> AppResult<Json<TechAsset>> {
    match state.registry.update_status(invnumber, STATUS_DECOMMISSIONED).await? {
        UpdateOutcome::Updated(asset) => {
            info!(invnumber, "Asset sent to dump");
            Ok(Json(asset))
        }
        UpdateOutcome::NotFound => {
            Err(AppError::NotFound(format!("Asset {} not found in registry", invnumber)))
        }
    }
}
