use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{AssetFilters, TechAsset, UpdateStatus},
    RegistryState,
};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "registry-service" })))
}

// ── List / filter ─────────────────────────────────────────────────────────────

pub async fn list_assets(
    State(state): State<RegistryState>,
    Query(filters): Query<AssetFilters>,
) -> AppResult<Json<Vec<TechAsset>>> {
    // An empty ?status= is the same as no filter at all.
    let status = filters.status.as_deref().filter(|s| !s.is_empty());

    let assets = state.store.read().await.list(status);

    info!(count = assets.len(), status = status.unwrap_or("<all>"), "Listed assets");

    Ok(Json(assets))
}

// ── Update status ─────────────────────────────────────────────────────────────

pub async fn update_asset_status(
    State(state): State<RegistryState>,
    Path(invnumber): Path<i64>,
    payload: Result<Json<UpdateStatus>, JsonRejection>,
) -> AppResult<Json<TechAsset>> {
    // Every malformed body is a 400, regardless of which way it failed to decode.
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    match state.store.write().await.update_status(invnumber, &payload.status) {
        Some(asset) => {
            info!(invnumber, status = %asset.status, "Updated asset status");
            Ok(Json(asset))
        }
        None => Err(AppError::NotFound(format!("Asset {} not found", invnumber))),
    }
}
