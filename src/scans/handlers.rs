use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    scans::{
        dto::{ClearResponse, CreateScanRequest},
        repo_types::ScanHistory,
        services::{normalize, RECENT_LIMIT},
    },
    state::AppState,
};

pub fn scan_routes() -> Router<AppState> {
    Router::new().route(
        "/scans",
        get(list_scans).post(create_scan).delete(clear_scans),
    )
}

#[instrument(skip(state))]
pub async fn list_scans(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScanHistory>>, ApiError> {
    let scans = state.scans.recent(RECENT_LIMIT).await?;
    Ok(Json(scans))
}

#[instrument(skip(state, payload))]
pub async fn create_scan(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateScanRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<ScanHistory>), ApiError> {
    // A `null` body carries no fields, so it fails the required-field check.
    let Json(payload) = payload?;
    let scan = normalize(payload.unwrap_or_default(), OffsetDateTime::now_utc())?;
    let saved = state.scans.insert(scan).await?;
    info!(scan_id = %saved.id, disease = %saved.disease, "scan recorded");
    Ok((StatusCode::CREATED, Json(saved)))
}

#[instrument(skip(state))]
pub async fn clear_scans(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    let deleted = state.scans.count().await?;
    let removed = state.scans.delete_all().await?;
    info!(deleted, removed, "scan history cleared");
    Ok(Json(ClearResponse { deleted }))
}
