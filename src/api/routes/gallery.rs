//! Gallery Routes
//!
//! Endpoints read by the gallery front-end.
//!
//! - GET /api - Published provider records
//! - GET /update_time - Last update time
//! - POST /refresh - Rescan the image directory now

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::RefreshResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::ProviderRecord;

/// GET /api
///
/// Returns a JSON array of `[id, name, image_path]` string arrays.
pub async fn list_providers(State(state): State<Arc<AppState>>) -> Json<Vec<ProviderRecord>> {
    Json(state.catalog.records().await)
}

/// GET /update_time
///
/// Returns the update time as a JSON string, blank when nothing is published.
pub async fn update_time(State(state): State<Arc<AppState>>) -> Json<String> {
    Json(state.catalog.update_time().await)
}

/// POST /refresh
pub async fn refresh(State(state): State<Arc<AppState>>) -> ApiResult<Json<RefreshResponse>> {
    let providers = state.catalog.refresh().await?;
    let update_time = state.catalog.update_time().await;

    tracing::info!(providers, update_time = %update_time, "Manual catalog refresh completed");

    Ok(Json(RefreshResponse {
        status: "success".to_string(),
        providers,
        update_time,
    }))
}
