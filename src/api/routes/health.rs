//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Catalog status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Degraded when providers are configured but none of their images is
/// published.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.catalog.snapshot().await;
    let configured = state.catalog.provider_count();

    let status = if configured > 0 && snapshot.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        providers: snapshot.len(),
        configured,
        update_time: snapshot.update_time,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
