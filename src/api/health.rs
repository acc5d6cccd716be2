//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::health::HealthResponse;

pub const BANNER: &str =
    "ConectaSonda API - Sistema Predictivo de Fallas para Torniquetes y Transbank";

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: BANNER.to_string(),
    })
}

/// Component health snapshot (checks store connectivity)
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (
            status = 200,
            description = "Health snapshot, degraded when the store is unreachable",
            body = HealthResponse
        )
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    Json(state.services.health.snapshot().await)
}
