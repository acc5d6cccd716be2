//! Dashboard metrics endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    services::metrics::{MetricsResponse, StatusSummary, TypeSummary},
};

/// Dashboard headline numbers
#[utoipa::path(
    get,
    path = "/api/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Aggregate metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(State(state): State<crate::AppState>) -> AppResult<Json<MetricsResponse>> {
    let metrics = state.services.metrics.metrics().await?;
    Ok(Json(metrics))
}

/// Equipment count by type
#[utoipa::path(
    get,
    path = "/api/type-summary",
    tag = "metrics",
    responses(
        (status = 200, description = "Counts by type", body = TypeSummary)
    )
)]
pub async fn get_type_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<TypeSummary>> {
    let summary = state.services.metrics.type_summary().await?;
    Ok(Json(summary))
}

/// Equipment count by status
#[utoipa::path(
    get,
    path = "/api/status-summary",
    tag = "metrics",
    responses(
        (status = 200, description = "Counts by status", body = StatusSummary)
    )
)]
pub async fn get_status_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<StatusSummary>> {
    let summary = state.services.metrics.status_summary().await?;
    Ok(Json(summary))
}
