//! Maintenance, prediction and report endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{MaintenanceRequest, RiskEstimate},
};

const DEFAULT_REPORT: &str = "general";

#[derive(Serialize, ToSchema)]
pub struct MaintenanceResponse {
    pub success: bool,
    pub message: String,
    pub scheduled_date: String,
    pub maintenance_type: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Report kind (default: general)
    pub report_type: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReportResponse {
    pub success: bool,
    pub report_type: String,
    pub generated_at: DateTime<Utc>,
    pub download_url: String,
}

/// Schedule maintenance (acknowledged, not stored)
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = "maintenance",
    request_body = MaintenanceRequest,
    responses(
        (status = 200, description = "Request acknowledged", body = MaintenanceResponse)
    )
)]
pub async fn schedule_maintenance(
    State(state): State<crate::AppState>,
    Json(request): Json<MaintenanceRequest>,
) -> Json<MaintenanceResponse> {
    state.services.equipment.schedule_maintenance(&request);
    Json(MaintenanceResponse {
        success: true,
        message: format!("Mantenimiento programado para equipo {}", request.equipment_id),
        scheduled_date: request.scheduled_date,
        maintenance_type: request.maintenance_type,
    })
}

/// Failure-probability estimate
#[utoipa::path(
    post,
    path = "/api/predict/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Risk estimate", body = RiskEstimate),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn predict_failure(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RiskEstimate>> {
    let estimate = state.services.risk.predict(id).await?;
    Ok(Json(estimate))
}

/// Report descriptor
#[utoipa::path(
    get,
    path = "/api/reports/generate",
    tag = "maintenance",
    params(ReportQuery),
    responses(
        (status = 200, description = "Report descriptor", body = ReportResponse)
    )
)]
pub async fn generate_report(Query(query): Query<ReportQuery>) -> Json<ReportResponse> {
    let report_type = query
        .report_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_REPORT.to_string());

    Json(ReportResponse {
        success: true,
        download_url: format!("/api/reports/download/{}", report_type),
        report_type,
        generated_at: Utc::now(),
    })
}
