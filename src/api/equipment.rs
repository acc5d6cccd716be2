//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{Equipment, FailureEvent},
};

/// Query parameters for the equipment list
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// torniquete, transbank or all (default: all)
    pub equipment_type: Option<String>,
}

/// Query parameters for a status update
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// operativo, falla or mantenimiento
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
    /// False when the backing store is read-only and the change was not stored
    pub persisted: bool,
}

/// List equipment
#[utoipa::path(
    get,
    path = "/api/equipments",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipments(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipments = state
        .services
        .equipment
        .list(query.equipment_type.as_deref())
        .await?;
    Ok(Json(equipments))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/api/equipments/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Update equipment status
#[utoipa::path(
    put,
    path = "/api/equipments/{id}/status",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = StatusUpdateResponse),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<StatusUpdateResponse>> {
    // A missing value is rejected like any other invalid status
    let status = query.status.unwrap_or_default();
    let change = state.services.equipment.update_status(id, &status).await?;
    Ok(Json(StatusUpdateResponse {
        success: true,
        message: format!("Estado actualizado a {}", change.status),
        persisted: change.persisted,
    }))
}

/// Failure history
#[utoipa::path(
    get,
    path = "/api/failures",
    tag = "equipment",
    responses(
        (status = 200, description = "Failure history", body = Vec<FailureEvent>)
    )
)]
pub async fn list_failures(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<FailureEvent>>> {
    let failures = state.services.equipment.failures().await?;
    Ok(Json(failures))
}
